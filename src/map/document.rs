use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use super::template::MAP_TEMPLATE;

/// One drawable layer of the output map.
///
/// Coordinates are `[lat, lon]` pairs, the order the rendering library
/// expects.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Layer {
    Marker {
        location: [f64; 2],
        color: String,
        symbol: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        popup: Option<String>,
    },
    Polygon {
        ring: Vec<[f64; 2]>,
        color: String,
        fill_color: String,
        fill_opacity: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        popup: Option<String>,
    },
    Polyline {
        path: Vec<[f64; 2]>,
        color: String,
        weight: f64,
        opacity: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        popup: Option<String>,
    },
}

/// Write-once accumulation of map layers, rendered into a self-contained
/// Leaflet HTML page.
#[derive(Debug, Clone)]
pub struct MapDocument {
    title: String,
    center: [f64; 2],
    zoom: u8,
    layers: Vec<Layer>,
}

impl MapDocument {
    pub fn new(title: &str, center_lat: f64, center_lon: f64, zoom: u8) -> Self {
        Self {
            title: title.to_string(),
            center: [center_lat, center_lon],
            zoom,
            layers: Vec::new(),
        }
    }

    pub fn add_marker(
        &mut self,
        latitude: f64,
        longitude: f64,
        color: &str,
        symbol: &str,
        popup: Option<String>,
    ) {
        self.layers.push(Layer::Marker {
            location: [latitude, longitude],
            color: color.to_string(),
            symbol: symbol.to_string(),
            popup,
        });
    }

    pub fn add_polygon(
        &mut self,
        ring: Vec<[f64; 2]>,
        color: &str,
        fill_color: &str,
        fill_opacity: f64,
        popup: Option<String>,
    ) {
        self.layers.push(Layer::Polygon {
            ring,
            color: color.to_string(),
            fill_color: fill_color.to_string(),
            fill_opacity,
            popup,
        });
    }

    pub fn add_polyline(
        &mut self,
        path: Vec<[f64; 2]>,
        color: &str,
        weight: f64,
        opacity: f64,
        popup: Option<String>,
    ) {
        self.layers.push(Layer::Polyline {
            path,
            color: color.to_string(),
            weight,
            opacity,
            popup,
        });
    }

    /// Number of polygon layers currently on the document.
    pub fn polygon_count(&self) -> usize {
        self.layers
            .iter()
            .filter(|layer| matches!(layer, Layer::Polygon { .. }))
            .count()
    }

    /// Render the document into a standalone HTML page.
    pub fn render(&self) -> Result<String> {
        let layers =
            serde_json::to_string(&self.layers).context("failed to serialize map layers")?;
        let center = serde_json::to_string(&self.center)?;

        Ok(MAP_TEMPLATE
            .replace("__TITLE__", &self.title)
            .replace("__CENTER__", &center)
            .replace("__ZOOM__", &self.zoom.to_string())
            .replace("__LAYERS__", &layers))
    }

    /// Render and write the page to disk.
    pub fn save(&self, path: &Path) -> Result<()> {
        let html = self.render()?;
        fs::write(path, html)
            .with_context(|| format!("failed to write map to {}", path.display()))?;

        info!(
            "Saved map with {} layers to {}",
            self.layers.len(),
            path.display()
        );
        Ok(())
    }
}
