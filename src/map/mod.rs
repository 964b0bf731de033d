//! Interactive map assembly and rendering.
//!
//! Layers accumulate into a [`MapDocument`] which renders to a standalone
//! Leaflet HTML page.

mod document;
mod render;
mod template;

pub use document::MapDocument;
pub use render::build_map;
