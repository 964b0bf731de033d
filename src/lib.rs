//! Corcovado - nearest-building lookup around a fixed landmark.
//!
//! This library provides the shared pipeline stages for the fetch and locate
//! binaries: dataset loading, window filtering, WKT parsing, reprojection,
//! nearest-building selection and map rendering.

pub mod dataset;
pub mod geometry;
pub mod map;
pub mod models;
pub mod nearest;
pub mod pipeline;

pub use models::{Building, BuildingRecord, NearestBuilding};
