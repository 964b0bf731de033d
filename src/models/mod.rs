//! Core data models for the building pipeline.

pub mod building;

pub use building::{Building, BuildingRecord, NearestBuilding};
