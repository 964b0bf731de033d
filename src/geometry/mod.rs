//! WKT parsing and coordinate reference system transformation.

mod parse;
mod reproject;

pub use parse::{parse_records, parse_wkt};
pub use reproject::Reprojector;
