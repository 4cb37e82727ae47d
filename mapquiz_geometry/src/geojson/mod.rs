//! GeoJSON interface of the engine.
//!
//! Regions come in as GeoJSON `Polygon` geometries (bare, wrapped in a `Feature` or
//! collected in a `FeatureCollection`) and results go out as lists of one-ring
//! `Polygon` geometries.

mod parse;
mod read;
mod write;

pub use parse::*;
pub use read::*;
pub use write::*;
