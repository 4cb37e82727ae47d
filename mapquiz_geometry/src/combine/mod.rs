//! Incremental union and intersection of canonical geometries.

mod combiner;
mod result;

pub use combiner::*;
pub use result::*;
