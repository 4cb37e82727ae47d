//! Area metrics: geographic areas of rings, geometries and part lists in km².
mod area;

pub use area::*;
