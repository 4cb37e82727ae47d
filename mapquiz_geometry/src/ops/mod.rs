//! Planar set operations (union and intersection) behind the [`PlanarSetOperation`]
//! capability, with [`BooleanOverlay`] as the production implementation.

mod boolean;
mod traits;

pub use boolean::*;
pub use traits::*;
