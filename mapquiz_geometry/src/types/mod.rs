// Core geometric types of the quiz engine: `Coordinates` (longitude/latitude pairs),
// `ClosedRing` (one closed outer boundary), `Region` (a raw polygon record, possibly
// several rings meaning "any of these areas") and `Geometry` (the normalized
// single- or multi-part shape that the combiner works on).

mod coordinates;
mod geometry;
mod region;
mod ring;
mod traits;

pub use coordinates::*;
pub use geometry::*;
pub use region::*;
pub use ring::*;
pub use traits::*;
