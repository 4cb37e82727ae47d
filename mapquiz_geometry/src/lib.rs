//! # mapquiz_geometry
//!
//! Polygon reduction engine behind a "narrow the map" quiz. Every answer contributes a
//! [`Region`]; the engine keeps the running union of all selected regions (for display)
//! and the running intersection (the narrowed candidate area).
//!
//! The pipeline is `normalize → combine → measure`:
//! - [`GeometryNormalizer`] turns a raw multi-ring region into a canonical [`Geometry`],
//! - [`PolygonCombiner`] folds the geometries into a [`CombinationResult`],
//! - [`math`] measures the resulting parts in km².
//!
//! [`NarrowingPipeline`] wires the three stages together for an [`AnswerSelection`].
//!
//! ```rust
//! use mapquiz_geometry::{Answer, AnswerSelection, CombineOptions, NarrowingPipeline, Region};
//!
//! let mut selection = AnswerSelection::new();
//! selection.push(Answer::new("west", Region::from(&[[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]]])));
//! selection.push(Answer::new("east", Region::from(&[[[5, 5], [15, 5], [15, 15], [5, 15], [5, 5]]])));
//!
//! let pipeline = NarrowingPipeline::new(CombineOptions::default());
//! let evaluation = pipeline.evaluate(&selection).unwrap();
//! assert!(evaluation.has_valid_region());
//! ```

mod combine;
mod error;
pub mod geojson;
pub mod math;
mod normalize;
mod ops;
mod options;
mod pipeline;
mod types;

pub use combine::*;
pub use error::*;
pub use normalize::*;
pub use ops::*;
pub use options::*;
pub use pipeline::*;
pub use types::*;
