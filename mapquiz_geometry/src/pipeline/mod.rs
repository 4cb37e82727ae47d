//! The quiz-facing side of the engine: the answer selection and the
//! normalize → combine → measure pipeline evaluated on it.

mod narrowing;
mod selection;

pub use narrowing::*;
pub use selection::*;
