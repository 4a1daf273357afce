//! Dense feature matrix used as classifier input.
pub mod matrix;

pub use matrix::{Array2, ShapeError};
