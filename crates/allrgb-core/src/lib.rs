pub mod error;
pub mod validate;

pub mod assign;
pub mod bucket;
pub mod cube;
pub mod field;
pub mod pipeline;
pub mod plan;

pub use crate::assign::grid::OutputGrid;
pub use crate::cube::colour::Rgb;
pub use crate::cube::enumerate::{Cube, Enumerator, Ordering};
pub use crate::field::grid::{FieldSource, IntensityField};
pub use crate::pipeline::{render, Rendering};
pub use crate::plan::plan::Plan;
