//! Hiking report extraction: candidate discovery plus shape validation.

mod extract;
mod shape;

pub use extract::{candidates, extract};
pub use shape::{ShapeCheck, check_shape};
