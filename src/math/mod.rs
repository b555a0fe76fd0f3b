mod matrix;
mod vector;

pub use matrix::{format_matrix, translation, translation_report};
pub use vector::{reflect, refract, vectors_report};
