pub mod app;
pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod math;
pub mod render;
pub mod scenes;
pub mod types;

pub use error::{Error, Result};
