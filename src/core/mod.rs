pub mod controller;
pub mod gpu_context;
pub mod input_adapter;
pub mod window;

pub use controller::{Button, Controller};
pub use gpu_context::GpuContext;
pub use input_adapter::{InputEvent, InputQueue, InputState};
pub use window::WindowDimensions;
