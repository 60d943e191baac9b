pub mod config;
pub mod error;
pub mod glutils;
pub mod logging;
pub mod math;
pub mod render;
pub mod screen;
pub mod shaders;
pub mod system;
pub mod window;

pub use config::{resolve_config, GlConfig, GlConfigTemplate, Screen};
pub use error::BackendError;
pub use window::{DvonnWindow, WindowSettings};
