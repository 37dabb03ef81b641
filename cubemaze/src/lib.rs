pub mod constants;
pub mod error;
pub mod logging;
pub mod play;
pub mod render;
pub mod settings;
