use std::io;

use gridmaze::GenError;
use thiserror::Error;

use crate::settings::SettingsError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("Cannot generate maze: {0}")]
    Generation(#[from] GenError),
    #[error("Logger already installed: {0}")]
    Logger(#[from] log::SetLoggerError),
}
