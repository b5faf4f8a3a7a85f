use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "gui")]
    #[error(transparent)]
    Gui(#[from] GuiError),
}

#[cfg(feature = "gui")]
#[derive(Debug, Error)]
pub enum GuiError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("pixels surface error: {0}")]
    Pixels(#[from] pixels::Error),
    #[error("pixels texture error: {0}")]
    Texture(#[from] pixels::TextureError),
}
