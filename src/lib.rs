mod cli;
mod config;
mod controllers;
mod core;
mod errors;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use cli::{GuiCli, RendererArgs, SnapshotCli};
pub use config::{ConfigError, RendererConfig};
pub use controllers::cli::snapshot::SnapshotController;
pub use controllers::interactive::InteractiveController;
pub use controllers::interactive::data::frame_data::FrameData;
pub use controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
pub use crate::core::actions::render_frame::render;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::ComplexRect;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::point::Point;
pub use crate::core::data::surface_size::SurfaceSize;
pub use crate::core::data::viewport::{Viewport, ZoomLimits, ZoomStep};
pub use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
pub use crate::core::fractals::mandelbrot::colour_map::GrayscaleIntensity;
pub use crate::core::fractals::mandelbrot::params::MandelbrotParams;
pub use errors::AppError;
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use errors::GuiError;
#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
