//! Renderer configuration.
//!
//! Every default reproduces the fixed behaviour: a 700x700 surface, 100
//! iterations, escape threshold 16, zoom steps of 1.1 / 0.9 and no zoom clamp.

use crate::core::data::surface_size::{SurfaceSize, SurfaceSizeError};
use crate::core::data::viewport::{ZoomLimits, ZoomLimitsError, ZoomStep};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Surface(#[from] SurfaceSizeError),
    #[error(transparent)]
    Mandelbrot(#[from] MandelbrotError),
    #[error(transparent)]
    ZoomLimits(#[from] ZoomLimitsError),
    #[error("zoom {direction} factor must be positive and finite, got {factor}")]
    InvalidZoomFactor { direction: &'static str, factor: f64 },
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RendererConfig {
    pub surface: SurfaceSize,
    pub params: MandelbrotParams,
    pub zoom_step: ZoomStep,
    pub zoom_limits: ZoomLimits,
    pub show_hud: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceSize::default(),
            params: MandelbrotParams::default(),
            zoom_step: ZoomStep::default(),
            zoom_limits: ZoomLimits::unbounded(),
            show_hud: true,
        }
    }
}

/// Raw, unvalidated settings as they arrive from the command line.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RawRendererConfig {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub escape_threshold: f64,
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
    pub min_zoom: Option<f64>,
    pub max_zoom: Option<f64>,
    pub show_hud: bool,
}

impl TryFrom<RawRendererConfig> for RendererConfig {
    type Error = ConfigError;

    fn try_from(raw: RawRendererConfig) -> Result<Self, Self::Error> {
        let zoom_step = ZoomStep {
            zoom_in: validate_zoom_factor("in", raw.zoom_in_factor)?,
            zoom_out: validate_zoom_factor("out", raw.zoom_out_factor)?,
        };

        Ok(Self {
            surface: SurfaceSize::new(raw.width, raw.height)?,
            params: MandelbrotParams::new(raw.max_iterations, raw.escape_threshold)?,
            zoom_step,
            zoom_limits: ZoomLimits::new(raw.min_zoom, raw.max_zoom)?,
            show_hud: raw.show_hud,
        })
    }
}

fn validate_zoom_factor(direction: &'static str, factor: f64) -> Result<f64, ConfigError> {
    if factor.is_finite() && factor > 0.0 {
        Ok(factor)
    } else {
        Err(ConfigError::InvalidZoomFactor { direction, factor })
    }
}
