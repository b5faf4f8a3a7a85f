use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::surface_size::SurfaceSize;
use thiserror::Error;

/// Real-axis extent of the plane rectangle at zoom 1.
pub const BASE_PLANE_WIDTH: f64 = 4.0;
pub const DEFAULT_ZOOM_IN_FACTOR: f64 = 1.1;
pub const DEFAULT_ZOOM_OUT_FACTOR: f64 = 0.9;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ZoomLimitsError {
    #[error("zoom limit must be positive and finite, got {0}")]
    NonPositive(f64),
    #[error("minimum zoom {min} exceeds maximum zoom {max}")]
    Inverted { min: f64, max: f64 },
}

/// Optional clamp on the zoom factor. The default clamps nothing.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ZoomLimits {
    min: Option<f64>,
    max: Option<f64>,
}

impl ZoomLimits {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Result<Self, ZoomLimitsError> {
        for limit in [min, max].into_iter().flatten() {
            if !(limit.is_finite() && limit > 0.0) {
                return Err(ZoomLimitsError::NonPositive(limit));
            }
        }

        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(ZoomLimitsError::Inverted { min, max });
            }
        }

        Ok(Self { min, max })
    }

    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn clamp(&self, zoom: f64) -> f64 {
        let zoom = self.min.map_or(zoom, |min| zoom.max(min));
        self.max.map_or(zoom, |max| zoom.min(max))
    }
}

/// Multipliers applied to the zoom factor per scroll event.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZoomStep {
    pub zoom_in: f64,
    pub zoom_out: f64,
}

impl Default for ZoomStep {
    fn default() -> Self {
        Self {
            zoom_in: DEFAULT_ZOOM_IN_FACTOR,
            zoom_out: DEFAULT_ZOOM_OUT_FACTOR,
        }
    }
}

impl ZoomStep {
    /// Scroll deltas follow the wheel-event convention where a negative
    /// value means the wheel moved up, which zooms in. Anything else,
    /// zero included, zooms out.
    #[must_use]
    pub fn factor_for(&self, delta: f64) -> f64 {
        if delta < 0.0 { self.zoom_in } else { self.zoom_out }
    }
}

/// Which part of the complex plane is on screen.
///
/// The zoom factor is not bounded by default. Repeated zooming eventually
/// runs out of `f64` precision, which shows up as blocky output rather than
/// a failure.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub zoom: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl Viewport {
    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new(self.offset_x, self.offset_y)
    }

    /// Plane rectangle for `surface`: `4 / zoom` wide, height scaled by the
    /// surface aspect ratio, centred on the offset.
    #[must_use]
    pub fn plane_rect(&self, surface: SurfaceSize) -> ComplexRect {
        let width = BASE_PLANE_WIDTH / self.zoom;
        let height = (width * f64::from(surface.height())) / f64::from(surface.width());

        ComplexRect::centered_on(self.center(), width, height)
    }

    /// Applies one scroll event and returns the factor that was multiplied in.
    pub fn scroll(&mut self, delta: f64, step: ZoomStep, limits: ZoomLimits) -> f64 {
        let factor = step.factor_for(delta);
        self.zoom = limits.clamp(self.zoom * factor);

        factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> SurfaceSize {
        SurfaceSize::new(700, 700).unwrap()
    }

    #[test]
    fn test_default_viewport() {
        let viewport = Viewport::default();

        assert_eq!(viewport.zoom, 1.0);
        assert_eq!(viewport.center(), Complex::new(0.0, 0.0));
    }

    #[test]
    fn test_plane_rect_at_default_zoom() {
        let rect = Viewport::default().plane_rect(square());

        assert_eq!(rect.min(), Complex::new(-2.0, -2.0));
        assert_eq!(rect.width(), 4.0);
        assert_eq!(rect.height(), 4.0);
    }

    #[test]
    fn test_plane_rect_keeps_surface_aspect_ratio() {
        let surface = SurfaceSize::new(800, 600).unwrap();
        let rect = Viewport::default().plane_rect(surface);

        assert_eq!(rect.width(), 4.0);
        assert_eq!(rect.height(), 3.0);
        assert_eq!(rect.height() / rect.width(), 600.0 / 800.0);
    }

    #[test]
    fn test_doubling_zoom_halves_extents_and_keeps_center() {
        let mut viewport = Viewport {
            zoom: 1.0,
            offset_x: -0.5,
            offset_y: 0.25,
        };
        let before = viewport.plane_rect(square());

        viewport.zoom *= 2.0;
        let after = viewport.plane_rect(square());

        assert_eq!(after.width(), before.width() / 2.0);
        assert_eq!(after.height(), before.height() / 2.0);
        assert_eq!(before.min().real + before.width() / 2.0, -0.5);
        assert_eq!(before.min().imag + before.height() / 2.0, 0.25);
        assert_eq!(after.min().real + after.width() / 2.0, -0.5);
        assert_eq!(after.min().imag + after.height() / 2.0, 0.25);
    }

    #[test]
    fn test_plane_rect_centered_for_arbitrary_zoom() {
        let viewport = Viewport {
            zoom: 1.1 * 1.1 * 0.9,
            offset_x: 0.3,
            offset_y: -0.7,
        };
        let center = viewport.plane_rect(square()).center();

        assert!((center.real - 0.3).abs() < 1e-12);
        assert!((center.imag + 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_negative_delta_zooms_in_by_exactly_1_1() {
        let mut viewport = Viewport::default();

        let factor = viewport.scroll(-120.0, ZoomStep::default(), ZoomLimits::unbounded());

        assert_eq!(factor, 1.1);
        assert_eq!(viewport.zoom, 1.1);
    }

    #[test]
    fn test_non_negative_delta_zooms_out_by_exactly_0_9() {
        let mut viewport = Viewport::default();

        viewport.scroll(53.0, ZoomStep::default(), ZoomLimits::unbounded());
        assert_eq!(viewport.zoom, 0.9);

        viewport.scroll(0.0, ZoomStep::default(), ZoomLimits::unbounded());
        assert_eq!(viewport.zoom, 0.9 * 0.9);
    }

    #[test]
    fn test_scroll_does_not_move_offset() {
        let mut viewport = Viewport {
            zoom: 3.0,
            offset_x: 1.5,
            offset_y: -2.0,
        };

        viewport.scroll(-1.0, ZoomStep::default(), ZoomLimits::unbounded());

        assert_eq!(viewport.offset_x, 1.5);
        assert_eq!(viewport.offset_y, -2.0);
    }

    #[test]
    fn test_unbounded_zoom_keeps_growing() {
        let mut viewport = Viewport::default();

        for _ in 0..500 {
            viewport.scroll(-1.0, ZoomStep::default(), ZoomLimits::unbounded());
        }

        assert!(viewport.zoom > 1e20);
    }

    #[test]
    fn test_zoom_limits_clamp() {
        let limits = ZoomLimits::new(Some(0.5), Some(2.0)).unwrap();
        let mut viewport = Viewport {
            zoom: 1.95,
            ..Viewport::default()
        };

        viewport.scroll(-1.0, ZoomStep::default(), limits);
        assert_eq!(viewport.zoom, 2.0);

        viewport.zoom = 0.52;
        viewport.scroll(1.0, ZoomStep::default(), limits);
        assert_eq!(viewport.zoom, 0.5);
    }

    #[test]
    fn test_zoom_limits_validation() {
        assert_eq!(
            ZoomLimits::new(Some(0.0), None),
            Err(ZoomLimitsError::NonPositive(0.0))
        );
        assert_eq!(
            ZoomLimits::new(Some(4.0), Some(2.0)),
            Err(ZoomLimitsError::Inverted { min: 4.0, max: 2.0 })
        );
        assert!(ZoomLimits::new(None, Some(1e9)).unwrap().clamp(1e12) == 1e9);
        assert_eq!(ZoomLimits::unbounded().clamp(1e300), 1e300);
        assert_eq!(ZoomLimits::unbounded().clamp(1e-300), 1e-300);
    }
}
