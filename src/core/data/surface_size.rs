use crate::core::data::point::Point;
use thiserror::Error;

pub const DEFAULT_SURFACE_WIDTH: u32 = 700;
pub const DEFAULT_SURFACE_HEIGHT: u32 = 700;

/// Bytes per pixel in the RGBA output buffer.
pub const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum SurfaceSizeError {
    #[error("surface size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Dimensions of the raster surface. Pixels are addressed `[0, width) x [0, height)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SurfaceSize {
    width: u32,
    height: u32,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_SURFACE_WIDTH,
            height: DEFAULT_SURFACE_HEIGHT,
        }
    }
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceSizeError> {
        if width == 0 || height == 0 {
            return Err(SurfaceSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn buffer_len(&self) -> usize {
        self.pixel_count() * BYTES_PER_PIXEL
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Every pixel in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let width = self.width;

        (0..self.height).flat_map(move |y| (0..width).map(move |x| Point { x, y }))
    }
}
