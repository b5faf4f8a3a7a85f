use crate::core::data::point::Point;
use crate::core::data::surface_size::{BYTES_PER_PIXEL, SurfaceSize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("pixel at x:{}, y:{} outside of {}x{} surface", .pixel.x, .pixel.y, .size.width(), .size.height())]
    PixelOutsideBounds { pixel: Point, size: SurfaceSize },
    #[error("surface needs {expected} bytes but buffer holds {actual}")]
    BoundsMismatch { expected: usize, actual: usize },
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA bytes, four per pixel, `4 * width * height` long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    size: SurfaceSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            buffer: vec![0; size.buffer_len()],
        }
    }

    pub fn from_data(size: SurfaceSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        if size.buffer_len() != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected: size.buffer_len(),
                actual: buffer.len(),
            });
        }

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Returns the RGBA bytes of one pixel.
    pub fn pixel(&self, pixel: Point) -> Result<[u8; 4], PixelBufferError> {
        let index = self.index_of(pixel)?;
        let mut rgba = [0; BYTES_PER_PIXEL];
        rgba.copy_from_slice(&self.buffer[index..index + BYTES_PER_PIXEL]);

        Ok(rgba)
    }

    /// Mutable RGBA chunks, one per pixel, row-major.
    pub fn pixels_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        self.buffer.chunks_exact_mut(BYTES_PER_PIXEL)
    }

    /// Iterates the buffer as RGB triples, dropping alpha.
    pub fn rgb_pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.buffer.chunks_exact(BYTES_PER_PIXEL).map(|rgba| &rgba[..3])
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.size.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                size: self.size,
            });
        }

        let row = pixel.y as usize * self.size.width() as usize;

        Ok((row + pixel.x as usize) * BYTES_PER_PIXEL)
    }
}
