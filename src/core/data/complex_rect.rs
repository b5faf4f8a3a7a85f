use crate::core::data::complex::Complex;

/// The rectangle of the complex plane that is mapped onto the surface.
///
/// `min` is the corner mapped to pixel `(0, 0)`; the rectangle extends
/// `width` along the real axis and `height` along the imaginary axis.
/// No size validation happens here: at extreme zoom levels the extents may
/// round to zero or overflow to infinity, and that is rendered as-is.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    min: Complex,
    width: f64,
    height: f64,
}

impl ComplexRect {
    #[must_use]
    pub fn new(min: Complex, width: f64, height: f64) -> Self {
        Self { min, width, height }
    }

    #[must_use]
    pub fn centered_on(center: Complex, width: f64, height: f64) -> Self {
        let min = Complex {
            real: -width / 2.0 + center.real,
            imag: -height / 2.0 + center.imag,
        };

        Self { min, width, height }
    }

    #[must_use]
    pub fn min(&self) -> Complex {
        self.min
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: self.min.real + self.width / 2.0,
            imag: self.min.imag + self.height / 2.0,
        }
    }
}
