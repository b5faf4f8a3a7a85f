use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::point::Point;
use crate::core::data::surface_size::SurfaceSize;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

/// Escape-time evaluator for one frame.
///
/// Two deliberate departures from the textbook set shape the image and are
/// kept as-is:
/// - iteration starts from `z = c` rather than `z = 0`;
/// - a point escapes once `|re(z) + im(z)|` exceeds the threshold, not `|z|`.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    surface: SurfaceSize,
    complex_rect: ComplexRect,
    params: MandelbrotParams,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    fn surface(&self) -> SurfaceSize {
        self.surface
    }

    fn compute(&self, pixel: Point) -> u32 {
        let c = pixel_to_complex_coords(pixel, self.surface, self.complex_rect);

        self.escape_time(c)
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(surface: SurfaceSize, complex_rect: ComplexRect, params: MandelbrotParams) -> Self {
        Self {
            surface,
            complex_rect,
            params,
        }
    }

    /// Number of steps before `c` escapes, or `max_iterations` if it never does.
    #[must_use]
    pub fn escape_time(&self, c: Complex) -> u32 {
        let max_iterations = self.params.max_iterations();
        let threshold = self.params.escape_threshold();
        let mut z = c;
        let mut n = 0;

        while n < max_iterations {
            z = z * z + c;

            if z.diagonal_sum_abs() > threshold {
                break;
            }

            n += 1;
        }

        n
    }
}
