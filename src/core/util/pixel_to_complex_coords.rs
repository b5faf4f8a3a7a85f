use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::point::Point;
use crate::core::data::surface_size::SurfaceSize;

/// Maps `pixel` linearly from `[0, W) x [0, H)` onto `complex_rect`.
///
/// The mapping is half-open: pixel 0 lands on the rectangle's minimum corner
/// and pixel `W` (one past the last column) would land on its far edge.
#[must_use]
pub fn pixel_to_complex_coords(
    pixel: Point,
    surface: SurfaceSize,
    complex_rect: ComplexRect,
) -> Complex {
    let min = complex_rect.min();
    let real =
        (f64::from(pixel.x) / f64::from(surface.width())) * complex_rect.width() + min.real;
    let imag =
        (f64::from(pixel.y) / f64::from(surface.height())) * complex_rect.height() + min.imag;

    Complex { real, imag }
}
