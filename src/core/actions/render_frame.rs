use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::surface_size::SurfaceSize;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::GrayscaleIntensity;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;

/// Renders one full frame for `viewport` onto a `surface`-sized RGBA buffer.
///
/// Pure: the same inputs always give a byte-identical buffer. Every pixel is
/// recomputed; nothing is carried over from earlier frames.
#[must_use]
pub fn render(viewport: &Viewport, surface: SurfaceSize, params: MandelbrotParams) -> PixelBuffer {
    let algorithm = MandelbrotAlgorithm::new(surface, viewport.plane_rect(surface), params);
    let iterations = generate_fractal(&algorithm);
    let colour_map = GrayscaleIntensity::new(params.max_iterations());

    generate_pixel_buffer(iterations, &colour_map, surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;
    use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

    fn small_surface() -> SurfaceSize {
        SurfaceSize::new(70, 70).unwrap()
    }

    #[test]
    fn test_render_default_center_pixel_is_black() {
        let surface = SurfaceSize::default();
        let frame = render(&Viewport::default(), surface, MandelbrotParams::default());

        assert_eq!(frame.buffer().len(), 4 * 700 * 700);
        assert_eq!(frame.pixel(Point { x: 350, y: 350 }), Ok([0, 0, 0, 255]));
    }

    #[test]
    fn test_render_matches_escape_time_per_pixel() {
        let surface = small_surface();
        let viewport = Viewport {
            zoom: 1.3,
            offset_x: -0.4,
            offset_y: 0.1,
        };
        let params = MandelbrotParams::default();
        let frame = render(&viewport, surface, params);
        let algorithm = MandelbrotAlgorithm::new(surface, viewport.plane_rect(surface), params);

        for pixel in surface.points() {
            let c = pixel_to_complex_coords(pixel, surface, viewport.plane_rect(surface));
            let n = algorithm.escape_time(c);
            let [r, g, b, a] = frame.pixel(pixel).unwrap();

            assert_eq!(a, 255);
            assert_eq!(r, g);
            assert_eq!(g, b);

            if n == 100 {
                assert_eq!(r, 0);
            } else {
                assert_eq!(r, (f64::from(n) / 100.0 * 255.0).round_ties_even() as u8);
            }
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let viewport = Viewport {
            zoom: 2.5,
            offset_x: 0.25,
            offset_y: -0.5,
        };

        let first = render(&viewport, small_surface(), MandelbrotParams::default());
        let second = render(&viewport, small_surface(), MandelbrotParams::default());

        assert_eq!(first, second);
    }

    #[test]
    fn test_render_changes_with_zoom() {
        let zoomed = Viewport {
            zoom: 4.0,
            ..Viewport::default()
        };

        let base = render(&Viewport::default(), small_surface(), MandelbrotParams::default());
        let closer = render(&zoomed, small_surface(), MandelbrotParams::default());

        assert_ne!(base, closer);
    }

    #[test]
    fn test_render_survives_degenerate_zoom() {
        let viewport = Viewport {
            zoom: f64::INFINITY,
            ..Viewport::default()
        };

        let frame = render(&viewport, small_surface(), MandelbrotParams::default());

        // Every pixel collapses onto the centre, which is in the set.
        assert!(frame.buffer().chunks_exact(4).all(|p| p == [0, 0, 0, 255]));
    }
}
