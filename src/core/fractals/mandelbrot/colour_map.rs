use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;

/// Linear grayscale ramp over `[0, max_iterations]`; points that hit the
/// ceiling are treated as inside the set and drawn black.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GrayscaleIntensity {
    max_iterations: u32,
}

impl GrayscaleIntensity {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }

    /// Ties round to even, the way clamped byte arrays store `x.5`.
    #[must_use]
    pub fn intensity(&self, iterations: u32) -> u8 {
        if iterations >= self.max_iterations {
            return 0;
        }

        let scaled = f64::from(iterations) / f64::from(self.max_iterations) * f64::from(u8::MAX);
        scaled.round_ties_even() as u8
    }
}

impl ColourMap for GrayscaleIntensity {
    type T = u32;

    fn map(&self, value: u32) -> Colour {
        Colour::grey(self.intensity(value))
    }
}
