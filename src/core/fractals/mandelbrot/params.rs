use crate::core::fractals::mandelbrot::errors::MandelbrotError;

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_ESCAPE_THRESHOLD: f64 = 16.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotParams {
    max_iterations: u32,
    escape_threshold: f64,
}

impl Default for MandelbrotParams {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_threshold: DEFAULT_ESCAPE_THRESHOLD,
        }
    }
}

impl MandelbrotParams {
    pub fn new(max_iterations: u32, escape_threshold: f64) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        if !(escape_threshold.is_finite() && escape_threshold > 0.0) {
            return Err(MandelbrotError::InvalidEscapeThreshold(escape_threshold));
        }

        Ok(Self {
            max_iterations,
            escape_threshold,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_threshold(&self) -> f64 {
        self.escape_threshold
    }
}
