use std::ops::{Add, Mul};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    #[must_use]
    pub fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// Cheap stand-in for the modulus used by the escape test: `|real + imag|`.
    ///
    /// This is not a norm. Points on the anti-diagonal (`real == -imag`) score
    /// zero however far out they are, which changes which points escape.
    #[must_use]
    pub fn diagonal_sum_abs(&self) -> f64 {
        (self.real + self.imag).abs()
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}
