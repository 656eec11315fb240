use std::{
    fmt::{Display, Error, Formatter},
    ops::{Add, Div, Mul, Neg, Sub},
};

use crate::core::format_real;

/// A complex number `re + j*im`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const I: Complex = Complex { re: 0.0, im: 1.0 };

    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    pub fn from_real(re: f64) -> Self {
        Self::new(re, 0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    /// The modulus, `|z|`.
    pub fn magnitude(&self) -> f64 {
        self.re.hypot(self.im)
    }

    /// The argument in radians, in `(-pi, pi]`.
    pub fn angle(&self) -> f64 {
        self.im.atan2(self.re)
    }
}

impl Display for Complex {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        if self.im.is_sign_negative() && self.im != 0.0 {
            write!(f, "{} - j{}", format_real(self.re), format_real(-self.im))
        } else {
            write!(f, "{} + j{}", format_real(self.re), format_real(self.im))
        }
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

/// Callers are expected to reject a zero divisor first.
impl Div for Complex {
    type Output = Complex;

    fn div(self, rhs: Complex) -> Complex {
        let denominator = rhs.re * rhs.re + rhs.im * rhs.im;
        Complex::new(
            (self.re * rhs.re + self.im * rhs.im) / denominator,
            (self.im * rhs.re - self.re * rhs.im) / denominator,
        )
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::floats_equal;

    fn approx_eq(a: Complex, b: Complex) -> bool {
        floats_equal(a.re, b.re) && floats_equal(a.im, b.im)
    }

    #[test]
    fn arithmetic() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, -1.0);

        assert_eq!(a + b, Complex::new(4.0, 1.0));
        assert_eq!(a - b, Complex::new(-2.0, 3.0));
        assert_eq!(a * b, Complex::new(5.0, 5.0));
        assert!(approx_eq(a / b, Complex::new(0.1, 0.7)));
        assert_eq!(-a, Complex::new(-1.0, -2.0));
        assert_eq!(Complex::I * Complex::I, Complex::from_real(-1.0));
    }

    #[test]
    fn polar_parts() {
        let z = Complex::new(3.0, 4.0);
        assert_eq!(z.magnitude(), 5.0);
        assert!(floats_equal(Complex::I.angle(), std::f64::consts::FRAC_PI_2));
        assert!(Complex::new(0.0, -0.0).is_zero());
    }

    #[test]
    fn display() {
        assert_eq!(Complex::new(1.0, 2.0).to_string(), "1 + j2");
        assert_eq!(Complex::new(1.5, -2.0).to_string(), "1.5 - j2");
        assert_eq!(Complex::new(0.0, 0.0).to_string(), "0 + j0");
    }
}
