#[cfg(test)]
const EPSILON: f64 = 1e-9;

#[cfg(test)]
pub fn floats_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Reals that hold a whole number are printed without a fractional part, everything else uses
/// Rust's shortest round-trip formatting.
pub fn format_real(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        // `-0.0` would otherwise print as "-0"
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_have_no_fraction() {
        assert_eq!(format_real(2.0), "2");
        assert_eq!(format_real(-3.0), "-3");
        assert_eq!(format_real(-0.0), "0");
    }

    #[test]
    fn fractions_and_specials() {
        assert_eq!(format_real(2.5), "2.5");
        assert_eq!(format_real(f64::INFINITY), "inf");
        assert_eq!(format_real(1e20), "100000000000000000000");
    }

    #[test]
    fn epsilon_comparison() {
        assert!(floats_equal(0.1 + 0.2, 0.3));
        assert!(!floats_equal(0.1, 0.2));
    }
}
