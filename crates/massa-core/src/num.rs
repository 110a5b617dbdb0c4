//! Small numeric helpers shared by samplers and derivation functions.

/// Round to `decimals` fractional digits, half away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Percentage ratio with a zero-denominator guard: `num / den * 100`,
/// or 0 when `den` is 0.
pub fn ratio_pct(num: f64, den: f64) -> f64 {
    if den == 0.0 {
        0.0
    } else {
        num / den * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(170.70000000000002, 2), 170.7);
        assert_eq!(round_to(3.14159, 4), 3.1416);
        // Half away from zero.
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }

    #[test]
    fn test_ratio_pct_guards_zero_denominator() {
        assert_eq!(ratio_pct(5.0, 0.0), 0.0);
        assert_eq!(ratio_pct(1.0, 4.0), 25.0);
        assert!(!ratio_pct(0.0, 0.0).is_nan());
    }
}
