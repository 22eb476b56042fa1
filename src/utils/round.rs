//! Precision-aware float rounding.

/// Round `value` to `precision` decimal places, or to the nearest whole
/// number when no precision is given.
///
/// Halves round away from zero, matching `f64::round`.
///
/// ```
/// use sitemapgen::utils::round::round;
///
/// assert_eq!(round(1.337, None), 1.0);
/// assert_eq!(round(1.337, Some(1)), 1.3);
/// assert_eq!(round(1.337, Some(2)), 1.34);
/// ```
pub fn round(value: f64, precision: Option<u32>) -> f64 {
    match precision {
        Some(precision) => {
            let magnitude = 10f64.powi(precision as i32);
            (value * magnitude).round() / magnitude
        }
        None => value.round(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_whole_number_without_precision() {
        assert_eq!(round(1.337, None), 1.0);
        assert_eq!(round(1.5, None), 2.0);
        assert_eq!(round(-1.5, None), -2.0);
    }

    #[test]
    fn rounds_to_given_precision() {
        assert_eq!(round(1.337, Some(1)), 1.3);
        assert_eq!(round(1.337, Some(2)), 1.34);
        assert_eq!(round(2.675, Some(1)), 2.7);
        assert_eq!(round(-0.125, Some(2)), -0.13);
    }

    #[test]
    fn zero_precision_matches_whole_rounding() {
        for value in [0.4, 0.5, 2.49, 2.5, -3.7] {
            assert_eq!(round(value, Some(0)), round(value, None));
        }
    }

    #[test]
    fn rounding_is_idempotent_at_fixed_precision() {
        for value in [1.337, 0.05, 12.3456, -7.891, 0.999] {
            for precision in 0..5 {
                let once = round(value, Some(precision));
                assert_eq!(round(once, Some(precision)), once);
            }
        }
    }
}
