//! Answer checking.

/// Absolute margin within which a submitted answer counts as correct.
pub const TOLERANCE: f64 = 0.001;

/// Compare a submitted answer with the expected one.
///
/// `|submitted - expected| < TOLERANCE`. A NaN submission is never correct.
#[must_use]
pub fn judge(submitted: f64, expected: f64) -> bool {
    (submitted - expected).abs() < TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(judge(4.0, 4.0));
        assert!(judge(0.0, 0.0));
    }

    #[test]
    fn test_tolerance_boundary() {
        assert!(judge(3.0009, 3.0));
        assert!(judge(2.9991, 3.0));
        assert!(!judge(3.01, 3.0));
        assert!(!judge(3.0, 3.01));
    }

    #[test]
    fn test_nan_is_wrong() {
        assert!(!judge(f64::NAN, 3.0));
    }
}
