use crate::CoreError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Reject `x` unless `0 <= x <= 1`. NaN is rejected.
pub fn check_probability(what: &'static str, x: Real) -> Result<Real, CoreError> {
    if (0.0..=1.0).contains(&x) {
        Ok(x)
    } else {
        Err(CoreError::OutOfRange { what, value: x })
    }
}

/// Clamp a fraction into [0, 1].
pub fn clip(value: Real) -> Real {
    value.clamp(0.0, 1.0)
}

/// Append `clip(last + delta)` to a compartment history.
///
/// Every compartment update in the models goes through here, so each
/// recorded value is a valid fraction. An empty history is treated as
/// starting from zero.
pub fn advance(values: &mut Vec<Real>, delta: Real) {
    let last = values.last().copied().unwrap_or(0.0);
    values.push(clip(last + delta));
}

/// Value recorded `tau` entries before the most recent one.
///
/// Returns 0.0 until the history holds more than `tau` entries.
pub fn lagged(values: &[Real], tau: usize) -> Real {
    if values.len() > tau {
        values[values.len() - tau - 1]
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn check_probability_bounds() {
        assert_eq!(check_probability("alpha", 0.0), Ok(0.0));
        assert_eq!(check_probability("alpha", 1.0), Ok(1.0));
        assert_eq!(check_probability("alpha", 0.25), Ok(0.25));

        let err = check_probability("i0", -0.1).unwrap_err();
        assert_eq!(err.what(), "i0");
        assert_eq!(format!("{err}"), "invalid i0: -0.1");

        assert!(check_probability("beta", 1.0 + 1e-12).is_err());
        assert!(check_probability("beta", Real::NAN).is_err());
    }

    #[test]
    fn clip_range() {
        assert_eq!(clip(-0.5), 0.0);
        assert_eq!(clip(0.5), 0.5);
        assert_eq!(clip(1.5), 1.0);
    }

    #[test]
    fn advance_appends_clamped() {
        let mut values = vec![0.5];
        advance(&mut values, 0.25);
        advance(&mut values, 1.0);
        advance(&mut values, -3.0);
        assert_eq!(values, vec![0.5, 0.75, 1.0, 0.0]);
    }

    #[test]
    fn advance_on_empty_history_starts_at_zero() {
        let mut values = Vec::new();
        advance(&mut values, 0.1);
        assert_eq!(values, vec![0.1]);
    }

    #[test]
    fn lagged_underfilled_is_zero() {
        assert_eq!(lagged(&[], 0), 0.0);
        assert_eq!(lagged(&[0.1, 0.2], 2), 0.0);
    }

    #[test]
    fn lagged_reads_back_tau_entries() {
        let values = [0.1, 0.2, 0.3, 0.4];
        assert_eq!(lagged(&values, 0), 0.4);
        assert_eq!(lagged(&values, 1), 0.3);
        assert_eq!(lagged(&values, 3), 0.1);
        assert_eq!(lagged(&values, 4), 0.0);
    }
}
