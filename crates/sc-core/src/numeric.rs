use crate::ScError;

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

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, ScError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ScError::NonFinite { what, value: v })
    }
}

pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, ScError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(ScError::NonPositive { what, value: v })
    }
}

/// `n` evenly spaced samples over `[start, stop]`, endpoint included.
pub fn linspace(start: Real, stop: Real, n: usize) -> Vec<Real> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / ((n - 1) as Real);
            let mut v: Vec<Real> = (0..n).map(|i| start + step * i as Real).collect();
            // pin the endpoint; the accumulated product can drift off `stop`
            v[n - 1] = stop;
            v
        }
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
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero() {
        assert!(ensure_positive(0.0, "test").is_err());
        assert!(ensure_positive(-1.0, "test").is_err());
        assert_eq!(ensure_positive(2.5, "test").unwrap(), 2.5);
    }

    #[test]
    fn linspace_small_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
        assert_eq!(linspace(0.0, 1.0, 2), vec![0.0, 1.0]);
    }

    #[test]
    fn linspace_matches_duration_axis() {
        let t = linspace(0.0, 1e-7, 5);
        assert_eq!(t.len(), 5);
        assert_eq!(t[0], 0.0);
        assert_eq!(t[4], 1e-7);
        let tol = Tolerances::default();
        assert!(nearly_equal(t[2], 5e-8, tol));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn linspace_endpoints_and_length(
            start in -1e6f64..1e6,
            span in 1e-9f64..1e6,
            n in 2usize..400,
        ) {
            let stop = start + span;
            let v = linspace(start, stop, n);
            prop_assert_eq!(v.len(), n);
            prop_assert_eq!(v[0], start);
            prop_assert_eq!(v[n - 1], stop);
        }
    }
}
