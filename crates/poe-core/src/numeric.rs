use crate::{PoeError, PoeResult};

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

/// `max(0, v)`. Power never goes below zero once clamped.
#[inline]
pub fn clamp_non_negative(v: Real) -> Real {
    v.max(0.0)
}

pub fn ensure_finite(v: Real, what: &'static str) -> PoeResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PoeError::NonFinite { what, value: v })
    }
}

/// Which side of a range bound is open.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bound {
    Inclusive(Real),
    Exclusive(Real),
    Unbounded,
}

impl Bound {
    fn admits_above(self, v: Real) -> bool {
        match self {
            Bound::Inclusive(b) => v >= b,
            Bound::Exclusive(b) => v > b,
            Bound::Unbounded => true,
        }
    }

    fn admits_below(self, v: Real) -> bool {
        match self {
            Bound::Inclusive(b) => v <= b,
            Bound::Exclusive(b) => v < b,
            Bound::Unbounded => true,
        }
    }
}

/// Checks `v` is finite and within `[lo, hi]` with the given openness.
///
/// `expected` is a human description of the range used in the error message,
/// e.g. `"(0, 100]"`.
pub fn ensure_in_range(
    v: Real,
    lo: Bound,
    hi: Bound,
    what: &'static str,
    expected: &'static str,
) -> PoeResult<Real> {
    let v = ensure_finite(v, what)?;
    if lo.admits_above(v) && hi.admits_below(v) {
        Ok(v)
    } else {
        Err(PoeError::OutOfRange {
            what,
            value: v,
            expected,
        })
    }
}
