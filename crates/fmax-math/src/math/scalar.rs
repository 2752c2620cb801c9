//! [`Scalar`]: abstraction over `f64` and [`Dual`] so every log-density is
//! written once and evaluated either plainly or with a forward-mode tangent.
//!
//! Boundary handling goes through [`Scalar::select`], which picks between two
//! already-evaluated branches. Callers substitute a safe input into the branch
//! that would otherwise be undefined, so the discarded branch never carries a
//! NaN derivative into the selected one.

use super::dual::Dual;
use std::fmt::Debug;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A scalar type the distributions can be evaluated over.
pub trait Scalar:
    Copy
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Sum
    + PartialOrd
    + Sized
{
    /// Wrap an `f64` constant (derivative = 0 for AD types).
    fn from_f64(v: f64) -> Self;

    /// Primal value.
    fn value(&self) -> f64;

    /// Natural logarithm.
    fn ln(self) -> Self;

    /// Exponential.
    fn exp(self) -> Self;

    /// `exp(self) - 1`, accurate near zero.
    fn exp_m1(self) -> Self;

    /// `ln(1 + self)`, accurate near zero.
    fn ln_1p(self) -> Self;

    /// Power with a constant exponent.
    fn powf(self, n: f64) -> Self;

    /// Power with a (possibly differentiable) exponent. Requires `self > 0`
    /// whenever the exponent carries a tangent.
    fn pow(self, n: Self) -> Self;

    /// Pick `on_true` or `on_false`. Both operands are evaluated by the
    /// caller; only the chosen one's value and tangent survive.
    #[inline]
    fn select(cond: bool, on_true: Self, on_false: Self) -> Self {
        if cond {
            on_true
        } else {
            on_false
        }
    }
}

impl Scalar for f64 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn value(&self) -> f64 {
        *self
    }

    #[inline]
    fn ln(self) -> Self {
        f64::ln(self)
    }

    #[inline]
    fn exp(self) -> Self {
        f64::exp(self)
    }

    #[inline]
    fn exp_m1(self) -> Self {
        f64::exp_m1(self)
    }

    #[inline]
    fn ln_1p(self) -> Self {
        f64::ln_1p(self)
    }

    #[inline]
    fn powf(self, n: f64) -> Self {
        f64::powf(self, n)
    }

    #[inline]
    fn pow(self, n: Self) -> Self {
        f64::powf(self, n)
    }
}

impl Scalar for Dual {
    #[inline]
    fn from_f64(v: f64) -> Self {
        Dual::constant(v)
    }

    #[inline]
    fn value(&self) -> f64 {
        self.val
    }

    #[inline]
    fn ln(self) -> Self {
        Dual::ln(self)
    }

    #[inline]
    fn exp(self) -> Self {
        Dual::exp(self)
    }

    #[inline]
    fn exp_m1(self) -> Self {
        Dual::exp_m1(self)
    }

    #[inline]
    fn ln_1p(self) -> Self {
        Dual::ln_1p(self)
    }

    #[inline]
    fn powf(self, n: f64) -> Self {
        Dual::powf(self, n)
    }

    #[inline]
    fn pow(self, n: Self) -> Self {
        Dual::pow(self, n)
    }
}
