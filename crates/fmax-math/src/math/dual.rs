//! Forward-mode automatic differentiation via dual numbers.
//!
//! A [`Dual`] carries a primal value and one tangent. Seed the quantity you
//! differentiate with respect to (an observation or a parameter) with
//! [`Dual::var`] and everything else with [`Dual::constant`].

use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// An f64 dual number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dual {
    /// Primal (function) value.
    pub val: f64,
    /// Tangent (derivative) value.
    pub dot: f64,
}

impl Dual {
    /// Create a constant (derivative = 0).
    #[inline]
    pub fn constant(val: f64) -> Self {
        Self { val, dot: 0.0 }
    }

    /// Create an independent variable (derivative = 1).
    #[inline]
    pub fn var(val: f64) -> Self {
        Self { val, dot: 1.0 }
    }

    /// Create a dual with explicit tangent.
    #[inline]
    pub fn new(val: f64, dot: f64) -> Self {
        Self { val, dot }
    }

    /// Natural logarithm: d/dx ln(x) = 1/x.
    #[inline]
    pub fn ln(self) -> Self {
        Self { val: self.val.ln(), dot: self.dot / self.val }
    }

    /// Exponential: d/dx exp(x) = exp(x).
    #[inline]
    pub fn exp(self) -> Self {
        let e = self.val.exp();
        Self { val: e, dot: self.dot * e }
    }

    /// exp(x) - 1: d/dx = exp(x).
    #[inline]
    pub fn exp_m1(self) -> Self {
        Self { val: self.val.exp_m1(), dot: self.dot * self.val.exp() }
    }

    /// ln(1 + x): d/dx = 1/(1 + x).
    #[inline]
    pub fn ln_1p(self) -> Self {
        Self { val: self.val.ln_1p(), dot: self.dot / (1.0 + self.val) }
    }

    /// Power with f64 exponent: d/dx x^n = n * x^(n-1).
    #[inline]
    pub fn powf(self, n: f64) -> Self {
        if self.dot == 0.0 {
            return Self::constant(self.val.powf(n));
        }
        Self { val: self.val.powf(n), dot: self.dot * n * self.val.powf(n - 1.0) }
    }

    /// Power with dual exponent:
    /// d(x^n) = n x^(n-1) dx + x^n ln(x) dn.
    #[inline]
    pub fn pow(self, n: Self) -> Self {
        let val = self.val.powf(n.val);
        let base_term = if self.dot == 0.0 {
            0.0
        } else {
            self.dot * n.val * self.val.powf(n.val - 1.0)
        };
        let exponent_term = if n.dot == 0.0 {
            0.0
        } else {
            n.dot * val * self.val.ln()
        };
        Self { val, dot: base_term + exponent_term }
    }
}

impl Add for Dual {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self { val: self.val + rhs.val, dot: self.dot + rhs.dot }
    }
}

impl Sub for Dual {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self { val: self.val - rhs.val, dot: self.dot - rhs.dot }
    }
}

impl Mul for Dual {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self { val: self.val * rhs.val, dot: self.dot * rhs.val + self.val * rhs.dot }
    }
}

impl Div for Dual {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self {
            val: self.val / rhs.val,
            dot: (self.dot * rhs.val - self.val * rhs.dot) / (rhs.val * rhs.val),
        }
    }
}

impl Neg for Dual {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self { val: -self.val, dot: -self.dot }
    }
}

impl Sum for Dual {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Dual::constant(0.0), |acc, x| acc + x)
    }
}

impl From<f64> for Dual {
    fn from(val: f64) -> Self {
        Self::constant(val)
    }
}

impl PartialOrd for Dual {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.val.partial_cmp(&other.val)
    }
}
