//! Numerically stable log-domain primitives.
//!
//! Every function here is branch-free in the [`Scalar::select`] sense: both
//! candidate expressions are evaluated and one is kept.

use super::scalar::Scalar;
use std::f64::consts::LN_2;

/// Stable `log(1 - exp(-a))` for `a >= 0`.
///
/// Uses `log(-expm1(-a))` for `a <= ln 2` and `log1p(-exp(-a))` above it.
/// Returns a constant NEG_INFINITY at `a = 0`, zero at `a = +inf`, NaN for
/// `a < 0`.
pub fn log1mexp<T: Scalar>(a: T) -> T {
    // log(0) has no finite tangent; evaluate the branches away from it.
    let at_zero = a.value() == 0.0;
    let a_safe = T::select(at_zero, T::from_f64(1.0), a);
    let near_zero = (-(-a_safe).exp_m1()).ln();
    let far = (-(-a_safe).exp()).ln_1p();
    let out = T::select(a_safe.value() <= LN_2, near_zero, far);
    T::select(at_zero, T::from_f64(f64::NEG_INFINITY), out)
}

/// Stable `log(exp(a) - exp(b))`. Requires `a >= b` for a real result.
///
/// Returns `a` when `b` is NEG_INFINITY, a constant NEG_INFINITY when
/// `a == b`, NaN when `a < b`.
pub fn log_sub_exp<T: Scalar>(a: T, b: T) -> T {
    let b_vanishes = b.value() == f64::NEG_INFINITY;
    let no_mass = !b_vanishes && a.value() == b.value();
    let gap = T::select(b_vanishes || no_mass, T::from_f64(f64::INFINITY), a - b);
    let diff = a + log1mexp(gap);
    let diff = T::select(no_mass, T::from_f64(f64::NEG_INFINITY), diff);
    T::select(b_vanishes, a, diff)
}

/// `bound` in the scalar type, or `x` itself when it is NaN.
///
/// Used for out-of-support evaluation so NaN observations stay NaN.
pub fn saturate<T: Scalar>(x: T, bound: f64) -> T {
    T::select(x.value().is_nan(), x, T::from_f64(bound))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::dual::Dual;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if a.is_nan() || b.is_nan() {
            return false;
        }
        (a - b).abs() <= tol
    }

    #[test]
    fn log1mexp_matches_naive_in_the_middle() {
        for a in [0.01, 0.3, LN_2, 1.0, 5.0] {
            let expected = (1.0 - (-a).exp()).ln();
            assert!(approx_eq(log1mexp(a), expected, 1e-12), "a={a}");
        }
    }

    #[test]
    fn log1mexp_small_argument_keeps_precision() {
        // log(1 - exp(-a)) ~ log(a) for tiny a; the naive form returns -inf.
        let a = 1e-300;
        let out = log1mexp(a);
        assert!(approx_eq(out, a.ln(), 1e-9));
    }

    #[test]
    fn log1mexp_boundaries() {
        let out = log1mexp(0.0);
        assert!(out.is_infinite() && out.is_sign_negative());
        assert_eq!(log1mexp(f64::INFINITY), 0.0);
        assert!(log1mexp(-1.0).is_nan());
    }

    #[test]
    fn log1mexp_gradient() {
        // d/da log(1 - e^-a) = e^-a / (1 - e^-a)
        for a in [0.2, 3.0] {
            let out = log1mexp(Dual::var(a));
            let expected = (-a).exp() / (1.0 - (-a).exp());
            assert!(approx_eq(out.dot, expected, 1e-10), "a={a}");
        }
    }

    #[test]
    fn log_sub_exp_basic() {
        let out = log_sub_exp(2.0, 1.0);
        let expected = (2.0f64.exp() - 1.0f64.exp()).ln();
        assert!(approx_eq(out, expected, 1e-12));
    }

    #[test]
    fn log_sub_exp_invalid_cases() {
        assert!(log_sub_exp(1.0, 2.0).is_nan());

        let out = log_sub_exp(2.0, 2.0);
        assert!(out.is_infinite() && out.is_sign_negative());

        assert_eq!(log_sub_exp(-3.0, f64::NEG_INFINITY), -3.0);
    }

    #[test]
    fn log_sub_exp_both_neg_inf() {
        let out = log_sub_exp(f64::NEG_INFINITY, f64::NEG_INFINITY);
        assert!(out.is_infinite() && out.is_sign_negative());
    }

    #[test]
    fn log1mexp_at_zero_has_finite_tangent() {
        let out = log1mexp(-Dual::var(0.0));
        assert_eq!(out.val, f64::NEG_INFINITY);
        assert_eq!(out.dot, 0.0);
    }

    #[test]
    fn log_sub_exp_equal_arguments_has_finite_tangent() {
        let a = Dual::new(0.0, 1.5);
        let b = Dual::new(0.0, -0.5);
        let out = log_sub_exp(a, b);
        assert_eq!(out.val, f64::NEG_INFINITY);
        assert!(out.dot.is_finite());

        let out = log_sub_exp(Dual::new(-2.0, 1.0), Dual::new(-2.0, 1.0));
        assert_eq!(out.val, f64::NEG_INFINITY);
        assert!(out.dot.is_finite());
    }

    #[test]
    fn saturate_keeps_nan() {
        assert!(saturate(f64::NAN, f64::NEG_INFINITY).is_nan());
        assert_eq!(saturate(3.0, f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert_eq!(saturate(Dual::var(3.0), 0.0), Dual::constant(0.0));
    }
}
