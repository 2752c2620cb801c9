//! Fuzz target for distribution construction and evaluation.
//!
//! Any parameters either fail construction or yield a distribution whose
//! log-density is never NaN and whose log-CDF and log-survival are never
//! NaN and never positive for a non-NaN point.

#![no_main]

use arbitrary::Arbitrary;
use fmax_math::{ExtremeValue, Family, LogDensity};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    family: u8,
    first: f64,
    second: f64,
    xs: Vec<f64>,
}

fuzz_target!(|input: Input| {
    let family = Family::ALL[usize::from(input.family) % Family::ALL.len()];
    let Ok(dist) = ExtremeValue::from_parameters(family, input.first, input.second) else {
        return;
    };

    for &x in &input.xs {
        let logp = dist.logp(x);
        let logcdf = dist.logcdf(x);
        let logsf = dist.logsf(x);
        if x.is_nan() {
            continue;
        }
        assert!(!logp.is_nan(), "logp NaN for {dist:?} at {x}");
        assert!(!logcdf.is_nan() && logcdf <= 0.0, "logcdf {logcdf} for {dist:?} at {x}");
        assert!(!logsf.is_nan() && logsf <= 0.0, "logsf {logsf} for {dist:?} at {x}");
    }
    let _ = dist.log_likelihood(&input.xs);
});
