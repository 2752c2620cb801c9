//! Core math modules.

pub mod distribution;
pub mod dual;
pub mod frechet;
pub mod gumbel;
pub mod scalar;
pub mod stable;
pub mod weibull;
