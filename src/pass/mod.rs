//! Password generation pipeline and presentation.

pub mod charset;
mod generate;
pub mod output;
pub mod strength;

pub use charset::CategoryFlags;
pub use generate::generate;

use thiserror::Error;

use crate::rng::RandomSourceUnavailable;

/// Failures of a single generation call. No retries happen here; whether a
/// failed call is retried is the caller's decision.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("no character categories enabled")]
    EmptyPool,

    #[error("password length must be at least 1")]
    InvalidLength,

    #[error(transparent)]
    RandomSource(#[from] RandomSourceUnavailable),
}
