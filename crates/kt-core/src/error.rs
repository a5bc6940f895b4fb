//! Framework error type.
//!
//! Sub-crates define their own error enums; `KtError` covers the handful of
//! failures that can happen in `kt-core` itself and acts as a common base.

use thiserror::Error;

/// The top-level error type for `kt-core`.
#[derive(Debug, Error)]
pub enum KtError {
    #[error("invalid range: min {min} exceeds max {max}")]
    InvalidRange { min: u32, max: u32 },
}

/// Shorthand result type for `kt-core`.
pub type KtResult<T> = Result<T, KtError>;
