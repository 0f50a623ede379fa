use thiserror::Error;

/// Errors produced by `StepRange` operations.
///
/// Most operations are total and let floating-point fallout (infinities,
/// NaN) flow through their results; only combinations that have no
/// meaningful answer are reported here.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeError {
    /// Two ranges with different steps cannot be merged into one progression.
    #[error("Cannot union ranges with different step sizes.")]
    StepMismatch {
        /// Step of the receiving range.
        left: f64,
        /// Step of the argument range.
        right: f64,
    },
}

pub type Result<T> = core::result::Result<T, RangeError>;
