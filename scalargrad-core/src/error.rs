use crate::value_data::Op;
use thiserror::Error;

/// Custom error type for the ScalarGrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("BackwardOp for '{op}' returned {actual} gradients, but the node has {expected} operands")]
    GradientArityMismatch {
        op: Op,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid gradient check configuration: {0}")]
    InvalidGradCheckConfig(String),
}
