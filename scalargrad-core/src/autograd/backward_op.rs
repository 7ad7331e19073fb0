use crate::value::Value;
use std::fmt::Debug;

/// Defines the interface for the backward pass of a differentiable scalar operation.
///
/// Every non-leaf [`Value`] holds one of these as its `grad_fn`. The implementation
/// keeps shared handles to the operation's inputs (never to its own output, which
/// would form an `Rc` cycle); the backward driver supplies the output's gradient at
/// the moment the rule runs, after every consumer of the output has contributed.
pub trait BackwardOp: Debug {
    /// Computes the contribution of this operation to each input's gradient.
    ///
    /// Receives dL/dOutput (`grad_output`) and returns dL/dOutput * dOutput/dInput_i
    /// for each input. The order of the returned `Vec` **must** match `inputs()`;
    /// the driver adds each entry into the corresponding input with `+=`.
    fn backward(&self, grad_output: f64) -> Vec<f64>;

    /// Returns handles to the inputs that participated in the forward operation.
    ///
    /// The same node may appear more than once (e.g. `x * x`); each occurrence
    /// receives its own contribution.
    fn inputs(&self) -> Vec<Value>;
}
