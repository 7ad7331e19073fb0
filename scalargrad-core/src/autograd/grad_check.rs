use crate::error::ScalarGradError;
use crate::value::Value;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),
    #[error("Invalid gradient check configuration: {0}")]
    InvalidConfig(String),
    #[error("Engine error during gradient check: {0}")]
    EngineError(ScalarGradError),
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        match err {
            ScalarGradError::InvalidGradCheckConfig(msg) => GradCheckError::InvalidConfig(msg),
            other => GradCheckError::EngineError(other),
        }
    }
}

/// Step size and tolerances for [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Perturbation used for central differences.
    pub epsilon: f64,
    pub abs_tol: f64,
    /// Scaled by |numerical gradient| and added to `abs_tol`.
    pub rel_tol: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            abs_tol: 1e-6,
            rel_tol: 1e-5,
        }
    }
}

impl GradCheckConfig {
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(ScalarGradError::InvalidGradCheckConfig(format!(
                "epsilon must be finite and positive, got {}",
                self.epsilon
            )));
        }
        if !(self.abs_tol >= 0.0 && self.rel_tol >= 0.0) {
            return Err(ScalarGradError::InvalidGradCheckConfig(format!(
                "tolerances must be non-negative, got abs_tol={} rel_tol={}",
                self.abs_tol, self.rel_tol
            )));
        }
        Ok(())
    }
}

fn leaves(values: &[f64]) -> Vec<Value> {
    values.iter().map(|&v| Value::new(v)).collect()
}

/// Evaluates `func` at `inputs` with input `index` shifted by +/- `epsilon`.
fn perturbed_losses<F>(func: &F, inputs: &[f64], index: usize, epsilon: f64) -> (f64, f64)
where
    F: Fn(&[Value]) -> Value,
{
    let mut shifted = inputs.to_vec();
    shifted[index] = inputs[index] + epsilon;
    let loss_plus = func(&leaves(&shifted)).value();
    shifted[index] = inputs[index] - epsilon;
    let loss_minus = func(&leaves(&shifted)).value();
    (loss_plus, loss_minus)
}

/// Central finite-difference gradient of `func` at `inputs`.
///
/// `func` is called with fresh leaves on every evaluation, so it must build its
/// graph from the slice it is given.
pub fn numerical_grad<F>(func: F, inputs: &[f64], epsilon: f64) -> Vec<f64>
where
    F: Fn(&[Value]) -> Value,
{
    (0..inputs.len())
        .map(|i| {
            let (loss_plus, loss_minus) = perturbed_losses(&func, inputs, i, epsilon);
            (loss_plus - loss_minus) / (2.0 * epsilon)
        })
        .collect()
}

/// Checks analytical gradients against numerical gradients using finite differences.
///
/// Builds leaves from `inputs`, runs `func` forward and backward, then compares each
/// leaf's gradient with the central difference. An input passes when
/// `|analytical - numerical| <= abs_tol + rel_tol * |numerical|`. Reports the first
/// input that fails.
pub fn check_grad<F>(func: F, inputs: &[f64], config: &GradCheckConfig) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Value,
{
    config.validate()?;

    let initial_inputs = leaves(inputs);
    let output = func(&initial_inputs);
    output
        .backward()
        .map_err(GradCheckError::BackwardPassError)?;

    for (i, input) in initial_inputs.iter().enumerate() {
        let analytical_grad = input.grad();
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let (loss_plus, loss_minus) = perturbed_losses(&func, inputs, i, config.epsilon);
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * config.epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        debug!(
            "check_grad: input {} analytical={} numerical={} diff={}",
            i, analytical_grad, numerical_grad, difference
        );
        if difference > config.abs_tol + config.rel_tol * numerical_grad.abs() {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
