use scalargrad_core::Value;

// Helper functions shared by the integration tests.
// Added allow(dead_code) because usage across different test crates isn't detected easily.

/// Creates one leaf per entry of `data`.
#[allow(dead_code)]
pub(crate) fn create_leaves(data: &[f64]) -> Vec<Value> {
    data.iter().map(|&v| Value::new(v)).collect()
}

/// The canonical expression from the micrograd README, built from leaf `x`.
///
/// Returns `(z, q, h, y)`. At x = -4: y = -20 and dy/dx = 46.
#[allow(dead_code)]
pub(crate) fn reference_expression(x: &Value) -> (Value, Value, Value, Value) {
    let z = 2.0 * x + 2.0 + x;
    let q = z.relu() + &z * x;
    let h = (&z * &z).relu();
    let y = &h + &q + &q * x;
    (z, q, h, y)
}
