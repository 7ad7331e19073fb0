// src/value/debug.rs
use crate::value::Value;
use std::fmt;

// Manual implementation: the backward rule would otherwise print the whole
// ancestor graph.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.read_data();
        write!(
            f,
            "Value(id={}, data={}, grad={}, op={}, operands={})",
            data.id.as_u64(),
            data.value,
            data.grad.get(),
            data.op,
            self.operands().len()
        )
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={}, grad={})", self.value(), self.grad())
    }
}
