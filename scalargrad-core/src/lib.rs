//! # scalargrad-core
//!
//! Reverse-mode automatic differentiation over scalar values.
//!
//! Operations on [`Value`] build a DAG eagerly; [`Value::backward`] then fills in the
//! gradient of the chosen root with respect to every node it depends on.
//!
//! ```
//! use scalargrad_core::Value;
//!
//! let x = Value::new(3.0);
//! let y = Value::new(4.0);
//! let z = &x * &y;
//!
//! z.backward().unwrap();
//! assert_eq!(x.grad(), 4.0);
//! assert_eq!(y.grad(), 3.0);
//! ```

pub mod autograd;
pub mod error;
pub mod ops;
pub mod value;
pub mod value_data;

pub use autograd::BackwardOp;
pub use error::ScalarGradError;
pub use value::Value;
pub use value_data::{NodeId, Op};

// Re-export traits implemented by `Value`
pub use num_traits;
