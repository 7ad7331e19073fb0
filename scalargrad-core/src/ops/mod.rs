//! # Scalar Operations Module (`ops`)
//!
//! Builders that create new graph nodes from existing ones.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a core function (`add_op`, `relu_op`, ...)
//!   that computes the forward value eagerly and attaches the backward rule. The
//!   rule is not run until [`Value::backward`](crate::Value::backward).
//! - **`Backward` Structs:** Each primitive operation has a struct (e.g. `MulBackward`)
//!   implementing [`BackwardOp`](crate::autograd::BackwardOp). It keeps shared handles
//!   to the inputs it needs to compute local derivatives.
//! - **Composites:** `neg_op`, `sub_op` and `div_op` are built from the primitives and
//!   carry no rules of their own.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, pow and the composites built on them.
//! - [`activation`]: ReLU.

pub mod activation;
pub mod arithmetic;
