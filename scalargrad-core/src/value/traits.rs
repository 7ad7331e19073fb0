// src/value/traits.rs

use crate::ops::activation::relu_op;
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
use crate::value::Value;
use num_traits::{One, Pow, Zero};
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::rc::Rc;

// --- Identity ---

impl PartialEq for Value {
    /// Node identity, not value equality: two leaves holding `1.0` are not equal.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

// --- Method forms of the builders ---

impl Value {
    /// `max(0, self)`.
    pub fn relu(&self) -> Value {
        relu_op(self)
    }

    /// Raises to a constant power.
    pub fn powf(&self, exponent: f64) -> Value {
        pow_op(self, &Value::constant(exponent))
    }

    /// Raises to the value of `exponent`, which receives no gradient.
    pub fn pow_value(&self, exponent: &Value) -> Value {
        pow_op(self, exponent)
    }
}

// --- Operator overloads ---

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl std::ops::$trait<&Value> for &Value {
            type Output = Value;

            fn $method(self, rhs: &Value) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl std::ops::$trait<Value> for &Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                $op_fn(self, &rhs)
            }
        }

        impl std::ops::$trait<&Value> for Value {
            type Output = Value;

            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&self, rhs)
            }
        }

        impl std::ops::$trait<Value> for Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                $op_fn(&self, &rhs)
            }
        }

        impl std::ops::$trait<f64> for &Value {
            type Output = Value;

            fn $method(self, rhs: f64) -> Value {
                $op_fn(self, &Value::constant(rhs))
            }
        }

        impl std::ops::$trait<f64> for Value {
            type Output = Value;

            fn $method(self, rhs: f64) -> Value {
                $op_fn(&self, &Value::constant(rhs))
            }
        }

        impl std::ops::$trait<&Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&Value::constant(self), rhs)
            }
        }

        impl std::ops::$trait<Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                $op_fn(&Value::constant(self), &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl std::ops::Neg for &Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl std::ops::Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(&self)
    }
}

impl Pow<f64> for Value {
    type Output = Value;

    fn pow(self, rhs: f64) -> Value {
        self.powf(rhs)
    }
}

impl Pow<f64> for &Value {
    type Output = Value;

    fn pow(self, rhs: f64) -> Value {
        self.powf(rhs)
    }
}

impl Pow<&Value> for &Value {
    type Output = Value;

    fn pow(self, rhs: &Value) -> Value {
        pow_op(self, rhs)
    }
}

// --- num_traits identities ---

impl Zero for Value {
    /// A fresh constant leaf; every call is a distinct node.
    fn zero() -> Self {
        Value::constant(0.0)
    }

    fn is_zero(&self) -> bool {
        self.value() == 0.0
    }
}

impl One for Value {
    fn one() -> Self {
        Value::constant(1.0)
    }
}

// --- Reductions ---

impl Sum for Value {
    /// Left fold of `add_op`. An empty iterator yields a constant 0 leaf.
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Value {
        iter.reduce(|acc, v| add_op(&acc, &v))
            .unwrap_or_else(Value::zero)
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(mut iter: I) -> Value {
        match iter.next() {
            Some(first) => iter.fold(first.clone(), |acc, v| add_op(&acc, v)),
            None => Value::zero(),
        }
    }
}
