use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use approx::assert_relative_eq;

#[test]
fn test_mul_forward() {
    let a = Value::new(3.0);
    let b = Value::new(-4.0);
    let c = mul_op(&a, &b);
    assert_relative_eq!(c.value(), -12.0);
    assert_eq!(c.op(), Op::Mul);
}

#[test]
fn test_mul_backward() {
    let x = Value::new(3.0);
    let y = Value::new(4.0);
    let z = mul_op(&x, &y);

    z.backward().unwrap();

    assert_relative_eq!(x.grad(), 4.0);
    assert_relative_eq!(y.grad(), 3.0);
    assert_relative_eq!(z.grad(), 1.0);
}

#[test]
fn test_mul_square_same_operand() {
    // x * x ; d/dx = 2x
    let x = Value::new(3.0);
    let z = mul_op(&x, &x);

    z.backward().unwrap();

    assert_relative_eq!(z.value(), 9.0);
    assert_relative_eq!(x.grad(), 6.0);
}

#[test]
fn test_mul_uses_operand_values_not_grads() {
    // Leaves carry stale gradients; the rule must scale by forward values only.
    let x = Value::new(3.0);
    let y = Value::new(4.0);
    x.acc_grad(10.0);
    y.acc_grad(20.0);
    let z = mul_op(&x, &y);

    z.backward().unwrap();

    assert_relative_eq!(x.grad(), 14.0);
    assert_relative_eq!(y.grad(), 23.0);
}

#[test]
fn test_mul_backward_grad_check() {
    let func = |inputs: &[Value]| mul_op(&mul_op(&inputs[0], &inputs[1]), &inputs[0]);
    check_grad(func, &[1.3, -2.1], &GradCheckConfig::default()).unwrap();
}
