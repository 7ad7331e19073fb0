use super::*;
use approx::assert_relative_eq;

#[test]
fn test_div_forward() {
    let a = Value::new(2.0);
    let b = Value::new(4.0);
    assert_relative_eq!(div_op(&a, &b).value(), 0.5);
}

#[test]
fn test_div_backward() {
    // z = x / y ; dz/dx = 1/y, dz/dy = -x/y^2
    let x = Value::new(2.0);
    let y = Value::new(4.0);
    let z = div_op(&x, &y);

    z.backward().unwrap();

    assert_relative_eq!(x.grad(), 0.25);
    assert_relative_eq!(y.grad(), -2.0 / 16.0);
}

#[test]
fn test_div_by_zero_is_infinite() {
    let x = Value::new(1.0);
    let y = Value::new(0.0);
    let z = div_op(&x, &y);
    assert!(z.value().is_infinite());
}
