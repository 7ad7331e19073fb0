use super::*;
use crate::autograd::BackwardOp;
use crate::value_data::Op;
use approx::assert_abs_diff_eq;
use rand::Rng;
use std::rc::Rc;

/// Square whose backward rule forgets the factor of 2.
#[derive(Debug)]
struct BrokenSquareBackward {
    input: Value,
}

impl BackwardOp for BrokenSquareBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![self.input.value() * grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

fn broken_square(x: &Value) -> Value {
    let v = x.value();
    Value::from_op(
        v * v,
        Op::Custom("broken_square"),
        Rc::new(BrokenSquareBackward { input: x.clone() }),
    )
}

#[test]
fn test_numerical_grad_polynomial() {
    // f(x, y) = x^2 * y + y^3 ; df/dx = 2xy, df/dy = x^2 + 3y^2
    let f = |v: &[Value]| &v[0].powf(2.0) * &v[1] + v[1].powf(3.0);
    let grads = numerical_grad(f, &[2.0, 3.0], 1e-6);
    assert_abs_diff_eq!(grads[0], 12.0, epsilon = 1e-5);
    assert_abs_diff_eq!(grads[1], 31.0, epsilon = 1e-5);
}

#[test]
fn test_check_grad_passes_for_builtin_ops() {
    let f = |v: &[Value]| {
        let prod = &v[0] * &v[1];
        (&prod + &v[0]).relu() + v[1].powf(2.0) / &v[0]
    };
    check_grad(f, &[1.5, -0.7], &GradCheckConfig::default()).unwrap();
}

#[test]
fn test_check_grad_random_points() {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let x: f64 = rng.gen_range(0.5..3.0);
        let y: f64 = rng.gen_range(-2.0..2.0);
        let f = |v: &[Value]| {
            let a = &v[0] * &v[1] - &v[1];
            let b = v[0].powf(-1.5) + &a * &a;
            &b * &v[0] + a.relu()
        };
        // Keep away from the relu kink where the numerical estimate is undefined.
        if (x * y - y).abs() < 1e-3 {
            continue;
        }
        check_grad(f, &[x, y], &GradCheckConfig::default()).unwrap();
    }
}

#[test]
fn test_check_grad_detects_wrong_rule() {
    let f = |v: &[Value]| broken_square(&v[0]);
    let err = check_grad(f, &[3.0], &GradCheckConfig::default()).unwrap_err();
    match err {
        GradCheckError::GradientMismatch {
            input_index,
            analytical_grad,
            numerical_grad,
            ..
        } => {
            assert_eq!(input_index, 0);
            assert_abs_diff_eq!(analytical_grad, 3.0, epsilon = 1e-12);
            assert_abs_diff_eq!(numerical_grad, 6.0, epsilon = 1e-4);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_check_grad_reports_nan_analytical_grad() {
    // d/dx x^0.5 at x = 0 is infinite
    let f = |v: &[Value]| v[0].powf(0.5);
    let err = check_grad(f, &[0.0], &GradCheckConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        GradCheckError::AnalyticalGradNaNOrInfinite { input_index: 0, .. }
    ));
}

#[test]
fn test_check_grad_reports_non_finite_grad_at_domain_edge() {
    // (x - 1)^0.5 is NaN for the left perturbation; its rule yields 0 * inf.
    let f = |v: &[Value]| (&v[0] - 1.0).powf(0.5) * 0.0 + &v[0];
    let err = check_grad(f, &[1.0], &GradCheckConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        GradCheckError::AnalyticalGradNaNOrInfinite { .. }
            | GradCheckError::NumericalGradNaNOrInfinite { .. }
    ));
}

#[test]
fn test_check_grad_rejects_bad_config() {
    let config = GradCheckConfig {
        epsilon: 0.0,
        ..GradCheckConfig::default()
    };
    let err = check_grad(|v: &[Value]| v[0].clone(), &[1.0], &config).unwrap_err();
    assert!(matches!(err, GradCheckError::InvalidConfig(_)));
    assert!(err.to_string().contains("epsilon"));

    let config = GradCheckConfig {
        abs_tol: -1.0,
        ..GradCheckConfig::default()
    };
    let err = check_grad(|v: &[Value]| v[0].clone(), &[1.0], &config).unwrap_err();
    assert!(matches!(err, GradCheckError::InvalidConfig(_)));
}

#[test]
fn test_engine_errors_stay_engine_errors() {
    let err = GradCheckError::from(ScalarGradError::GradientArityMismatch {
        op: Op::Custom("broken"),
        expected: 2,
        actual: 1,
    });
    assert!(matches!(
        err,
        GradCheckError::EngineError(ScalarGradError::GradientArityMismatch { .. })
    ));
}
