use super::*;
use crate::autograd::check_grad;
use approx::assert_relative_eq;

#[test]
fn test_tanh_forward_matches_std() {
    for x in [-3.0f64, -0.5, 0.0, 0.25, 2.0] {
        let y = tanh_op(&Value::new(x));
        assert_relative_eq!(y.data(), x.tanh(), epsilon = 1e-12);
        assert_eq!(y.op(), Op::Tanh);
    }
}

#[test]
fn test_tanh_backward() {
    for x in [-2.0f64, 0.0, 1.5] {
        let a = Value::new(x);
        let y = tanh_op(&a);
        y.backward();
        assert_relative_eq!(a.grad(), 1.0 - x.tanh().powi(2), epsilon = 1e-12);
    }
}

#[test]
fn test_tanh_grad_check() {
    let func = |x: &[Value]| tanh_op(&(&x[0] + &x[1]));
    let result = check_grad(func, &[0.2, -0.9], 1e-6, 1e-7, 1e-5);
    assert!(result.is_ok(), "Tanh grad check failed: {:?}", result.err());
}
