use super::*;
use crate::autograd::check_grad;
use approx::assert_relative_eq;

#[test]
fn test_mul_forward() {
    let a = Value::new(2.0);
    let b = Value::new(-3.0);
    let c = mul_op(&a, &b);
    assert_relative_eq!(c.data(), -6.0);
    assert_eq!(c.op(), Op::Mul);
}

#[test]
fn test_mul_backward_swaps_operands() {
    for (x, y) in [(2.0, -3.0), (0.5, 8.0), (-1.25, -4.0)] {
        let a = Value::new(x);
        let b = Value::new(y);
        mul_op(&a, &b).backward();
        assert_relative_eq!(a.grad(), y);
        assert_relative_eq!(b.grad(), x);
    }
}

#[test]
fn test_mul_same_node_is_square() {
    let a = Value::new(-3.0);
    let c = mul_op(&a, &a);
    c.backward();
    assert_relative_eq!(c.data(), 9.0);
    assert_relative_eq!(a.grad(), 2.0 * a.data());
}

#[test]
fn test_mul_uses_snapshot_of_operands() {
    let a = Value::new(2.0);
    let b = Value::new(5.0);
    let c = mul_op(&a, &b);
    // Changing an operand between forward and backward does not change
    // the rule captured at construction.
    b.set_data(100.0);
    c.backward();
    assert_relative_eq!(a.grad(), 5.0);
    assert_relative_eq!(b.grad(), 2.0);
}

#[test]
fn test_mul_scalar_both_sides() {
    let a = Value::new(4.0);
    let right = &a * 0.5;
    let left = 3.0 * &a;
    assert_relative_eq!(right.data(), 2.0);
    assert_relative_eq!(left.data(), 12.0);
    assert_eq!(left.children().len(), 1);

    let total = &right + &left;
    total.backward();
    assert_relative_eq!(a.grad(), 3.5);
}

#[test]
fn test_mul_grad_check() {
    let func = |x: &[Value]| &(&x[0] * &x[1]) * &x[0];
    let result = check_grad(func, &[1.3, -0.4], 1e-6, 1e-7, 1e-5);
    assert!(result.is_ok(), "Mul grad check failed: {:?}", result.err());
}
