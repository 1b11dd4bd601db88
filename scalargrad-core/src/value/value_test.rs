use super::*;
use crate::value_data::Op;
use approx::assert_relative_eq;
use num_traits::{One, Zero};

#[test]
fn test_leaf_defaults() {
    let v = Value::new(1.5);
    assert_relative_eq!(v.data(), 1.5);
    assert_relative_eq!(v.grad(), 0.0);
    assert!(v.children().is_empty());
    assert_eq!(v.op(), Op::Leaf);
    assert_eq!(v.op().as_str(), "");
    assert!(v.is_leaf());
}

#[test]
fn test_leaf_accepts_non_finite() {
    assert!(Value::new(f64::NAN).data().is_nan());
    assert!(Value::from(f64::INFINITY).data().is_infinite());
}

#[test]
fn test_clone_shares_node() {
    let a = Value::new(1.0);
    let b = a.clone();
    assert!(Value::ptr_eq(&a, &b));
    assert_eq!(a.node_id(), b.node_id());

    b.set_data(4.0);
    b.add_grad(0.5);
    assert_relative_eq!(a.data(), 4.0);
    assert_relative_eq!(a.grad(), 0.5);

    let c = Value::new(4.0);
    assert!(!Value::ptr_eq(&a, &c));
    assert_ne!(a.node_id(), c.node_id());
}

#[test]
fn test_grad_accessors() {
    let a = Value::new(1.0);
    a.add_grad(1.0);
    a.add_grad(2.0);
    assert_relative_eq!(a.grad(), 3.0);
    a.set_grad(-1.0);
    assert_relative_eq!(a.grad(), -1.0);
    a.zero_grad();
    assert_relative_eq!(a.grad(), 0.0);
}

#[test]
fn test_interior_node_is_not_leaf() {
    let a = Value::new(1.0);
    let b = a.exp();
    assert!(!b.is_leaf());
    assert_eq!(b.op().to_string(), "exp");
}

#[test]
fn test_debug_and_display() {
    let a = Value::new(2.0);
    let b = &a + 1.0;
    assert_eq!(format!("{}", b), "Value(3), op='+'");
    assert_eq!(format!("{:?}", a), "Value(data=2, grad=0, op='')");
}

#[test]
fn test_graph_string_format() {
    let a = Value::new(2.0);
    let b = Value::new(3.0);
    let c = &a * &b;
    c.backward();
    let expected = "Value(6.00) op='*' grad='1.00'\n    Value(2.00) op='' grad='3.00'\n    Value(3.00) op='' grad='2.00'\n";
    assert_eq!(c.graph_string(), expected);
}

/// Counts lines and bytes without storing the dump.
#[derive(Default)]
struct LineCounter {
    lines: usize,
    bytes: usize,
    max_indent: usize,
    at_line_start: bool,
    current_indent: usize,
}

impl std::fmt::Write for LineCounter {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        for c in s.chars() {
            self.bytes += c.len_utf8();
            if c == '\n' {
                self.lines += 1;
                self.at_line_start = true;
                self.current_indent = 0;
            } else if c == ' ' && self.at_line_start {
                self.current_indent += 1;
                self.max_indent = self.max_indent.max(self.current_indent);
            } else {
                self.at_line_start = false;
            }
        }
        Ok(())
    }
}

#[test]
fn test_graph_dump_long_chain_does_not_overflow() {
    let n = 5_000;
    let x = Value::new(0.5);
    let mut acc = Value::new(0.0);
    for _ in 0..n {
        acc = &acc + &x;
    }
    acc.backward();

    let mut counter = LineCounter {
        at_line_start: true,
        ..LineCounter::default()
    };
    acc.write_graph(&mut counter).unwrap();
    // every add node plus its `x` child, and the initial leaf
    assert_eq!(counter.lines, 2 * n + 1);
    assert_eq!(counter.max_indent, 4 * n);

    let mut short = Value::new(0.0);
    for _ in 0..3 {
        short = &short + &x;
    }
    let dump = short.graph_string();
    let first_lines: Vec<&str> = dump.lines().take(3).collect();
    assert_eq!(
        first_lines,
        vec![
            "Value(1.50) op='+' grad='0.00'",
            "    Value(1.00) op='+' grad='0.00'",
            "        Value(0.50) op='+' grad='0.00'",
        ]
    );
    assert_eq!(dump.lines().count(), 7);
}

#[test]
fn test_graph_string_repeats_shared_nodes() {
    let a = Value::new(1.0);
    let b = &a + &a;
    let c = &b * &b;
    // c, b, a, a, b, a, a
    assert_eq!(c.graph_string().lines().count(), 7);
    assert!(c.graph_string().lines().nth(2).unwrap_or("").starts_with("        Value(1.00)"));
}

#[test]
fn test_to_dot_lists_each_node_once() {
    let a = Value::new(1.0);
    let b = &a + &a;
    let c = &b * &b;
    let mut out: Vec<u8> = Vec::new();
    c.to_dot(&mut out).unwrap();
    let dot = String::from_utf8(out).unwrap();
    assert!(dot.starts_with("digraph G {"));
    assert!(dot.trim_end().ends_with('}'));
    assert_eq!(dot.matches("[label=").count(), 3);
    assert_eq!(dot.matches(" -> ").count(), 4);
}

#[test]
fn test_zero_one_sum_product() {
    assert_relative_eq!(Value::zero().data(), 0.0);
    assert!(Value::zero().is_zero());
    assert_relative_eq!(Value::one().data(), 1.0);

    let xs: Vec<Value> = [1.0, 2.0, 3.0].iter().map(|&x| Value::new(x)).collect();
    let total: Value = xs.iter().sum();
    assert_relative_eq!(total.data(), 6.0);
    let prod: Value = xs.iter().product();
    assert_relative_eq!(prod.data(), 6.0);

    prod.backward();
    assert_relative_eq!(xs[0].grad(), 6.0);
    assert_relative_eq!(xs[1].grad(), 3.0);
    assert_relative_eq!(xs[2].grad(), 2.0);
}

#[derive(Debug)]
struct SquareBackward {
    x: f64,
}

impl BackwardOp for SquareBackward {
    fn backward(&self, children: &[Value], _out_data: f64, out_grad: f64) {
        children[0].add_grad(2.0 * self.x * out_grad);
    }
}

#[test]
fn test_custom_operation_through_from_op() {
    let a = Value::new(3.0);
    let sq = Value::from_op(
        9.0,
        vec![a.clone()],
        Op::Custom("square"),
        Box::new(SquareBackward { x: 3.0 }),
    );
    let out = &sq + 1.0;
    out.backward();
    assert_eq!(sq.op().as_str(), "square");
    assert_relative_eq!(a.grad(), 6.0);
}

#[test]
fn test_graph_nodes_freed_with_last_holder() {
    let a = Value::new(1.0);
    let weak = {
        let b = &a * 2.0;
        let weak = std::rc::Rc::downgrade(&b.inner);
        let c = &b + 1.0;
        c.backward();
        weak
    };
    // Neither the parent nor any rule keeps `b` alive.
    assert!(weak.upgrade().is_none());
    assert_eq!(std::rc::Rc::strong_count(&a.inner), 1);
}
