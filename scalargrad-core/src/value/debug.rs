// src/value/debug.rs
//
// Observational dumps of a computation graph. Nothing here mutates nodes.

use std::collections::HashSet;
use std::fmt::{self, Write as _};
use std::io;

use crate::value::{NodeId, Value};

impl Value {
    /// Writes the graph below this node as an indented tree, one line per
    /// node and four spaces per depth level:
    ///
    /// ```text
    /// Value(6.00) op='*' grad='1.00'
    ///     Value(2.00) op='' grad='3.00'
    ///     Value(3.00) op='' grad='2.00'
    /// ```
    ///
    /// A node shared by several parents is printed once under each of them.
    pub fn write_graph<W: fmt::Write>(&self, writer: &mut W) -> fmt::Result {
        // Explicit (node, depth) stack; children pushed in reverse keep
        // the pre-order of a recursive walk without its stack depth.
        let mut stack: Vec<(Value, usize)> = vec![(self.clone(), 0)];
        while let Some((node, depth)) = stack.pop() {
            let guard = node.read_data();
            writeln!(
                writer,
                "{:indent$}Value({:.2}) op='{}' grad='{:.2}'",
                "",
                guard.data,
                guard.op,
                guard.grad,
                indent = depth * 4
            )?;
            for child in guard.children.iter().rev() {
                stack.push((child.clone(), depth + 1));
            }
        }
        Ok(())
    }

    /// Returns the output of [`Value::write_graph`] as a `String`.
    pub fn graph_string(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_graph(&mut out);
        out
    }

    /// Logs the graph dump at debug level, one record per line.
    pub fn log_graph(&self) {
        for line in self.graph_string().lines() {
            log::debug!("{}", line);
        }
    }

    /// Writes a Graphviz dot description of the graph below this node.
    ///
    /// Unlike the tree dump, every node appears exactly once; edges go from
    /// an input to the node consuming it.
    pub fn to_dot(&self, writer: &mut impl io::Write) -> io::Result<()> {
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut nodes = String::new();
        let mut edges = String::new();
        let mut stack = vec![self.clone()];

        while let Some(node) = stack.pop() {
            let id = node.node_id();
            if !visited.insert(id) {
                continue;
            }
            let guard = node.read_data();
            let _ = writeln!(
                nodes,
                "a{} [label=\"{}\\ndata:{:.4}, grad:{:.4}\"];",
                id as usize,
                guard.op,
                guard.data,
                guard.grad
            );
            for child in guard.children.iter() {
                let _ = writeln!(edges, "a{} -> a{};", child.node_id() as usize, id as usize);
                stack.push(child.clone());
            }
        }

        writeln!(writer, "digraph G {{\nrankdir=\"LR\";")?;
        writer.write_all(nodes.as_bytes())?;
        writer.write_all(edges.as_bytes())?;
        writeln!(writer, "}}")?;
        Ok(())
    }
}
