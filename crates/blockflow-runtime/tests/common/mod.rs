//! Common fixtures for runtime integration tests

#![allow(dead_code)]

use blockflow_core::{DecisionBlock, Operator, Policy, Variables};

/// Start -> C1(age >= 18) -> E1 (1) / E2 (0)
pub fn age_gate(variables: Variables) -> Policy {
    Policy::new(
        "age_gate",
        vec![
            DecisionBlock::start("start", "c1"),
            DecisionBlock::conditional("c1", "age", Operator::Ge, 18, "e1", "e2"),
            DecisionBlock::end("e1", 1.0),
            DecisionBlock::end("e2", 0.0),
        ],
        variables,
    )
}

/// Two conditionals whose branches only lead to each other
pub fn endless_loop(variables: Variables) -> Policy {
    Policy::new(
        "endless_loop",
        vec![
            DecisionBlock::start("start", "ping"),
            DecisionBlock::conditional("ping", "x", Operator::Gt, 0, "pong", "pong"),
            DecisionBlock::conditional("pong", "x", Operator::Le, 0, "ping", "ping"),
        ],
        variables,
    )
}

/// A layered graph where conditional `i` only points forward, so every
/// path terminates. `edges[i]` holds raw choices for the true and false
/// branches; they are folded onto the blocks after `i` (later conditionals
/// first, then the end blocks).
pub fn forward_graph(
    edges: &[(usize, usize, Operator, i32)],
    end_values: &[f64],
    variables: Variables,
) -> Policy {
    let n = edges.len();
    let target = |i: usize, choice: usize| -> String {
        let remaining = n - i - 1;
        let slot = choice % (remaining + end_values.len());
        if slot < remaining {
            format!("c{}", i + 1 + slot)
        } else {
            format!("e{}", slot - remaining)
        }
    };

    let mut blocks = vec![DecisionBlock::start("start", "c0")];
    for (i, &(t, f, op, threshold)) in edges.iter().enumerate() {
        blocks.push(DecisionBlock::conditional(
            format!("c{}", i),
            format!("v{}", i),
            op,
            threshold,
            target(i, t),
            target(i, f),
        ));
    }
    for (k, value) in end_values.iter().enumerate() {
        blocks.push(DecisionBlock::end(format!("e{}", k), *value));
    }

    Policy::new("forward_graph", blocks, variables)
}
