//! Plan → text renderer.
//!
//! A node with one child renders as `<action> <child>`. A node with zero or
//! several children renders its action followed by one
//! `IF <state> THEN [<child>]` clause per child, joined with `ELSE`. Goal
//! leaves have no action and render as [`NO_OP_LABEL`].

use std::fmt::{Display, Write};

use crate::plan::ConditionalPlan;

/// Label printed where a node has no action.
pub const NO_OP_LABEL: &str = "NoOp";

/// Render `plan` as a single line.
#[must_use]
pub fn render_plan<S: Display, A: Display>(plan: &ConditionalPlan<S, A>) -> String {
    let mut out = String::new();
    write_plan(&mut out, plan);
    out
}

fn write_plan<S: Display, A: Display>(out: &mut String, plan: &ConditionalPlan<S, A>) {
    match plan.action() {
        Some(action) => {
            let _ = write!(out, "{action}");
        }
        None => out.push_str(NO_OP_LABEL),
    }

    match plan.children() {
        [only] => {
            out.push(' ');
            write_plan(out, only);
        }
        children => {
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    out.push_str(" ELSE");
                }
                let _ = write!(out, " IF {} THEN [", child.state());
                write_plan(out, child);
                out.push(']');
            }
        }
    }
}
