//! Pretty-printer that serializes a program tree back into canonical text.
//!
//! Top-level statements go one per line with uppercase keywords. A
//! quoted loop body keeps its statements on one line separated by
//! single spaces.

use crate::ast::{Command, Direction, Node};

/// Format a program tree as source text that parses back to the same
/// tree.
#[must_use]
pub fn format(program: &Node) -> String {
    let mut out = String::new();
    for statement in program.statements() {
        format_statement(&mut out, statement);
        out.push('\n');
    }
    out
}

fn format_statement(out: &mut String, node: &Node) {
    match node {
        Node::Sequence { .. } => format_block(out, node),
        Node::Repeat { count, body } => {
            out.push_str("REPEAT ");
            out.push_str(&count.to_string());
            out.push(' ');
            if matches!(**body, Node::Sequence { .. }) {
                format_block(out, body);
            } else {
                format_statement(out, body);
            }
        }
        Node::Move { direction, amount } => {
            out.push_str(keyword(*direction));
            out.push(' ');
            out.push_str(&amount.to_string());
            out.push('.');
        }
        Node::Single(Command::PenUp) => out.push_str("UP."),
        Node::Single(Command::PenDown) => out.push_str("DOWN."),
        Node::Single(Command::SetColor(color)) => {
            out.push_str("COLOR ");
            out.push_str(color.as_str());
            out.push('.');
        }
        Node::Single(Command::End) => {}
    }
}

fn format_block(out: &mut String, body: &Node) {
    out.push('"');
    for (i, statement) in body.statements().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        format_statement(out, statement);
    }
    out.push('"');
}

const fn keyword(direction: Direction) -> &'static str {
    match direction {
        Direction::Forward => "FORWARD",
        Direction::Backward => "BACKWARD",
        Direction::TurnLeft => "LEFT",
        Direction::TurnRight => "RIGHT",
    }
}
