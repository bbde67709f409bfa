//! Tree-walking evaluation against a drawing agent.

use crate::ast::{Color, Command, Direction, Node};

/// Capabilities the evaluator drives.
pub trait Agent {
    /// Move along the current heading. Negative distances move backward.
    fn move_by(&mut self, distance: i64);
    /// Add `degrees` to the heading. Right turns pass a negative angle.
    fn rotate_by(&mut self, degrees: i64);
    fn pen_up(&mut self);
    fn pen_down(&mut self);
    fn set_color(&mut self, color: &Color);
}

impl<A: Agent + ?Sized> Agent for &mut A {
    fn move_by(&mut self, distance: i64) {
        (**self).move_by(distance);
    }

    fn rotate_by(&mut self, degrees: i64) {
        (**self).rotate_by(degrees);
    }

    fn pen_up(&mut self) {
        (**self).pen_up();
    }

    fn pen_down(&mut self) {
        (**self).pen_down();
    }

    fn set_color(&mut self, color: &Color) {
        (**self).set_color(color);
    }
}

/// Evaluate a tree, issuing its commands to `agent` in source order.
///
/// A sequence runs `current` before `rest`; a repeat runs its body
/// `count` times back to back. The sequence spine is walked in a loop,
/// so recursion depth only grows with loop nesting.
pub fn evaluate<A: Agent + ?Sized>(node: &Node, agent: &mut A) {
    let mut next = Some(node);
    while let Some(node) = next {
        next = match node {
            Node::Sequence { current, rest } => {
                evaluate(current, agent);
                rest.as_deref()
            }
            Node::Repeat { count, body } => {
                for _ in 0..*count {
                    evaluate(body, agent);
                }
                None
            }
            Node::Move { direction, amount } => {
                step(*direction, *amount, agent);
                None
            }
            Node::Single(command) => {
                command_step(command, agent);
                None
            }
        };
    }
}

fn step<A: Agent + ?Sized>(direction: Direction, amount: u32, agent: &mut A) {
    let amount = i64::from(amount);
    log::trace!("{direction:?} {amount}");
    match direction {
        Direction::Forward => agent.move_by(amount),
        Direction::Backward => agent.move_by(-amount),
        Direction::TurnLeft => agent.rotate_by(amount),
        Direction::TurnRight => agent.rotate_by(-amount),
    }
}

fn command_step<A: Agent + ?Sized>(command: &Command, agent: &mut A) {
    log::trace!("{command:?}");
    match command {
        Command::PenUp => agent.pen_up(),
        Command::PenDown => agent.pen_down(),
        Command::SetColor(color) => agent.set_color(color),
        Command::End => {}
    }
}
