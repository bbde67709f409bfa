#![allow(dead_code)]

use turtle_lang::{Agent, Color, Point, Segment, Turtle, run};

/// One call the evaluator made on an agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Move(i64),
    Rotate(i64),
    PenUp,
    PenDown,
    Color(String),
}

/// Agent that records every call in order.
#[derive(Debug, Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}

impl Agent for Recorder {
    fn move_by(&mut self, distance: i64) {
        self.ops.push(Op::Move(distance));
    }

    fn rotate_by(&mut self, degrees: i64) {
        self.ops.push(Op::Rotate(degrees));
    }

    fn pen_up(&mut self) {
        self.ops.push(Op::PenUp);
    }

    fn pen_down(&mut self) {
        self.ops.push(Op::PenDown);
    }

    fn set_color(&mut self, color: &Color) {
        self.ops.push(Op::Color(color.as_str().to_string()));
    }
}

/// Run a program and return the recorded agent calls.
pub fn record(input: &str) -> Vec<Op> {
    let mut recorder = Recorder::default();
    run(input, &mut recorder).unwrap_or_else(|e| panic!("{e}\n--- input ---\n{input}"));
    recorder.ops
}

/// Run a program on a fresh turtle.
pub fn draw(input: &str) -> Turtle {
    let mut turtle = Turtle::new();
    run(input, &mut turtle).unwrap_or_else(|e| panic!("{e}\n--- input ---\n{input}"));
    turtle
}

pub fn assert_close(actual: Point, expected: (f64, f64)) {
    assert!(
        (actual.x - expected.0).abs() < 1e-9 && (actual.y - expected.1).abs() < 1e-9,
        "expected {expected:?}, got {actual:?}"
    );
}

pub fn assert_segment(segment: &Segment, color: &str, start: (f64, f64), end: (f64, f64)) {
    assert_eq!(segment.color.as_str(), color);
    assert_close(segment.start, start);
    assert_close(segment.end, end);
}
