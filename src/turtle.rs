//! Reference drawing agent.
//!
//! Starts at the origin facing east (heading 0) with the pen up and
//! color `#0000FF`. Every move made with the pen down is recorded as a
//! [`Segment`].

use std::f64::consts::PI;
use std::fmt;

use crate::ast::Color;
use crate::eval::Agent;

/// A position on the drawing plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One drawn line: color, start, and end.
///
/// Displays as `COLOR x0 y0 x1 y1`. A precision (`{:.2}`) applies to
/// all four coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub color: Color,
    pub start: Point,
    pub end: Point,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { color, start, end } = self;
        if let Some(p) = f.precision() {
            write!(
                f,
                "{color} {:.p$} {:.p$} {:.p$} {:.p$}",
                start.x, start.y, end.x, end.y
            )
        } else {
            write!(f, "{color} {} {} {} {}", start.x, start.y, end.x, end.y)
        }
    }
}

/// Turtle that records the segments it draws.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Turtle {
    position: Point,
    // Whole degrees, counter-clockwise from east. Never normalized.
    heading: i64,
    pen_down: bool,
    color: Color,
    segments: Vec<Segment>,
}

impl Turtle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub const fn heading(&self) -> i64 {
        self.heading
    }

    #[must_use]
    pub const fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    #[must_use]
    pub const fn color(&self) -> &Color {
        &self.color
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }
}

impl Agent for Turtle {
    #[allow(clippy::cast_precision_loss)]
    fn move_by(&mut self, distance: i64) {
        let distance = distance as f64;
        let theta = PI * self.heading as f64 / 180.0;
        let start = self.position;
        let end = Point::new(
            start.x + distance * theta.cos(),
            start.y + distance * theta.sin(),
        );

        if self.pen_down {
            self.segments.push(Segment {
                color: self.color.clone(),
                start,
                end,
            });
        }
        self.position = end;
    }

    fn rotate_by(&mut self, degrees: i64) {
        self.heading = self.heading.wrapping_add(degrees);
    }

    fn pen_up(&mut self) {
        self.pen_down = false;
    }

    fn pen_down(&mut self) {
        self.pen_down = true;
    }

    fn set_color(&mut self, color: &Color) {
        self.color = color.clone();
    }
}
