//! Tokenizer, parser, and evaluator for a tiny turtle-graphics language.
//!
//! Programs move a drawing agent around the plane:
//!
//! ```text
//! % a red square
//! COLOR #ff0000. DOWN.
//! REPEAT 4 "FORWARD 10. LEFT 90."
//! ```
//!
//! Text goes through three strictly ordered phases: [`tokenize`] turns
//! it into tokens (lexical errors become tokens), [`parse`] builds a
//! [`Node`] tree, and [`evaluate`] walks the tree, driving an
//! [`Agent`]. [`Turtle`] is the reference agent.
//!
//! # Quick start
//!
//! ```
//! use turtle_lang::{Turtle, run};
//!
//! let mut turtle = Turtle::new();
//! run("DOWN. FORWARD 10.", &mut turtle).unwrap();
//! assert_eq!(turtle.segments()[0].to_string(), "#0000FF 0 0 10 0");
//! ```
//!
//! ## Reporting syntax errors
//!
//! ```
//! let err = turtle_lang::parse_str("UP.\nFORWARD 10").unwrap_err();
//! assert_eq!(err.line, 2);
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod ast;
pub mod cursor;
pub mod eval;
pub mod formatter;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod turtle;

pub use ast::{Color, Command, Direction, Node};
pub use cursor::TokenStream;
pub use eval::{Agent, evaluate};
pub use formatter::format;
pub use lexer::tokenize;
pub use parser::{MAX_NESTING, ParseError, ParseErrorKind, parse};
pub use token::{Token, TokenKind};
pub use turtle::{Point, Segment, Turtle};

/// Tokenize and parse a program in one step.
pub fn parse_str(input: &str) -> Result<Node, ParseError> {
    parse(&tokenize(input))
}

/// Tokenize, parse, and evaluate a program against `agent`.
///
/// Nothing reaches the agent unless the whole program parses.
pub fn run<A: Agent + ?Sized>(input: &str, agent: &mut A) -> Result<(), ParseError> {
    let program = parse_str(input)?;
    evaluate(&program, agent);
    Ok(())
}
