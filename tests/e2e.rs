//! End-to-end scenarios: program text in, turtle state and segments out.

mod common;

use common::{assert_close, assert_segment, draw};
use turtle_lang::{ParseErrorKind, TokenKind, Turtle, format, parse_str, run, tokenize};

#[test]
fn pen_starts_up() {
    let turtle = draw("FORWARD 10.");
    assert!(turtle.segments().is_empty());
    assert_close(turtle.position(), (10.0, 0.0));
}

#[test]
fn pen_down_then_forward() {
    let turtle = draw("DOWN. FORWARD 10.");
    assert_eq!(turtle.segments().len(), 1);
    assert_eq!(turtle.segments()[0].to_string(), "#0000FF 0 0 10 0");
}

#[test]
fn red_square() {
    let turtle = draw("COLOR #ff0000. DOWN.\nREPEAT 4 \"RIGHT 90. FORWARD 5.\"");
    let segments = turtle.segments();
    assert_eq!(segments.len(), 4);
    assert_segment(&segments[0], "#FF0000", (0.0, 0.0), (0.0, -5.0));
    assert_segment(&segments[1], "#FF0000", (0.0, -5.0), (-5.0, -5.0));
    assert_segment(&segments[2], "#FF0000", (-5.0, -5.0), (-5.0, 0.0));
    assert_segment(&segments[3], "#FF0000", (-5.0, 0.0), (0.0, 0.0));
    assert_eq!(turtle.heading().rem_euclid(360), 0);
    assert_close(turtle.position(), (0.0, 0.0));
}

#[test]
fn color_then_pen_up() {
    let turtle = draw("COLOR #00ff00. UP.");
    assert_eq!(turtle.color().as_str(), "#00FF00");
    assert!(!turtle.is_pen_down());
}

#[test]
fn missing_period_reports_number_line() {
    let tokens = tokenize("FORWARD\n10");
    let number_line = tokens
        .iter()
        .find(|t| t.number().is_some())
        .map(|t| t.line)
        .expect("number token");
    let err = parse_str("FORWARD\n10").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::ExpectedPeriod);
    assert_eq!(err.found, TokenKind::EndOfInput);
    assert_eq!(err.line, number_line);
    assert_eq!(err.line, 2);
}

#[test]
fn word_instead_of_number() {
    assert!(tokenize("LEFT ten.").contains(&turtle_lang::Token::new(TokenKind::LexError, 1)));
    let err = parse_str("LEFT ten.").unwrap_err();
    assert_eq!(err.line, 1);
    assert_eq!(err.kind, ParseErrorKind::UnrecognizedInput);
}

#[test]
fn pen_up_segments_are_skipped() {
    let turtle = draw("DOWN. FORWARD 1. UP. FORWARD 1. DOWN. BACKWARD 1.");
    let segments = turtle.segments();
    assert_eq!(segments.len(), 2);
    assert_segment(&segments[0], "#0000FF", (0.0, 0.0), (1.0, 0.0));
    assert_segment(&segments[1], "#0000FF", (2.0, 0.0), (1.0, 0.0));
}

#[test]
fn color_changes_apply_to_later_segments() {
    let turtle = draw(
        "% stripes\n\
         DOWN.\n\
         COLOR #111111. FORWARD 1.\n\
         COLOR #abcdef. LEFT 90. FORWARD 1.\n",
    );
    let segments = turtle.segments();
    assert_segment(&segments[0], "#111111", (0.0, 0.0), (1.0, 0.0));
    assert_segment(&segments[1], "#ABCDEF", (1.0, 0.0), (1.0, 1.0));
}

#[test]
fn heading_is_not_normalized() {
    let turtle = draw("REPEAT 3 LEFT 180. RIGHT 30.");
    assert_eq!(turtle.heading(), 510);
}

#[test]
fn segments_render_with_precision() {
    let turtle = draw("DOWN. LEFT 45. FORWARD 2.");
    assert_eq!(
        format!("{:.3}", turtle.segments()[0]),
        "#0000FF 0.000 0.000 1.414 1.414"
    );
}

#[test]
fn formatted_program_draws_the_same() {
    let input = "down.color #a0a0a0.rep 3 \"forw 10. left 120.\" up. back 4.";
    let tree = parse_str(input).expect("parse failed");
    let canonical = format(&tree);

    let mut original = Turtle::new();
    run(input, &mut original).expect("run failed");
    let mut reformatted = Turtle::new();
    run(&canonical, &mut reformatted).expect("run failed");
    assert_eq!(original, reformatted);
}
