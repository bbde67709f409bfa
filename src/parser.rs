use std::fmt;

use crate::ast::{Color, Command, Direction, Node};
use crate::cursor::TokenStream;
use crate::token::{Token, TokenKind};

/// Deepest `REPEAT` nesting the parser accepts.
pub const MAX_NESTING: usize = 256;

/// Classifies a parser error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Statement not terminated by `.`.
    ExpectedPeriod,
    /// Movement or `REPEAT` without a count.
    ExpectedNumber,
    /// `COLOR` without a `#xxxxxx` literal.
    ExpectedColor,
    /// Quoted loop body not closed by `"`.
    UnclosedLoop,
    /// Token that cannot start a statement.
    ExpectedStatement,
    /// Tokens left over after a complete program.
    TrailingInput,
    /// The offending token is a lexical error.
    UnrecognizedInput,
    /// `REPEAT` nested more than [`MAX_NESTING`] levels deep.
    NestingTooDeep,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectedPeriod => write!(f, "expected '.'"),
            Self::ExpectedNumber => write!(f, "expected a number"),
            Self::ExpectedColor => write!(f, "expected a color"),
            Self::UnclosedLoop => write!(f, "expected '\"' to close the loop body"),
            Self::ExpectedStatement => write!(f, "expected a statement"),
            Self::TrailingInput => write!(f, "unexpected input after the program"),
            Self::UnrecognizedInput => write!(f, "unrecognized input"),
            Self::NestingTooDeep => write!(f, "loops nested more than {MAX_NESTING} deep"),
        }
    }
}

fn describe(kind: &ParseErrorKind, found: &TokenKind) -> String {
    match kind {
        ParseErrorKind::UnrecognizedInput => kind.to_string(),
        _ => format!("{kind}, found {found}"),
    }
}

/// Error produced during parsing.
///
/// `line` is the source line of the offending token, except for a
/// pen command missing its `.`, which reports the line of the
/// command itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("syntax error on line {line}: {}", describe(.kind, .found))]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: usize,
    pub found: TokenKind,
}

impl ParseError {
    fn new(kind: ParseErrorKind, line: usize, found: &Token) -> Self {
        let kind = if found.kind == TokenKind::LexError {
            ParseErrorKind::UnrecognizedInput
        } else {
            kind
        };
        Self {
            kind,
            line,
            found: found.kind.clone(),
        }
    }

    fn at(kind: ParseErrorKind, token: &Token) -> Self {
        Self::new(kind, token.line, token)
    }
}

/// Parse a token sequence into a program tree.
///
/// The whole sequence, up to and including `EndOfInput`, must be
/// consumed.
///
/// # Errors
///
/// Returns `ParseError` for the first token that does not fit the
/// grammar, including any lexical error token.
pub fn parse(tokens: &[Token]) -> Result<Node, ParseError> {
    Parser::new(tokens)
        .parse()
        .inspect_err(|e| log::debug!("{e}"))
}

struct Parser<'a> {
    tokens: TokenStream<'a>,
    // Enclosing REPEATs of the statement being parsed.
    depth: usize,
}

impl<'a> Parser<'a> {
    const fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens: TokenStream::new(tokens),
            depth: 0,
        }
    }

    fn parse(mut self) -> Result<Node, ParseError> {
        let program = self.expr()?;
        let next = self.tokens.peek();
        if !next.is_end() {
            return Err(ParseError::at(ParseErrorKind::TrailingInput, next));
        }
        self.tokens.advance();
        Ok(program)
    }

    /// `Expr := Stmt Expr | Stmt`
    ///
    /// Stops before `EndOfInput` (tail is the end marker) or before a
    /// closing `"` (tail is absent).
    fn expr(&mut self) -> Result<Node, ParseError> {
        if self.tokens.peek().is_end() {
            return Ok(Node::end());
        }

        let mut statements = Vec::new();
        loop {
            statements.push(self.stmt()?);
            match self.tokens.peek().kind {
                TokenKind::EndOfInput => return Ok(Node::program(statements)),
                TokenKind::Quote => return Ok(Node::block(statements).unwrap_or_else(Node::end)),
                _ => {}
            }
        }
    }

    fn stmt(&mut self) -> Result<Node, ParseError> {
        let next = self.tokens.peek();
        match &next.kind {
            TokenKind::Repeat => {
                if self.depth == MAX_NESTING {
                    return Err(ParseError::at(ParseErrorKind::NestingTooDeep, next));
                }
                self.tokens.advance();
                let count = self.number()?;
                self.depth += 1;
                let body = self.loop_body();
                self.depth -= 1;
                Ok(Node::Repeat {
                    count,
                    body: Box::new(body?),
                })
            }
            TokenKind::PenUp | TokenKind::PenDown => {
                let command = self.tokens.advance();
                let found = self.tokens.peek();
                if found.kind != TokenKind::Period {
                    return Err(ParseError::new(
                        ParseErrorKind::ExpectedPeriod,
                        command.line,
                        found,
                    ));
                }
                self.tokens.advance();
                Ok(Node::Single(if command.kind == TokenKind::PenUp {
                    Command::PenUp
                } else {
                    Command::PenDown
                }))
            }
            TokenKind::SetColor => {
                self.tokens.advance();
                let found = self.tokens.peek();
                let TokenKind::HexColor(hex) = &found.kind else {
                    return Err(ParseError::at(ParseErrorKind::ExpectedColor, found));
                };
                self.tokens.advance();
                self.period()?;
                Ok(Node::Single(Command::SetColor(Color::new(hex))))
            }
            _ => self.movement(),
        }
    }

    /// `Loop := '"' Expr '"' | Stmt`
    fn loop_body(&mut self) -> Result<Node, ParseError> {
        if self.tokens.peek().kind != TokenKind::Quote {
            return self.stmt();
        }
        self.tokens.advance();
        let body = self.expr()?;

        let next = self.tokens.peek();
        if next.kind != TokenKind::Quote {
            return Err(ParseError::at(ParseErrorKind::UnclosedLoop, next));
        }
        self.tokens.advance();
        Ok(body)
    }

    fn movement(&mut self) -> Result<Node, ParseError> {
        let next = self.tokens.peek();
        let direction = match next.kind {
            TokenKind::Forward => Direction::Forward,
            TokenKind::Backward => Direction::Backward,
            TokenKind::TurnLeft => Direction::TurnLeft,
            TokenKind::TurnRight => Direction::TurnRight,
            _ => return Err(ParseError::at(ParseErrorKind::ExpectedStatement, next)),
        };
        self.tokens.advance();
        let amount = self.number()?;
        self.period()?;
        Ok(Node::Move { direction, amount })
    }

    fn number(&mut self) -> Result<u32, ParseError> {
        let next = self.tokens.peek();
        let Some(n) = next.number() else {
            return Err(ParseError::at(ParseErrorKind::ExpectedNumber, next));
        };
        self.tokens.advance();
        Ok(n)
    }

    fn period(&mut self) -> Result<(), ParseError> {
        let next = self.tokens.peek();
        if next.kind != TokenKind::Period {
            return Err(ParseError::at(ParseErrorKind::ExpectedPeriod, next));
        }
        self.tokens.advance();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn parse_input(input: &str) -> Result<Node, ParseError> {
        parse(&tokenize(input))
    }

    fn mv(direction: Direction, amount: u32) -> Node {
        Node::Move { direction, amount }
    }

    #[test]
    fn empty_program_is_end_marker() {
        assert_eq!(parse_input("").expect("parse failed"), Node::end());
        assert_eq!(
            parse_input("  % nothing\n\n").expect("parse failed"),
            Node::end()
        );
    }

    #[test]
    fn single_statement() {
        let tree = parse_input("FORWARD 10.").expect("parse failed");
        assert_eq!(
            tree,
            Node::Sequence {
                current: Box::new(mv(Direction::Forward, 10)),
                rest: Some(Box::new(Node::end())),
            }
        );
    }

    #[test]
    fn sequence_keeps_source_order_in_current_slot() {
        let tree = parse_input("UP. DOWN.").expect("parse failed");
        let Node::Sequence { current, rest } = &tree else {
            panic!("expected a sequence");
        };
        assert_eq!(**current, Node::Single(Command::PenUp));
        let Some(Node::Sequence { current, rest }) = rest.as_deref() else {
            panic!("expected a sequence");
        };
        assert_eq!(**current, Node::Single(Command::PenDown));
        assert_eq!(rest.as_deref(), Some(&Node::end()));
    }

    #[test]
    fn quoted_body_has_absent_tail() {
        let tree = parse_input("REPEAT 2 \"LEFT 90. RIGHT 45.\"").expect("parse failed");
        assert_eq!(
            tree,
            Node::program(vec![Node::Repeat {
                count: 2,
                body: Box::new(
                    Node::block(vec![
                        mv(Direction::TurnLeft, 90),
                        mv(Direction::TurnRight, 45),
                    ])
                    .expect("non-empty"),
                ),
            }])
        );
    }

    #[test]
    fn unquoted_body_is_single_statement() {
        let tree = parse_input("REP 3 BACK 5.").expect("parse failed");
        assert_eq!(
            tree,
            Node::program(vec![Node::Repeat {
                count: 3,
                body: Box::new(mv(Direction::Backward, 5)),
            }])
        );
    }

    #[test]
    fn color_is_normalized() {
        let tree = parse_input("COLOR #ff00aa.").expect("parse failed");
        assert_eq!(
            tree,
            Node::program(vec![Node::Single(Command::SetColor(Color::new("#FF00AA")))])
        );
    }

    #[test]
    fn missing_period_after_number() {
        let err = parse_input("FORWARD 10").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ExpectedPeriod);
        assert_eq!(err.line, 1);
        assert_eq!(err.found, TokenKind::EndOfInput);
    }

    #[test]
    fn pen_error_reports_command_line() {
        let err = parse_input("UP\n\nFORWARD 1.").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ExpectedPeriod);
        assert_eq!(err.line, 1);
        assert_eq!(err.found, TokenKind::Forward);
    }

    #[test]
    fn lex_error_is_unrecognized_input() {
        let err = parse_input("UP.\nLEFT ten.").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnrecognizedInput);
        assert_eq!(err.line, 2);
        assert_eq!(err.to_string(), "syntax error on line 2: unrecognized input");
    }

    #[test]
    fn stray_quote_is_trailing_input() {
        let err = parse_input("UP. \"").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::TrailingInput);
    }

    #[test]
    fn unclosed_loop() {
        let err = parse_input("REPEAT 2 \"UP.\nDOWN.").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnclosedLoop);
        assert_eq!(err.line, 2);
    }

    #[test]
    fn empty_loop_body_is_error() {
        let err = parse_input("REPEAT 2 \"\"").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ExpectedStatement);
        assert_eq!(err.found, TokenKind::Quote);
    }

    #[test]
    fn error_display() {
        let err = parse_input("COLOR 12.").unwrap_err();
        assert_eq!(
            err.to_string(),
            "syntax error on line 1: expected a color, found number 12"
        );
    }

    #[test]
    fn nesting_up_to_limit() {
        let input = "REPEAT 1 ".repeat(MAX_NESTING) + "UP.";
        assert!(parse_input(&input).is_ok());
    }

    #[test]
    fn nesting_past_limit_is_error() {
        let input = "REPEAT 1 ".repeat(MAX_NESTING + 1) + "UP.";
        let err = parse_input(&input).expect_err("should fail");
        assert_eq!(err.kind, ParseErrorKind::NestingTooDeep);
        assert_eq!(err.found, TokenKind::Repeat);
        assert_eq!(err.line, 1);
    }
}
