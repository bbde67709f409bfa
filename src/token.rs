use std::fmt;

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// `FORWARD` (or `FORW`).
    Forward,
    /// `BACKWARD` (or `BACK`).
    Backward,
    /// `LEFT`.
    TurnLeft,
    /// `RIGHT`.
    TurnRight,
    /// `UP`.
    PenUp,
    /// `DOWN`.
    PenDown,
    /// `COLOR`.
    SetColor,
    /// `REPEAT` (or `REP`). Always followed by a `Number` token.
    Repeat,
    /// Statement terminator `.`.
    Period,
    /// Loop body delimiter `"`.
    Quote,
    /// Decimal literal.
    Number(u32),
    /// Color literal `#xxxxxx`, case preserved.
    HexColor(String),
    /// Input that matched no token shape.
    LexError,
    /// End of the token sequence.
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(f, "'FORWARD'"),
            Self::Backward => write!(f, "'BACKWARD'"),
            Self::TurnLeft => write!(f, "'LEFT'"),
            Self::TurnRight => write!(f, "'RIGHT'"),
            Self::PenUp => write!(f, "'UP'"),
            Self::PenDown => write!(f, "'DOWN'"),
            Self::SetColor => write!(f, "'COLOR'"),
            Self::Repeat => write!(f, "'REPEAT'"),
            Self::Period => write!(f, "'.'"),
            Self::Quote => write!(f, "'\"'"),
            Self::Number(n) => write!(f, "number {n}"),
            Self::HexColor(c) => write!(f, "color {c}"),
            Self::LexError => write!(f, "unrecognized input"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// A single token with its kind and the 1-based line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, line: usize) -> Self {
        Self { kind, line }
    }

    /// The integer payload of a `Number` token.
    #[must_use]
    pub const fn number(&self) -> Option<u32> {
        match self.kind {
            TokenKind::Number(n) => Some(n),
            _ => None,
        }
    }

    /// The verbatim payload of a `HexColor` token.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::HexColor(c) => Some(c),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_end(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfInput)
    }
}
