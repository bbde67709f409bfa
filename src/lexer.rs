use crate::token::{Token, TokenKind};

/// Tokenize a program into a sequence of tokens.
///
/// Never fails: input that matches no token shape becomes a single
/// `LexError` token per unmatched run and is left for the parser to
/// reject. The sequence always ends with exactly one `EndOfInput`
/// token carrying the line of the last real token (or `0`).
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let source = strip_comments(input);
    let tokens = Lexer::new(&source).tokenize();
    log::debug!("tokenized {} token(s)", tokens.len());
    tokens
}

/// Replace every `%` comment, up to and including its newline, with a
/// single newline so line numbers stay aligned with the input.
fn strip_comments(input: &str) -> String {
    let input = input.replace("\r\n", "\n");
    let mut out = String::with_capacity(input.len());
    let mut rest = input.as_str();

    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        if let Some(end) = rest[start..].find('\n') {
            out.push('\n');
            rest = &rest[start + end + 1..];
        } else {
            // comment runs to end of input
            rest = "";
        }
    }
    out.push_str(rest);
    out
}

/// What a matcher recognized at the scan position.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Lexeme {
    /// Produces exactly one token.
    Token(TokenKind),
    /// `REPEAT <count>`; `None` when the count does not fit in a `u32`.
    Repeat(Option<u32>),
    /// Spaces, tabs, or newlines. Produces no token.
    Blank,
}

/// A recognized lexeme and the number of bytes it spans.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Match {
    lexeme: Lexeme,
    len: usize,
}

impl Match {
    const fn token(kind: TokenKind, len: usize) -> Self {
        Self {
            lexeme: Lexeme::Token(kind),
            len,
        }
    }
}

type Matcher = fn(&[u8]) -> Option<Match>;

/// Matchers in precedence order. The first one that applies at the
/// scan position wins.
const MATCHERS: [Matcher; 8] = [
    spaced_keyword,
    bare_keyword,
    repeat_count,
    punctuation,
    number,
    hex_color,
    newline,
    blank,
];

fn match_at(input: &[u8]) -> Option<Match> {
    MATCHERS.iter().find_map(|matcher| matcher(input))
}

const fn is_separator(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n')
}

fn count_while(input: &[u8], pred: impl Fn(u8) -> bool) -> usize {
    input.iter().take_while(|&&b| pred(b)).count()
}

/// Length of `word` if `input` starts with it, ignoring ASCII case.
fn keyword(input: &[u8], word: &str) -> Option<usize> {
    let word = word.as_bytes();
    input
        .get(..word.len())?
        .eq_ignore_ascii_case(word)
        .then_some(word.len())
}

fn parse_decimal(digits: &[u8]) -> Option<u32> {
    std::str::from_utf8(digits).ok()?.parse().ok()
}

/// A keyword that must be followed by exactly one space, tab, or
/// newline, which the match absorbs.
fn spaced_keyword(input: &[u8]) -> Option<Match> {
    let keywords = [
        ("forward", TokenKind::Forward),
        ("forw", TokenKind::Forward),
        ("backward", TokenKind::Backward),
        ("back", TokenKind::Backward),
        ("left", TokenKind::TurnLeft),
        ("right", TokenKind::TurnRight),
        ("color", TokenKind::SetColor),
    ];
    keywords.into_iter().find_map(|(word, kind)| {
        let len = keyword(input, word)?;
        let next = *input.get(len)?;
        is_separator(next).then(|| Match::token(kind, len + 1))
    })
}

fn bare_keyword(input: &[u8]) -> Option<Match> {
    [("up", TokenKind::PenUp), ("down", TokenKind::PenDown)]
        .into_iter()
        .find_map(|(word, kind)| keyword(input, word).map(|len| Match::token(kind, len)))
}

/// `REPEAT`, separators, a digit run, then trailing separators.
fn repeat_count(input: &[u8]) -> Option<Match> {
    let word = keyword(input, "repeat").or_else(|| keyword(input, "rep"))?;

    let lead = count_while(&input[word..], is_separator);
    if lead == 0 {
        return None;
    }
    let digits_start = word + lead;
    let digits = count_while(&input[digits_start..], |b| b.is_ascii_digit());
    if digits == 0 {
        return None;
    }
    let digits_end = digits_start + digits;
    let trail = count_while(&input[digits_end..], is_separator);
    if trail == 0 {
        return None;
    }

    Some(Match {
        lexeme: Lexeme::Repeat(parse_decimal(&input[digits_start..digits_end])),
        len: digits_end + trail,
    })
}

fn punctuation(input: &[u8]) -> Option<Match> {
    match input.first()? {
        b'.' => Some(Match::token(TokenKind::Period, 1)),
        b'"' => Some(Match::token(TokenKind::Quote, 1)),
        _ => None,
    }
}

fn number(input: &[u8]) -> Option<Match> {
    let len = count_while(input, |b| b.is_ascii_digit());
    if len == 0 {
        return None;
    }
    let kind = parse_decimal(&input[..len]).map_or(TokenKind::LexError, TokenKind::Number);
    Some(Match::token(kind, len))
}

/// `#` followed by exactly six ASCII alphanumerics.
fn hex_color(input: &[u8]) -> Option<Match> {
    if input.first() != Some(&b'#') {
        return None;
    }
    if !input.get(1..7)?.iter().all(u8::is_ascii_alphanumeric) {
        return None;
    }
    let text = String::from_utf8_lossy(&input[..7]).into_owned();
    Some(Match::token(TokenKind::HexColor(text), 7))
}

fn newline(input: &[u8]) -> Option<Match> {
    (input.first() == Some(&b'\n')).then_some(Match {
        lexeme: Lexeme::Blank,
        len: 1,
    })
}

fn blank(input: &[u8]) -> Option<Match> {
    let len = count_while(input, |b| b == b' ' || b == b'\t');
    (len > 0).then_some(Match {
        lexeme: Lexeme::Blank,
        len,
    })
}

struct Lexer<'a> {
    input: &'a [u8],
    pos: usize,
    line: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    const fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            pos: 0,
            line: 1,
            tokens: Vec::new(),
        }
    }

    fn tokenize(mut self) -> Vec<Token> {
        let mut in_gap = false;

        while self.pos < self.input.len() {
            if let Some(m) = match_at(&self.input[self.pos..]) {
                if in_gap {
                    self.unrecognized();
                    in_gap = false;
                }
                self.accept(m);
            } else {
                in_gap = true;
                self.pos += 1;
            }
        }
        if in_gap {
            self.unrecognized();
        }

        let line = self.tokens.last().map_or(0, |t| t.line);
        self.tokens.push(Token::new(TokenKind::EndOfInput, line));
        self.tokens
    }

    fn push(&mut self, kind: TokenKind) {
        self.tokens.push(Token::new(kind, self.line));
    }

    // A gap never holds a newline, so the current line is the gap's line.
    fn unrecognized(&mut self) {
        log::debug!("unrecognized input on line {}", self.line);
        self.push(TokenKind::LexError);
    }

    fn accept(&mut self, m: Match) {
        let newlines = self.input[self.pos..self.pos + m.len]
            .iter()
            .filter(|&&b| b == b'\n')
            .count();

        match m.lexeme {
            Lexeme::Token(kind) => {
                self.push(kind);
                self.line += newlines;
            }
            Lexeme::Repeat(count) => {
                self.push(TokenKind::Repeat);
                self.line += newlines;
                self.push(count.map_or(TokenKind::LexError, TokenKind::Number));
            }
            Lexeme::Blank => self.line += newlines,
        }
        self.pos += m.len;
    }
}
