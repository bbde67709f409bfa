use std::fmt;

/// Parse tree for a drawing program.
///
/// Statements `S1 S2 … Sn` form a right-leaning spine
/// `Sequence(S1, Sequence(S2, … Sequence(Sn, tail)))`, where the tail
/// is the end marker at program level and absent inside a quoted loop
/// body. Evaluation visits `current` before `rest`, so statements run
/// in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Run `current`, then `rest` if present.
    Sequence {
        current: Box<Self>,
        rest: Option<Box<Self>>,
    },
    /// Run `body` `count` times.
    Repeat { count: u32, body: Box<Self> },
    /// Move or turn by `amount` units or degrees.
    Move { direction: Direction, amount: u32 },
    /// A command without a numeric argument.
    Single(Command),
}

/// Movement keyword of a `Move` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
}

/// Payload of a `Single` node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    PenUp,
    PenDown,
    SetColor(Color),
    /// No-op standing in for the end of the program.
    End,
}

/// Drawing color, normalized to uppercase (`#FF00AA`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    /// Color an agent starts with.
    pub const DEFAULT: &'static str = "#0000FF";

    #[must_use]
    pub fn new(hex: &str) -> Self {
        Self(hex.to_ascii_uppercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Node {
    /// The end marker, also the tree of an empty program.
    #[must_use]
    pub const fn end() -> Self {
        Self::Single(Command::End)
    }

    /// Chain statements into a program-level spine ending in the end
    /// marker. An empty list yields the end marker alone.
    #[must_use]
    pub fn program(statements: Vec<Self>) -> Self {
        chain(statements, Some(Self::end())).unwrap_or_else(Self::end)
    }

    /// Chain statements into a loop-body spine whose last `rest` is
    /// absent, the shape of a quoted body. `None` for an empty list.
    #[must_use]
    pub fn block(statements: Vec<Self>) -> Option<Self> {
        chain(statements, None)
    }

    #[must_use]
    pub const fn is_end(&self) -> bool {
        matches!(self, Self::Single(Command::End))
    }

    /// Iterate the statements along a sequence spine, in evaluation
    /// order. End markers are skipped; a non-sequence node yields
    /// itself.
    #[must_use]
    pub const fn statements(&self) -> Statements<'_> {
        Statements { next: Some(self) }
    }
}

// The derived drop would recurse once per statement along the spine.
// Children are unlinked onto a work list and freed one at a time.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

impl Node {
    const fn has_children(&self) -> bool {
        matches!(self, Self::Sequence { .. } | Self::Repeat { .. })
    }

    fn detach_children(&mut self, pending: &mut Vec<Box<Self>>) {
        match self {
            Self::Sequence { current, rest } => {
                pending.extend(rest.take());
                if current.has_children() {
                    pending.push(std::mem::replace(current, Box::new(Self::end())));
                }
            }
            Self::Repeat { body, .. } => {
                if body.has_children() {
                    pending.push(std::mem::replace(body, Box::new(Self::end())));
                }
            }
            Self::Move { .. } | Self::Single(_) => {}
        }
    }
}

fn chain(statements: Vec<Node>, tail: Option<Node>) -> Option<Node> {
    statements
        .into_iter()
        .rev()
        .fold(tail, |rest, current| {
            Some(Node::Sequence {
                current: Box::new(current),
                rest: rest.map(Box::new),
            })
        })
}

/// Iterator returned by [`Node::statements`].
#[derive(Debug, Clone)]
pub struct Statements<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Statements<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.next.take()?;
            match node {
                Node::Sequence { current, rest } => {
                    self.next = rest.as_deref();
                    if !current.is_end() {
                        return Some(current.as_ref());
                    }
                }
                node if node.is_end() => {}
                node => return Some(node),
            }
        }
    }
}
