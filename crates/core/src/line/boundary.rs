//! 行境界の検出
//!
//! A carriage return cannot be classified until the next character is known:
//! followed by `\n` it is half of a `CRLF` terminator, otherwise it is line
//! content. The detector therefore holds back exactly one character.

/// How a logical line ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    Lf,
    CrLf,
    /// Last line of the stream, without a terminator.
    EndOfStream,
}

/// Events produced by one detector transition.
///
/// `forward` must be handed to the line classifier before `completed` is applied.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    pub forward: Option<char>,
    pub completed: Option<Terminator>,
}

impl Boundary {
    const fn new(forward: Option<char>, completed: Option<Terminator>) -> Self {
        Self { forward, completed }
    }
}

/// One-character lookback state machine.
#[derive(Debug, Default, Clone)]
pub struct LineBoundaryDetector {
    buffered: Option<char>,
}

impl LineBoundaryDetector {
    #[must_use]
    pub const fn new() -> Self {
        Self { buffered: None }
    }

    /// Character read but not yet known to be followed by a line feed.
    #[must_use]
    pub const fn pending(&self) -> Option<char> {
        self.buffered
    }

    pub fn step(&mut self, c: char) -> Boundary {
        if c == '\n' {
            match self.buffered.take() {
                // The CR belongs to the terminator and is never forwarded.
                Some('\r') => Boundary::new(None, Some(Terminator::CrLf)),
                previous => Boundary::new(previous, Some(Terminator::Lf)),
            }
        } else {
            Boundary::new(self.buffered.replace(c), None)
        }
    }

    /// Flush the buffer at end of stream.
    ///
    /// An empty buffer means the stream was empty or ended right after a
    /// terminator, so no further line exists.
    pub fn finish(&mut self) -> Boundary {
        match self.buffered.take() {
            Some(c) => Boundary::new(Some(c), Some(Terminator::EndOfStream)),
            None => Boundary::new(None, None),
        }
    }
}
