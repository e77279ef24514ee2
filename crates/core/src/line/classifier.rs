//! 行ごとの空白分類

/// Composition of a line's leading whitespace.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LeadingWhitespace {
    /// No space or tab before the first non-whitespace character.
    #[default]
    None,
    Spaces,
    Tabs,
    /// Both spaces and tabs.
    Mixed,
}

impl LeadingWhitespace {
    const fn from_flags(spaces: bool, tabs: bool) -> Self {
        match (spaces, tabs) {
            (true, true) => Self::Mixed,
            (true, false) => Self::Spaces,
            (false, true) => Self::Tabs,
            (false, false) => Self::None,
        }
    }
}

/// Classification of one completed line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LineSummary {
    pub leading: LeadingWhitespace,
    pub trailing_whitespace: bool,
    pub non_leading_tabs: bool,
    pub sole_cr: bool,
}

#[derive(Debug, Default, Clone, Copy)]
struct LineState {
    after_leading: bool,
    leading_spaces: bool,
    leading_tabs: bool,
    trailing_whitespace: bool,
    non_leading_tabs: bool,
    sole_cr: bool,
}

/// Accumulates whitespace flags for the line currently being read.
///
/// Only characters forwarded by the boundary detector reach this type, so a
/// `'\r'` seen here is never part of a `CRLF` terminator.
#[derive(Debug, Default, Clone)]
pub struct LineClassifier {
    state: LineState,
}

impl LineClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn evaluate(&mut self, c: char) {
        let state = &mut self.state;
        let is_whitespace = c.is_whitespace();

        if !state.after_leading {
            match c {
                ' ' => state.leading_spaces = true,
                '\t' => state.leading_tabs = true,
                // Other whitespace (form feed, NBSP, a sole CR) neither counts
                // nor ends the leading region.
                _ if is_whitespace => {}
                _ => state.after_leading = true,
            }
        } else if c == '\t' {
            state.non_leading_tabs = true;
        }

        state.trailing_whitespace = is_whitespace;

        if c == '\r' {
            state.sole_cr = true;
        }
    }

    /// Summarise the current line and reset for the next one.
    pub fn line_done(&mut self) -> LineSummary {
        let state = core::mem::take(&mut self.state);
        LineSummary {
            leading: LeadingWhitespace::from_flags(state.leading_spaces, state.leading_tabs),
            trailing_whitespace: state.trailing_whitespace,
            non_leading_tabs: state.non_leading_tabs,
            sole_cr: state.sole_cr,
        }
    }
}
