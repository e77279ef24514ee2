use core::ops::AddAssign;

use crate::encoding::Encoding;
use crate::line::{LeadingWhitespace, LineSummary, Terminator};

/// Label shown for text files whose encoding was not announced by a preamble.
pub const UNDETECTED_TEXT_LABEL: &str = "Any 8 bit text";
/// Label shown for binary files.
pub const BINARY_LABEL: &str = "Binary";

/// Aggregate counters for one analysed file.
///
/// `lf_lines + crlf_lines <= all_lines` and the three leading categories
/// never sum to more than `all_lines`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextStatistics {
    pub all_lines: u64,
    pub lf_lines: u64,
    pub crlf_lines: u64,
    pub leading_spaces_lines: u64,
    pub leading_tabs_lines: u64,
    pub leading_mixed_lines: u64,
    pub non_leading_tabs_lines: u64,
    pub trailing_whitespace_lines: u64,
    pub sole_cr_lines: u64,
    pub all_characters: u64,
    pub non_printable_characters: u64,
}

impl TextStatistics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a completed line into the counters.
    pub fn record_line(&mut self, line: LineSummary, terminator: Terminator) {
        match terminator {
            Terminator::Lf => self.lf_lines += 1,
            Terminator::CrLf => self.crlf_lines += 1,
            Terminator::EndOfStream => {}
        }

        match line.leading {
            LeadingWhitespace::Mixed => self.leading_mixed_lines += 1,
            LeadingWhitespace::Spaces => self.leading_spaces_lines += 1,
            LeadingWhitespace::Tabs => self.leading_tabs_lines += 1,
            LeadingWhitespace::None => {}
        }

        if line.trailing_whitespace {
            self.trailing_whitespace_lines += 1;
        }
        if line.non_leading_tabs {
            self.non_leading_tabs_lines += 1;
        }
        if line.sole_cr {
            self.sole_cr_lines += 1;
        }

        self.all_lines += 1;
    }

    /// Lines that ended with `LF` or `CRLF`.
    #[must_use]
    pub const fn terminated_lines(&self) -> u64 {
        self.lf_lines + self.crlf_lines
    }

    /// Whether the counters describe a text file (no non-printable characters).
    #[must_use]
    pub const fn is_text(&self) -> bool {
        self.non_printable_characters == 0
    }
}

impl AddAssign for TextStatistics {
    fn add_assign(&mut self, rhs: Self) {
        self.all_lines += rhs.all_lines;
        self.lf_lines += rhs.lf_lines;
        self.crlf_lines += rhs.crlf_lines;
        self.leading_spaces_lines += rhs.leading_spaces_lines;
        self.leading_tabs_lines += rhs.leading_tabs_lines;
        self.leading_mixed_lines += rhs.leading_mixed_lines;
        self.non_leading_tabs_lines += rhs.non_leading_tabs_lines;
        self.trailing_whitespace_lines += rhs.trailing_whitespace_lines;
        self.sole_cr_lines += rhs.sole_cr_lines;
        self.all_characters += rhs.all_characters;
        self.non_printable_characters += rhs.non_printable_characters;
    }
}

/// Outcome of analysing one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileCharacteristics {
    pub is_text: bool,
    /// Encoding announced by a preamble. `None` for binary files and plain 8-bit text.
    pub encoding: Option<Encoding>,
    /// `None` for binary files.
    pub statistics: Option<TextStatistics>,
}

impl FileCharacteristics {
    /// Apply the text/binary decision to finished statistics.
    ///
    /// A single non-printable character makes the file binary and drops
    /// both the encoding and the statistics.
    #[must_use]
    pub const fn classify(detected: Option<Encoding>, statistics: TextStatistics) -> Self {
        if statistics.is_text() {
            Self {
                is_text: true,
                encoding: detected,
                statistics: Some(statistics),
            }
        } else {
            Self::binary()
        }
    }

    #[must_use]
    pub const fn binary() -> Self {
        Self {
            is_text: false,
            encoding: None,
            statistics: None,
        }
    }

    /// Human readable type: encoding name, [`UNDETECTED_TEXT_LABEL`] or [`BINARY_LABEL`].
    #[must_use]
    pub const fn type_label(&self) -> &'static str {
        match (self.is_text, self.encoding) {
            (true, Some(encoding)) => encoding.name(),
            (true, None) => UNDETECTED_TEXT_LABEL,
            (false, _) => BINARY_LABEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(leading: LeadingWhitespace) -> LineSummary {
        LineSummary {
            leading,
            ..LineSummary::default()
        }
    }

    #[test]
    fn record_line_counts_terminators() {
        let mut stats = TextStatistics::new();
        stats.record_line(LineSummary::default(), Terminator::Lf);
        stats.record_line(LineSummary::default(), Terminator::CrLf);
        stats.record_line(LineSummary::default(), Terminator::EndOfStream);

        assert_eq!(stats.all_lines, 3);
        assert_eq!(stats.lf_lines, 1);
        assert_eq!(stats.crlf_lines, 1);
        assert_eq!(stats.terminated_lines(), 2);
    }

    #[test]
    fn record_line_leading_categories_are_exclusive() {
        let mut stats = TextStatistics::new();
        stats.record_line(line(LeadingWhitespace::Mixed), Terminator::Lf);
        stats.record_line(line(LeadingWhitespace::Spaces), Terminator::Lf);
        stats.record_line(line(LeadingWhitespace::Tabs), Terminator::Lf);
        stats.record_line(line(LeadingWhitespace::None), Terminator::Lf);

        assert_eq!(stats.leading_mixed_lines, 1);
        assert_eq!(stats.leading_spaces_lines, 1);
        assert_eq!(stats.leading_tabs_lines, 1);
        assert_eq!(stats.all_lines, 4);
    }

    #[test]
    fn classify_binary_drops_everything() {
        let stats = TextStatistics {
            non_printable_characters: 1,
            all_lines: 7,
            ..TextStatistics::default()
        };
        let result = FileCharacteristics::classify(Some(Encoding::Utf8), stats);

        assert_eq!(result, FileCharacteristics::binary());
        assert_eq!(result.type_label(), BINARY_LABEL);
    }

    #[test]
    fn type_label_for_text() {
        let stats = TextStatistics::default();
        assert_eq!(FileCharacteristics::classify(None, stats).type_label(), UNDETECTED_TEXT_LABEL);
        assert_eq!(
            FileCharacteristics::classify(Some(Encoding::Utf16Le), stats).type_label(),
            "UTF-16LE"
        );
    }
}
