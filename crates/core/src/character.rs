use crate::stats::TextStatistics;

/// Whether `c` can appear in a text file.
///
/// Everything from U+0020 upwards (DEL and all non-ASCII scalars included)
/// plus tab, line feed and carriage return.
#[inline]
#[must_use]
pub const fn is_printable(c: char) -> bool {
    c >= ' ' || matches!(c, '\t' | '\n' | '\r')
}

/// Per-character counters. Holds no state of its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct CharacterClassifier;

impl CharacterClassifier {
    #[inline]
    pub fn evaluate(self, c: char, stats: &mut TextStatistics) {
        stats.all_characters += 1;
        if !is_printable(c) {
            stats.non_printable_characters += 1;
        }
    }
}
