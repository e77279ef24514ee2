use crate::character::CharacterClassifier;
use crate::line::{Boundary, LineBoundaryDetector, LineClassifier};
use crate::stats::TextStatistics;

/// Drives decoded characters through the classifiers for one file.
///
/// Characters must be fed in stream order; the analyzer owns all state, so
/// independent files can be analysed on independent threads.
#[derive(Debug, Default, Clone)]
pub struct TextAnalyzer {
    stats: TextStatistics,
    characters: CharacterClassifier,
    boundaries: LineBoundaryDetector,
    lines: LineClassifier,
}

impl TextAnalyzer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyse a whole in-memory string.
    #[must_use]
    pub fn analyze_str(text: &str) -> TextStatistics {
        let mut analyzer = Self::new();
        analyzer.feed_str(text);
        analyzer.finish()
    }

    #[inline]
    pub fn feed(&mut self, c: char) {
        self.characters.evaluate(c, &mut self.stats);
        let boundary = self.boundaries.step(c);
        self.apply(boundary);
    }

    pub fn feed_str(&mut self, text: &str) {
        text.chars().for_each(|c| self.feed(c));
    }

    /// Statistics gathered so far, excluding a pending unterminated line.
    #[must_use]
    pub const fn statistics(&self) -> &TextStatistics {
        &self.stats
    }

    /// Flush the last line and return the final statistics.
    #[must_use]
    pub fn finish(mut self) -> TextStatistics {
        let boundary = self.boundaries.finish();
        self.apply(boundary);
        self.stats
    }

    fn apply(&mut self, boundary: Boundary) {
        if let Some(c) = boundary.forward {
            self.lines.evaluate(c);
        }
        if let Some(terminator) = boundary.completed {
            let line = self.lines.line_done();
            self.stats.record_line(line, terminator);
        }
    }
}
