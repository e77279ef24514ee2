use proptest::prelude::*;
use whitespace_stats_core::{FileCharacteristics, TextAnalyzer};

proptest! {
    #[test]
    fn terminated_lines_never_exceed_all_lines(
        content in "[ \\ta\\r\\n\\x0C]{0,300}"
    ) {
        let stats = TextAnalyzer::analyze_str(&content);
        prop_assert!(stats.terminated_lines() <= stats.all_lines);

        // Equality only when the final line carries a terminator.
        let fully_terminated = content.is_empty() || content.ends_with('\n');
        prop_assert_eq!(stats.terminated_lines() == stats.all_lines, fully_terminated);
    }

    #[test]
    fn leading_categories_are_exclusive(
        content in "[ \\tx\\r\\n]{0,300}"
    ) {
        let stats = TextAnalyzer::analyze_str(&content);
        let leading = stats.leading_spaces_lines + stats.leading_tabs_lines + stats.leading_mixed_lines;
        prop_assert!(leading <= stats.all_lines);
    }

    #[test]
    fn line_endings_match_a_plain_count(
        content in "[ab\\r\\n]{0,300}"
    ) {
        let stats = TextAnalyzer::analyze_str(&content);
        let crlf = content.matches("\r\n").count() as u64;
        let lf = content.matches('\n').count() as u64 - crlf;
        let unterminated = u64::from(!content.is_empty() && !content.ends_with('\n'));

        prop_assert_eq!(stats.crlf_lines, crlf);
        prop_assert_eq!(stats.lf_lines, lf);
        prop_assert_eq!(stats.all_lines, crlf + lf + unterminated);
        prop_assert_eq!(stats.all_characters, content.chars().count() as u64);
    }

    #[test]
    fn analysis_is_idempotent(
        content in "\\PC{0,200}"
    ) {
        prop_assert_eq!(TextAnalyzer::analyze_str(&content), TextAnalyzer::analyze_str(&content));
    }

    #[test]
    fn split_feeding_matches_whole_feeding(
        content in "[ \\tz\\r\\n]{0,200}",
        split in 0usize..200
    ) {
        let at = content
            .char_indices()
            .map(|(i, _)| i)
            .nth(split)
            .unwrap_or(content.len());
        let (head, tail) = content.split_at(at);

        let mut analyzer = TextAnalyzer::new();
        analyzer.feed_str(head);
        analyzer.feed_str(tail);

        prop_assert_eq!(analyzer.finish(), TextAnalyzer::analyze_str(&content));
    }

    #[test]
    fn printable_text_is_always_text(
        content in "[ -~\\t\\r\\n]{0,300}"
    ) {
        let stats = TextAnalyzer::analyze_str(&content);
        prop_assert!(FileCharacteristics::classify(None, stats).is_text);
    }
}

#[test]
fn single_nul_is_binary() {
    let stats = TextAnalyzer::analyze_str("\0");
    let result = FileCharacteristics::classify(None, stats);
    assert!(!result.is_text);
    assert!(result.statistics.is_none());
}
