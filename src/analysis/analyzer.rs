//! Analyzer trait and the two built-in analyzers.

use crate::analysis::token::Token;
use crate::document::FieldKind;

/// Turns raw text into a sequence of normalized tokens.
///
/// Analysis has no error conditions: empty input yields an empty token
/// sequence, and repeated calls over the same input yield identical
/// output (analyzers hold no state between calls).
pub trait Analyzer: Send + Sync + std::fmt::Debug {
    /// Name of this analyzer, for diagnostics.
    fn name(&self) -> &'static str;

    /// Analyze the given text into tokens.
    fn analyze(&self, text: &str) -> Vec<Token>;
}

/// Analyzer for prose text: lowercases and splits on non-alphanumeric
/// boundaries, discarding empty tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardAnalyzer;

impl Analyzer for StandardAnalyzer {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn analyze(&self, text: &str) -> Vec<Token> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .enumerate()
            .map(|(position, word)| Token::new(word.to_lowercase(), position as u32))
            .collect()
    }
}

/// Analyzer for identifier-like values: the entire input is exactly one
/// term, with no splitting and no case folding.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordAnalyzer;

impl Analyzer for KeywordAnalyzer {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn analyze(&self, text: &str) -> Vec<Token> {
        if text.is_empty() {
            return Vec::new();
        }
        vec![Token::new(text, 0)]
    }
}

static STANDARD: StandardAnalyzer = StandardAnalyzer;
static KEYWORD: KeywordAnalyzer = KeywordAnalyzer;

/// Resolve the analyzer for a field kind.
///
/// Both the builder and the searcher go through this function, so a
/// field's terms are normalized identically at index and query time.
pub fn for_kind(kind: FieldKind) -> &'static dyn Analyzer {
    match kind {
        FieldKind::Text => &STANDARD,
        FieldKind::Keyword => &KEYWORD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_standard_analyzer_lowercases_and_splits() {
        let tokens = StandardAnalyzer.analyze("The Cat, sat!  On-the mat");
        assert_eq!(
            terms(&tokens),
            vec!["the", "cat", "sat", "on", "the", "mat"]
        );
        // Positions are dense over surviving tokens
        let positions: Vec<u32> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_standard_analyzer_keeps_digits() {
        let tokens = StandardAnalyzer.analyze("ABC-1 v2");
        assert_eq!(terms(&tokens), vec!["abc", "1", "v2"]);
    }

    #[test]
    fn test_standard_analyzer_empty_input() {
        assert!(StandardAnalyzer.analyze("").is_empty());
        assert!(StandardAnalyzer.analyze("  ,,, !!!").is_empty());
    }

    #[test]
    fn test_standard_analyzer_is_restartable() {
        let first = StandardAnalyzer.analyze("same Input twice");
        let second = StandardAnalyzer.analyze("same Input twice");
        assert_eq!(first, second);
    }

    #[test]
    fn test_keyword_analyzer_preserves_input() {
        let tokens = KeywordAnalyzer.analyze("ABC-1");
        assert_eq!(terms(&tokens), vec!["ABC-1"]);
        assert_eq!(tokens[0].position, 0);
    }

    #[test]
    fn test_keyword_analyzer_empty_input() {
        assert!(KeywordAnalyzer.analyze("").is_empty());
    }

    #[test]
    fn test_for_kind_dispatch() {
        assert_eq!(for_kind(FieldKind::Text).name(), "standard");
        assert_eq!(for_kind(FieldKind::Keyword).name(), "keyword");
    }
}
