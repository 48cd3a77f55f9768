//! Greedy line packing with forced word splitting
//!
//! Words are whitespace-delimited tokens. Each token is weighed under the
//! active [`CountingPolicy`]; the space that joins two words never adds
//! weight. A token is appended to the current line while the running weight
//! stays within the budget. Otherwise the line is flushed and the token
//! starts the next one, after being cut into budget-sized fragments if it
//! is heavier than the budget on its own.

use std::mem;

use super::classifier::CountingPolicy;
use super::document::{Document, Line};
use super::normalizer::{normalize_sentences, PARAGRAPH_BREAK};
use crate::error::{Error, Result};

/// Default number of counted characters per line
pub const DEFAULT_LINE_BUDGET: usize = 18;

/// Line packer bound to a budget and a counting policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflowEngine {
    pub(crate) line_budget: usize,
    pub(crate) policy: CountingPolicy,
}

impl ReflowEngine {
    /// Create an engine; a zero budget is rejected.
    pub fn new(line_budget: usize, policy: CountingPolicy) -> Result<Self> {
        if line_budget == 0 {
            return Err(Error::InvalidConfiguration(
                "line_budget must be greater than 0".into(),
            ));
        }
        Ok(Self {
            line_budget,
            policy,
        })
    }

    pub fn line_budget(&self) -> usize {
        self.line_budget
    }

    pub fn policy(&self) -> CountingPolicy {
        self.policy
    }

    /// Reflow `text`, optionally normalizing sentence boundaries first.
    pub fn reflow(&self, text: &str, normalize: bool) -> Document {
        if text.trim().is_empty() {
            return Document::new();
        }

        log::debug!(
            "reflow: budget={} policy={} normalize={}",
            self.line_budget,
            self.policy,
            normalize
        );

        if normalize {
            self.pack_paragraphs(&normalize_sentences(text))
        } else {
            let mut document = Document::new();
            document.extend(self.pack(text));
            document
        }
    }

    /// Pack every whitespace-delimited token of `text` into lines.
    ///
    /// All whitespace, line feeds included, only separates words here.
    pub fn pack(&self, text: &str) -> Vec<Line> {
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_weight = 0;

        for token in text.split_whitespace() {
            let token_weight = self.policy.count(token);
            let tentative = if current.is_empty() {
                token_weight
            } else {
                current_weight + token_weight
            };

            if tentative <= self.line_budget {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(token);
                current_weight = tentative;
                continue;
            }

            if !current.is_empty() {
                lines.push(Line::with_weight(mem::take(&mut current), current_weight));
            }

            if token_weight > self.line_budget {
                let mut fragments = self.split_long_word(token);
                log::trace!(
                    "forced split of {token_weight}-weight token into {} fragments",
                    fragments.len()
                );
                match fragments.pop() {
                    Some(last) => {
                        lines.extend(fragments);
                        current_weight = last.weight();
                        current = last.to_string();
                    }
                    None => {
                        current = token.to_string();
                        current_weight = token_weight;
                    }
                }
            } else {
                current = token.to_string();
                current_weight = token_weight;
            }
        }

        if !current.is_empty() {
            lines.push(Line::with_weight(current, current_weight));
        }

        lines
    }

    /// Pack each paragraph of already normalized text on its own and join
    /// the results with blank lines.
    ///
    /// Paragraphs are separated by [`PARAGRAPH_BREAK`]. Paragraphs without
    /// any word produce nothing, and no blank line trails the document.
    pub fn pack_paragraphs(&self, text: &str) -> Document {
        let mut document = Document::new();
        for paragraph in text.split(PARAGRAPH_BREAK) {
            let lines = self.pack(paragraph);
            if lines.is_empty() {
                continue;
            }
            if !document.is_empty() {
                document.push(Line::blank());
            }
            document.extend(lines);
        }
        document
    }

    /// Cut a word into fragments whose weight never exceeds the budget.
    ///
    /// Zero-weight characters ride along in whichever fragment is open; only
    /// a counted character can close a fragment. The last fragment may be
    /// lighter than the budget. An empty word yields no fragments.
    pub fn split_long_word(&self, word: &str) -> Vec<Line> {
        let mut fragments = Vec::new();
        let mut part = String::new();
        let mut part_weight = 0;

        for ch in word.chars() {
            let weight = self.policy.weight(ch);
            if part_weight + weight > self.line_budget && !part.is_empty() {
                fragments.push(Line::with_weight(mem::take(&mut part), part_weight));
                part_weight = 0;
            }
            part.push(ch);
            part_weight += weight;
        }

        if !part.is_empty() {
            fragments.push(Line::with_weight(part, part_weight));
        }

        fragments
    }
}

/// Reflow `text` into a [`Document`].
///
/// Whitespace-only text yields an empty document. With `normalize` the text
/// first goes through sentence normalization and paragraph breaks survive as
/// blank lines; without it every whitespace run only separates words.
pub fn reflow_document(
    text: &str,
    line_budget: usize,
    policy: CountingPolicy,
    normalize: bool,
) -> Result<Document> {
    Ok(ReflowEngine::new(line_budget, policy)?.reflow(text, normalize))
}

/// Reflow `text` and join the lines with `\n`.
pub fn reflow(
    text: &str,
    line_budget: usize,
    policy: CountingPolicy,
    normalize: bool,
) -> Result<String> {
    reflow_document(text, line_budget, policy, normalize).map(|document| document.join())
}

/// Split text into lines under `policy` without normalization.
pub fn split_by_policy(
    text: &str,
    line_budget: usize,
    policy: CountingPolicy,
) -> Result<Vec<String>> {
    reflow_document(text, line_budget, policy, false).map(Document::into_texts)
}

/// Korean-only reflow without sentence normalization, kept for callers of
/// the first release.
pub fn format_text(text: &str, line_budget: usize) -> Result<String> {
    reflow(text, line_budget, CountingPolicy::KoreanOnly, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(budget: usize, policy: CountingPolicy) -> ReflowEngine {
        ReflowEngine::new(budget, policy).unwrap()
    }

    fn texts(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(Line::text).collect()
    }

    #[test]
    fn test_zero_budget_is_rejected() {
        let result = ReflowEngine::new(0, CountingPolicy::KoreanOnly);
        assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
        assert!(reflow("가", 0, CountingPolicy::AllCharsSimple, false).is_err());
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert_eq!(reflow("", 18, CountingPolicy::AllCharsSimple, false).unwrap(), "");
        assert_eq!(reflow(" \n\t", 18, CountingPolicy::KoreanOnly, true).unwrap(), "");
        assert!(reflow_document("   ", 5, CountingPolicy::KoreanOnly, false)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_overflowing_word_forces_split_after_flush() {
        let lines = engine(5, CountingPolicy::KoreanOnly).pack("안녕하세요 저는 개발자입니다");
        assert_eq!(texts(&lines), vec!["안녕하세요", "저는", "개발자입니", "다"]);
        let weights: Vec<_> = lines.iter().map(Line::weight).collect();
        assert_eq!(weights, vec![5, 2, 5, 1]);
    }

    #[test]
    fn test_words_fill_line_up_to_budget() {
        let lines = engine(5, CountingPolicy::KoreanOnly).pack("저는 개발자 입니다");
        assert_eq!(texts(&lines), vec!["저는 개발자", "입니다"]);
    }

    #[test]
    fn test_forced_split_of_single_long_word() {
        let lines = engine(5, CountingPolicy::KoreanOnly).pack("가나다라마바사아자차카");
        assert_eq!(texts(&lines), vec!["가나다라마", "바사아자차", "카"]);
    }

    #[test]
    fn test_last_fragment_seeds_next_line() {
        let lines = engine(5, CountingPolicy::KoreanOnly).pack("가나다라마바 사아");
        assert_eq!(texts(&lines), vec!["가나다라마", "바 사아"]);
    }

    #[test]
    fn test_exact_length_word_is_not_split() {
        let lines = engine(5, CountingPolicy::KoreanOnly).pack("안녕하세요");
        assert_eq!(texts(&lines), vec!["안녕하세요"]);
    }

    #[test]
    fn test_zero_weight_characters_ride_along() {
        // Latin letters weigh nothing under the Korean-only policy
        let lines = engine(2, CountingPolicy::KoreanOnly).pack("가abc나다");
        assert_eq!(texts(&lines), vec!["가abc나", "다"]);

        let lines = engine(3, CountingPolicy::KoreanOnly).pack("Hello World 가나다 라");
        assert_eq!(texts(&lines), vec!["Hello World 가나다", "라"]);
    }

    #[test]
    fn test_split_long_word_edge_cases() {
        let engine = engine(3, CountingPolicy::AllCharsSimple);
        assert!(engine.split_long_word("").is_empty());

        let fragments = engine.split_long_word("abcdefg");
        assert_eq!(texts(&fragments), vec!["abc", "def", "g"]);
    }

    #[test]
    fn test_newlines_are_word_separators_without_normalization() {
        let document = reflow_document("가나\n\n다라\n마", 18, CountingPolicy::KoreanOnly, false)
            .unwrap();
        assert_eq!(document.join(), "가나 다라 마");
    }

    #[test]
    fn test_normalized_reflow_keeps_paragraph_breaks() {
        let result = reflow(
            "안녕하세요. 저는 개발자입니다.",
            18,
            CountingPolicy::KoreanOnly,
            true,
        )
        .unwrap();
        assert_eq!(result, "안녕하세요.\n\n저는 개발자입니다.");
    }

    #[test]
    fn test_normalized_reflow_wraps_within_paragraphs() {
        let result = reflow(
            "가나다 라마바 사아. 자차카",
            5,
            CountingPolicy::KoreanOnly,
            true,
        )
        .unwrap();
        assert_eq!(result, "가나다\n라마바 사아.\n\n자차카");
    }

    #[test]
    fn test_pack_paragraphs_skips_empty_segments() {
        let document = engine(10, CountingPolicy::KoreanOnly).pack_paragraphs("가.\n\n\n\n나.");
        assert_eq!(document.join(), "가.\n\n나.");
    }

    #[test]
    fn test_all_chars_policy_counts_punctuation() {
        let lines = engine(4, CountingPolicy::AllCharsSimple).pack("ab, cd!");
        assert_eq!(texts(&lines), vec!["ab,", "cd!"]);

        let lines = engine(4, CountingPolicy::AllCharsExcludingPeriod).pack("ab, cd!");
        assert_eq!(texts(&lines), vec!["ab, cd!"]);
    }

    #[test]
    fn test_split_by_policy_and_legacy_entry() {
        let lines = split_by_policy("안녕하세요 저는", 5, CountingPolicy::KoreanOnly).unwrap();
        assert_eq!(lines, vec!["안녕하세요", "저는"]);

        assert_eq!(format_text("안녕하세요", 10).unwrap(), "안녕하세요");
        assert_eq!(format_text("", DEFAULT_LINE_BUDGET).unwrap(), "");
    }
}
