//! Sentence-boundary normalization
//!
//! Rewrites pasted text so that every sentence ending in a period becomes its
//! own paragraph. The passes run in a fixed order:
//!
//! 1. delete zero-width marks
//! 2. fold line feeds that precede an upcoming period into a space
//! 3. collapse whitespace runs into one space
//! 4. turn `.` + whitespace into `.` + paragraph break
//! 5. insert a paragraph break between `.` and a directly following glyph
//! 6. drop indentation that follows a paragraph break
//!
//! The result is trimmed at both ends so no paragraph break trails the text.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use super::classifier::is_zero_width_mark;

/// Marker separating paragraphs in normalized text
pub const PARAGRAPH_BREAK: &str = "\n\n";

fn cached(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("normalizer patterns are valid"))
}

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    cached(&RE, r"\s+")
}

fn period_then_whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    cached(&RE, r"\.\s+")
}

fn period_then_glyph() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    cached(&RE, r"\.([^\s.])")
}

fn indent_after_break() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    cached(&RE, r"\n\n[^\S\n]+")
}

/// Normalize sentence boundaries into paragraph breaks.
///
/// Text without any period only has its whitespace collapsed.
pub fn normalize_sentences(text: &str) -> String {
    let stripped = strip_zero_width(text);
    let folded = fold_wrapped_newlines(&stripped);
    let collapsed = whitespace_run().replace_all(&folded, " ");
    let separated = period_then_whitespace().replace_all(&collapsed, ".\n\n");
    let separated = period_then_glyph().replace_all(&separated, ".\n\n${1}");
    let cleaned = indent_after_break().replace_all(&separated, PARAGRAPH_BREAK);

    log::trace!(
        "normalized {} chars into {} paragraphs",
        text.chars().count(),
        cleaned.trim().split(PARAGRAPH_BREAK).count()
    );

    cleaned.trim().to_string()
}

/// Delete zero-width marks without replacing them.
pub fn strip_zero_width(text: &str) -> Cow<'_, str> {
    if text.chars().any(is_zero_width_mark) {
        Cow::Owned(text.chars().filter(|&ch| !is_zero_width_mark(ch)).collect())
    } else {
        Cow::Borrowed(text)
    }
}

/// Replace each run of line feeds that still has a period somewhere after it
/// with a single space.
///
/// A run qualifies when the nearest following period is reachable without
/// crossing another period, which holds for every run before the last period
/// in the text. Runs after the last period are kept.
pub fn fold_wrapped_newlines(text: &str) -> Cow<'_, str> {
    let Some(last_period) = text.rfind('.') else {
        return Cow::Borrowed(text);
    };
    if !text[..last_period].contains('\n') {
        return Cow::Borrowed(text);
    }

    let mut folded = String::with_capacity(text.len());
    let mut in_run = false;
    for (offset, ch) in text.char_indices() {
        if ch == '\n' && offset < last_period {
            if !in_run {
                folded.push(' ');
                in_run = true;
            }
        } else {
            in_run = false;
            folded.push(ch);
        }
    }
    Cow::Owned(folded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_sentences_become_two_paragraphs() {
        let normalized = normalize_sentences("안녕하세요. 저는 개발자입니다.");
        assert_eq!(normalized, "안녕하세요.\n\n저는 개발자입니다.");
        assert_eq!(normalized.matches(PARAGRAPH_BREAK).count(), 1);
        assert!(normalized.ends_with('.'));
    }

    #[test]
    fn test_missing_space_after_period() {
        assert_eq!(
            normalize_sentences("첫 문장.둘째 문장."),
            "첫 문장.\n\n둘째 문장."
        );
    }

    #[test]
    fn test_wrapped_lines_fold_into_sentence() {
        assert_eq!(
            normalize_sentences("오늘은\n날씨가\n\n좋습니다. 내일은\n비가 옵니다."),
            "오늘은 날씨가 좋습니다.\n\n내일은 비가 옵니다."
        );
    }

    #[test]
    fn test_text_without_period_only_collapses_whitespace() {
        assert_eq!(normalize_sentences("가  나\n\n다\t라"), "가 나 다 라");
    }

    #[test]
    fn test_zero_width_marks_are_deleted() {
        assert_eq!(
            normalize_sentences("\u{FEFF}안\u{200B}녕\u{200D}하세요.\u{2060}반가워요."),
            "안녕하세요.\n\n반가워요."
        );
    }

    #[test]
    fn test_trailing_whitespace_leaves_no_break() {
        assert_eq!(normalize_sentences("  끝입니다.  \n"), "끝입니다.");
    }

    #[test]
    fn test_ellipsis_breaks_only_after_last_period() {
        assert_eq!(normalize_sentences("음... 그렇군요"), "음...\n\n그렇군요");
    }

    #[test]
    fn test_period_inside_number_is_split() {
        // Any period directly followed by a glyph is treated as a sentence end
        assert_eq!(normalize_sentences("3.14"), "3.\n\n14");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_sentences(""), "");
        assert_eq!(normalize_sentences(" \n\t "), "");
    }

    #[test]
    fn test_fold_keeps_newlines_after_last_period() {
        assert_eq!(fold_wrapped_newlines("가\n\n나.\n다\n"), "가 나.\n다\n");
        assert!(matches!(fold_wrapped_newlines("가\n나"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_strip_zero_width_borrows_clean_text() {
        assert!(matches!(strip_zero_width("깨끗한 문장"), Cow::Borrowed(_)));
        assert_eq!(strip_zero_width("a\u{200C}b"), "ab");
        // No-break space is not a zero-width mark
        assert_eq!(strip_zero_width("a\u{00A0}b"), "a\u{00A0}b");
    }
}
