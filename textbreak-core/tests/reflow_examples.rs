//! End-to-end reflow behavior on concrete Korean samples

use textbreak_core::{
    count_weighted, format_text, normalize_sentences, reflow, reflow_document, split_by_policy,
    Config, CountingPolicy, Error, Reflower, DEFAULT_LINE_BUDGET,
};

fn korean_weight(line: &str) -> usize {
    line.chars()
        .filter(|ch| ('\u{AC00}'..='\u{D7A3}').contains(ch))
        .count()
}

#[test]
fn test_korean_only_boundaries() {
    assert_eq!(count_weighted("가", CountingPolicy::KoreanOnly), 1);
    assert_eq!(count_weighted("a", CountingPolicy::KoreanOnly), 0);
    assert_eq!(count_weighted("힣", CountingPolicy::KoreanOnly), 1);
    assert_eq!(count_weighted("\u{D7A4}", CountingPolicy::KoreanOnly), 0);
}

#[test]
fn test_basic_wrap_stays_within_budget() {
    let lines = split_by_policy("안녕하세요 저는 개발자입니다", 5, CountingPolicy::KoreanOnly)
        .unwrap();
    assert_eq!(lines, vec!["안녕하세요", "저는", "개발자입니", "다"]);
    assert!(lines.iter().all(|line| korean_weight(line) <= 5));
}

#[test]
fn test_forced_split() {
    let result = reflow("가나다라마바사아자차카", 5, CountingPolicy::KoreanOnly, false).unwrap();
    assert_eq!(result, "가나다라마\n바사아자차\n카");
}

#[test]
fn test_sentence_normalization_example() {
    let normalized = normalize_sentences("안녕하세요. 저는 개발자입니다.");
    assert_eq!(normalized.matches("\n\n").count(), 1);
    assert!(normalized.ends_with("입니다."));
}

#[test]
fn test_empty_input_reflows_to_empty_string() {
    assert_eq!(
        reflow("", 18, CountingPolicy::AllCharsSimple, false).unwrap(),
        ""
    );
}

#[test]
fn test_all_chars_exclusion_sets() {
    assert_eq!(
        count_weighted("a,b.c!", CountingPolicy::AllCharsIncludingPeriod),
        4
    );
    assert_eq!(
        count_weighted("a,b.c!", CountingPolicy::AllCharsExcludingPeriod),
        3
    );
}

#[test]
fn test_default_budget_long_paragraph() {
    let text = "안녕하세요 저는 텍스트 가다듬기 프로그램을 개발하고 있는 개발자입니다";
    let result = format_text(text, DEFAULT_LINE_BUDGET).unwrap();
    for line in result.lines() {
        assert!(korean_weight(line) <= DEFAULT_LINE_BUDGET, "{line}");
    }
    assert_eq!(
        result,
        "안녕하세요 저는 텍스트 가다듬기\n프로그램을 개발하고 있는 개발자입니다"
    );
}

#[test]
fn test_punctuation_does_not_count_under_korean_only() {
    let text = "안녕하세요. 저는 텍스트 가다듬기 프로그램을 개발하고 있는 개발자입니다. \
                이 프로그램은 한글 문자 수를 기준으로 텍스트를 분할합니다.";
    let lines = split_by_policy(text, 10, CountingPolicy::KoreanOnly).unwrap();
    assert!(lines.len() > 1);
    assert!(lines.iter().all(|line| korean_weight(line) <= 10));
}

#[test]
fn test_multi_sentence_document_with_paragraphs() {
    let text = "오늘은 날씨가\n맑습니다. 산책을 나가기로\n했습니다.점심은 김밥입니다.";
    let document = reflow_document(text, 8, CountingPolicy::KoreanOnly, true).unwrap();

    assert_eq!(
        document.join(),
        "오늘은 날씨가\n맑습니다.\n\n산책을 나가기로\n했습니다.\n\n점심은 김밥입니다."
    );
    assert_eq!(document.paragraph_count(), 3);
    assert!(document.max_weight() <= 8);
    assert!(!document.lines().last().unwrap().is_blank());
}

#[test]
fn test_processor_rejects_zero_budget_without_side_effects() {
    let result = Config::builder().line_budget(0).build();
    assert!(matches!(result, Err(Error::InvalidConfiguration(_))));

    // A valid processor built afterwards is unaffected
    let output = Reflower::legacy().process_text("가나다");
    assert_eq!(output.text(), "가나다");
}
