use lectern::application::services::model_output::{
    ModelOutputError, extract_json, parse_list, parse_text, preview, strip_code_fence,
};
use lectern::domain::{Flashcard, QuizItem};

use crate::helpers::{FLASHCARDS_JSON, QUIZ_JSON, fenced};

#[test]
fn given_json_fence_when_stripping_then_returns_inner_payload() {
    assert_eq!(strip_code_fence("```json\n[1, 2]\n```"), "[1, 2]");
}

#[test]
fn given_bare_fence_without_info_string_when_stripping_then_returns_inner_payload() {
    assert_eq!(strip_code_fence("  ```\n[1]\n```  \n"), "[1]");
}

#[test]
fn given_single_line_fence_when_stripping_then_returns_inner_payload() {
    assert_eq!(strip_code_fence("```json[1]```"), "[1]");
}

#[test]
fn given_unfenced_text_when_stripping_then_only_trims() {
    assert_eq!(strip_code_fence("\n [1] \n"), "[1]");
}

#[test]
fn given_fenced_text_when_stripping_twice_then_result_is_unchanged() {
    let once = strip_code_fence("```json\n[{\"a\": 1}]\n```");

    assert_eq!(strip_code_fence(once), once);
}

#[test]
fn given_fenced_and_unfenced_flashcards_when_parsing_then_results_are_identical() {
    let plain: Vec<Flashcard> = parse_list(FLASHCARDS_JSON).unwrap();
    let wrapped: Vec<Flashcard> = parse_list(&fenced(FLASHCARDS_JSON)).unwrap();

    assert_eq!(plain, wrapped);
    assert_eq!(plain.len(), 2);
    assert_eq!(plain[1].front, "F = ma");
}

#[test]
fn given_fence_without_closing_marker_when_parsing_then_still_parses() {
    let raw = format!("```json\n{}", QUIZ_JSON);

    let items: Vec<QuizItem> = parse_list(&raw).unwrap();

    assert_eq!(items.len(), 1);
}

#[test]
fn given_json_surrounded_by_prose_when_extracting_then_returns_embedded_array() {
    let raw = format!(
        "Here are your flashcards [as requested]:\n{}\nGood luck!",
        FLASHCARDS_JSON
    );

    let cards: Vec<Flashcard> = parse_list(&raw).unwrap();

    assert_eq!(cards.len(), 2);
}

#[test]
fn given_plain_prose_when_extracting_then_returns_no_json() {
    let result = extract_json("Sorry, I could not hear the recording clearly.");

    assert_eq!(result, Err(ModelOutputError::NoJson));
}

#[test]
fn given_truncated_json_when_parsing_then_returns_error_not_partial_list() {
    let raw = r#"[{"front": "a", "back": "b"}, {"front": "c""#;

    let result = parse_list::<Flashcard>(raw);

    assert!(result.is_err());
}

#[test]
fn given_wrong_shape_when_parsing_flashcards_then_returns_shape_error() {
    let result = parse_list::<Flashcard>(r#"[{"question": "q"}]"#);

    assert!(matches!(result, Err(ModelOutputError::Shape(_))));
}

#[test]
fn given_empty_array_when_parsing_then_returns_empty_error() {
    let result = parse_list::<Flashcard>("```json\n[]\n```");

    assert_eq!(result, Err(ModelOutputError::Empty));
}

#[test]
fn given_blank_notes_when_parsing_text_then_returns_empty_error() {
    assert_eq!(parse_text(" \n\t"), Err(ModelOutputError::Empty));
    assert_eq!(parse_text("\n# Notes\n").unwrap(), "# Notes");
}

#[test]
fn given_long_output_when_previewing_then_truncates_and_reports_length() {
    let raw = "x".repeat(500);

    let shown = preview(&raw);

    assert!(shown.starts_with(&"x".repeat(200)));
    assert!(shown.ends_with("(500 chars total)"));
}

#[test]
fn given_multiline_output_when_previewing_then_collapses_whitespace() {
    assert_eq!(preview("a\n\n  b\tc"), "a b c");
    assert_eq!(preview("   "), "[EMPTY]");
}
