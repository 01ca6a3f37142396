use serde_json::{json, Value};
use crate::math_engine::models::{GradeResult, Question};

/// Format with comma thousands separators: `1234567` → `"1,234,567"`.
pub fn format_with_separators(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Prompt line shown above the options.
fn prompt(question: &Question) -> String {
    format!(
        "Round {} to the nearest {}",
        format_with_separators(question.number),
        format_with_separators(question.round_target.value()),
    )
}

/// One option entry: raw value for submitting, formatted text for display.
fn option_entry(index: usize, value: u64) -> Value {
    json!({ "index": index, "value": value, "text": format_with_separators(value) })
}

/// Map a [`Question`] to the JSON the presentation layer renders.
///
/// The correct answer and distractor patterns are left out so the client
/// cannot read the answer off the payload.
pub fn to_client_question(question: &Question) -> Value {
    let options: Vec<Value> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, &v)| option_entry(i, v))
        .collect();

    json!({
        "question_id": question.question_id,
        "difficulty":  question.difficulty.get(),
        "prompt":      prompt(question),
        "number":      question.number,
        "round_target": question.round_target.value(),
        "place_name":  question.round_target.place_name(),
        "options":     options,
    })
}

/// Map a [`GradeResult`] to the feedback payload shown after an answer.
pub fn to_client_grade(result: &GradeResult) -> Value {
    let explanation = match result.mistake {
        Some(pattern) => pattern.explanation(),
        None if result.is_correct => "Correct! Royal rounding!",
        None => "",
    };

    json!({
        "is_correct":     result.is_correct,
        "selected":       result.selected,
        "correct_answer": result.correct_answer,
        "correct_text":   format_with_separators(result.correct_answer),
        "points_awarded": result.points_awarded,
        "mistake":        result.mistake.map(|m| m.to_string()),
        "explanation":    explanation,
    })
}
