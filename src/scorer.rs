use crate::text::ReferenceText;

/// Characters per "word" when converting typed characters to words per minute
pub const CHARS_PER_WORD: f64 = 5.0;

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum Classification {
    Correct,
    Wrong,
    Untyped,
}

/// Snapshot of how an input string scores against the reference text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    /// One entry per position, covering the longer of reference and input.
    pub classifications: Vec<Classification>,
    pub correct_count: usize,
    pub error_count: usize,
    pub total_typed: usize,
    pub words_per_minute: u32,
    pub accuracy_percent: u32,
    pub is_complete: bool,
}

impl EvaluationResult {
    /// Result for a session nothing has been typed into yet
    pub fn untouched(reference: &ReferenceText) -> Self {
        Self {
            classifications: vec![Classification::Untyped; reference.len()],
            correct_count: 0,
            error_count: 0,
            total_typed: 0,
            words_per_minute: 0,
            accuracy_percent: 100,
            is_complete: false,
        }
    }
}

pub fn evaluate(reference: &ReferenceText, input: &str, elapsed_secs: f64) -> EvaluationResult {
    let typed: Vec<char> = input.chars().collect();
    let expected = reference.chars();

    let mut classifications = typed
        .iter()
        .enumerate()
        .map(|(idx, c)| match expected.get(idx) {
            Some(e) if e == c => Classification::Correct,
            _ => Classification::Wrong,
        })
        .collect::<Vec<_>>();

    if typed.len() < expected.len() {
        classifications.resize(expected.len(), Classification::Untyped);
    }

    let total_typed = typed.len();
    let correct_count = classifications
        .iter()
        .filter(|c| **c == Classification::Correct)
        .count();
    let error_count = total_typed - correct_count;

    EvaluationResult {
        classifications,
        correct_count,
        error_count,
        total_typed,
        words_per_minute: calculate_wpm(total_typed, elapsed_secs),
        accuracy_percent: calculate_accuracy(correct_count, total_typed),
        is_complete: typed.as_slice() == expected,
    }
}

pub fn calculate_wpm(chars_typed: usize, elapsed_secs: f64) -> u32 {
    if elapsed_secs.is_nan() || elapsed_secs <= 0.0 {
        return 0;
    }
    let words = chars_typed as f64 / CHARS_PER_WORD;
    let minutes = elapsed_secs / 60.0;
    (words / minutes).round() as u32
}

pub fn calculate_accuracy(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    ((correct as f64 / total as f64) * 100.0).round() as u32
}
