//! Formatting utilities for terminal output

/// Circled digits for letter counts 1 through 20
const CIRCLED: [char; 20] = [
    '①', '②', '③', '④', '⑤', '⑥', '⑦', '⑧', '⑨', '⑩', '⑪', '⑫', '⑬', '⑭', '⑮', '⑯', '⑰', '⑱',
    '⑲', '⑳',
];

/// Badge showing how many letters a word has
///
/// Circled digit up to 20, parenthesized number beyond.
#[must_use]
pub fn letter_badge(word: &str) -> String {
    let count = word.chars().count();
    match count {
        1..=20 => CIRCLED[count - 1].to_string(),
        _ => format!("({count})"),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar of the score reached against the best attainable score
#[must_use]
pub fn score_bar(score: usize, max_score: usize, width: usize) -> String {
    create_progress_bar(score as f64, max_score as f64, width)
}
