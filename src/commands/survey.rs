//! Survey all root words
//!
//! Reveals every root word in a list and summarizes how rich each one is.

use super::reveal::reveal_words;
use crate::dictionary::{Dictionary, Locale};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// How much a single root word offers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSummary {
    pub root_word: String,
    pub attainable: usize,
    pub max_score: usize,
    pub longest: Option<String>,
}

/// Statistics across every surveyed root word
#[derive(Debug)]
pub struct SurveyStatistics {
    pub total_roots: usize,
    pub average_attainable: f64,
    pub average_max_score: f64,
    pub richest: Option<RootSummary>,
    pub poorest: Vec<RootSummary>,
    pub total_time: Duration,
}

/// Number of weakest roots reported
const POOREST_COUNT: usize = 5;

/// Survey root words (or the first `limit` of them)
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_survey(
    roots: &[String],
    dictionary: &Dictionary,
    locale: &Locale,
    limit: Option<usize>,
) -> SurveyStatistics {
    let roots: Vec<&String> = roots.iter().take(limit.unwrap_or(roots.len())).collect();

    let pb = ProgressBar::new(roots.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut summaries: Vec<RootSummary> = Vec::with_capacity(roots.len());

    for root in roots {
        let reveal = reveal_words(root, dictionary, locale);
        pb.set_message(format!("{} ({} words)", reveal.root_word, reveal.words.len()));
        summaries.push(RootSummary {
            longest: reveal.longest().map(str::to_string),
            root_word: reveal.root_word,
            attainable: reveal.words.len(),
            max_score: reveal.max_score,
        });
        pb.inc(1);
    }

    pb.finish_and_clear();
    let total_time = start.elapsed();

    tracing::info!("Surveyed {} root words in {:.2?}", summaries.len(), total_time);
    summarize(summaries, total_time)
}

fn summarize(mut summaries: Vec<RootSummary>, total_time: Duration) -> SurveyStatistics {
    let total_roots = summaries.len();
    let (average_attainable, average_max_score) = if total_roots == 0 {
        (0.0, 0.0)
    } else {
        let attainable: usize = summaries.iter().map(|s| s.attainable).sum();
        let score: usize = summaries.iter().map(|s| s.max_score).sum();
        (
            attainable as f64 / total_roots as f64,
            score as f64 / total_roots as f64,
        )
    };

    // Richest first; ties broken alphabetically so output is stable
    summaries.sort_by(|a, b| {
        b.max_score
            .cmp(&a.max_score)
            .then_with(|| a.root_word.cmp(&b.root_word))
    });

    let richest = summaries.first().cloned();
    // The richest root is never listed among the poorest
    let poorest = summaries
        .iter()
        .skip(1)
        .rev()
        .take(POOREST_COUNT)
        .cloned()
        .collect();

    SurveyStatistics {
        total_roots,
        average_attainable,
        average_max_score,
        richest,
        poorest,
        total_time,
    }
}
