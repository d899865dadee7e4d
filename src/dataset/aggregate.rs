//! Frequency aggregates over filtered participant views
//!
//! Everything here is a pure function from a borrowed record slice to a
//! count structure. All aggregates degrade to empty/zero outputs when the
//! filtered view is empty.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::core::constants::dataset::{EVENTS, FEEDBACK_PHRASES, MAX_DAY, MIN_DAY};
use crate::core::types::Participant;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9']+").unwrap());

/// Count of records per distinct event, descending by count.
/// Ties break on the value so output order is deterministic.
pub fn count_by_event(records: &[&Participant]) -> Vec<(String, usize)> {
    count_by(records, |r| r.event.as_str())
}

/// Count of records per distinct college, descending by count.
pub fn count_by_college(records: &[&Participant]) -> Vec<(String, usize)> {
    count_by(records, |r| r.college.as_str())
}

/// Count of records per distinct state, descending by count.
pub fn count_by_state(records: &[&Participant]) -> Vec<(String, usize)> {
    count_by(records, |r| r.state.as_str())
}

/// Count of records per festival day, in day order and zero-filled so every
/// day appears even when no record landed on it.
pub fn count_by_day(records: &[&Participant]) -> Vec<(u8, usize)> {
    let mut counts: FxHashMap<u8, usize> = FxHashMap::default();
    for record in records {
        *counts.entry(record.day).or_insert(0) += 1;
    }
    (MIN_DAY..=MAX_DAY)
        .map(|day| (day, counts.get(&day).copied().unwrap_or(0)))
        .collect()
}

/// All feedback strings in the view, space-joined, as word-cloud input.
pub fn feedback_text(records: &[&Participant]) -> String {
    records
        .iter()
        .map(|r| r.feedback.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Case-folded word counts over the joined feedback text, descending.
pub fn word_frequencies(text: &str) -> Vec<(String, usize)> {
    let mut counts: FxHashMap<String, usize> = FxHashMap::default();
    for word in WORD_RE.find_iter(text) {
        *counts.entry(word.as_str().to_lowercase()).or_insert(0) += 1;
    }
    sorted_desc(counts)
}

/// Two-dimensional count table of event x feedback.
///
/// Always computed over the full unfiltered collection: the feedback
/// comparison chart shows every event's feedback mix no matter which
/// filters are active, so its cell total is always the dataset size.
#[derive(Debug, Clone, Serialize)]
pub struct Crosstab {
    /// Row labels, in vocabulary order
    pub events: Vec<String>,
    /// Column labels, in vocabulary order
    pub feedbacks: Vec<String>,
    /// counts[row][col] = records with that event and feedback
    pub counts: Vec<Vec<usize>>,
}

impl Crosstab {
    /// Sum over every cell.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|row| row.iter().sum::<usize>()).sum()
    }

    /// Look up a single cell by labels.
    pub fn get(&self, event: &str, feedback: &str) -> Option<usize> {
        let row = self.events.iter().position(|e| e == event)?;
        let col = self.feedbacks.iter().position(|f| f == feedback)?;
        Some(self.counts[row][col])
    }
}

/// Build the event x feedback crosstab over the full collection.
pub fn event_feedback_crosstab(full_collection: &[Participant]) -> Crosstab {
    let events: Vec<String> = EVENTS.iter().map(|e| e.to_string()).collect();
    let feedbacks: Vec<String> = FEEDBACK_PHRASES.iter().map(|f| f.to_string()).collect();

    let col_index: FxHashMap<&str, usize> = FEEDBACK_PHRASES
        .iter()
        .enumerate()
        .map(|(i, f)| (*f, i))
        .collect();
    let row_index: FxHashMap<&str, usize> =
        EVENTS.iter().enumerate().map(|(i, e)| (*e, i)).collect();

    let mut counts = vec![vec![0usize; feedbacks.len()]; events.len()];
    for record in full_collection {
        if let (Some(&row), Some(&col)) = (
            row_index.get(record.event.as_str()),
            col_index.get(record.feedback.as_str()),
        ) {
            counts[row][col] += 1;
        }
    }

    Crosstab {
        events,
        feedbacks,
        counts,
    }
}

fn count_by<'a, F>(records: &[&'a Participant], key: F) -> Vec<(String, usize)>
where
    F: Fn(&'a Participant) -> &'a str,
{
    let mut counts: FxHashMap<String, usize> = FxHashMap::default();
    for record in records {
        *counts.entry(key(record).to_string()).or_insert(0) += 1;
    }
    sorted_desc(counts)
}

fn sorted_desc(counts: FxHashMap<String, usize>) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}
