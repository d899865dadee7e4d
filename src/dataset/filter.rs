//! Equality filtering over the participant collection
//!
//! A filter narrows the collection by up to three optional equality
//! predicates. `None` means "All" (no constraint). Filtering borrows
//! records and preserves their relative order.

use crate::core::types::Participant;

/// The "All" sentinel used by CLI flags and config values.
pub const ALL: &str = "All";

/// Up to three optional equality predicates over a participant collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    /// Match this exact event, or no constraint
    pub event: Option<String>,
    /// Match this exact college, or no constraint
    pub college: Option<String>,
    /// Match this exact state, or no constraint
    pub state: Option<String>,
}

impl FilterSet {
    /// Create a filter from CLI-shaped values where "All" (case-insensitive)
    /// or absence means no constraint.
    pub fn from_selections(
        event: Option<&str>,
        college: Option<&str>,
        state: Option<&str>,
    ) -> Self {
        Self {
            event: normalize(event),
            college: normalize(college),
            state: normalize(state),
        }
    }

    /// True if no predicate is set, i.e. the filter is the identity.
    pub fn is_empty(&self) -> bool {
        self.event.is_none() && self.college.is_none() && self.state.is_none()
    }

    /// Apply the filter, preserving relative order.
    ///
    /// An empty result is a valid state; downstream aggregates handle it.
    pub fn apply<'a>(&self, records: &'a [Participant]) -> Vec<&'a Participant> {
        records
            .iter()
            .filter(|r| self.matches(r))
            .collect()
    }

    fn matches(&self, record: &Participant) -> bool {
        self.event.as_deref().is_none_or(|e| record.event == e)
            && self.college.as_deref().is_none_or(|c| record.college == c)
            && self.state.as_deref().is_none_or(|s| record.state == s)
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    match value {
        None => None,
        Some(v) if v.trim().is_empty() || v.trim().eq_ignore_ascii_case(ALL) => None,
        Some(v) => Some(v.trim().to_string()),
    }
}
