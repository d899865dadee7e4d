//! Dataset synthesis, filtering, and aggregation
//!
//! This module holds the data pipeline: generate the fixed-size participant
//! collection, narrow it with optional equality filters, and compute the
//! frequency aggregates the dashboard renders.

pub mod aggregate;
pub mod filter;
pub mod generator;

// Re-export commonly used items
pub use aggregate::{Crosstab, event_feedback_crosstab};
pub use filter::FilterSet;
pub use generator::generate;
