//! festdash - festival participation analysis in your terminal
//!
//! Synthesizes the INBLOOM '25 participant dataset, filters and aggregates
//! it into count tables and feedback statistics, renders a day-indexed
//! photo gallery, and can write an HTML dashboard or process event photos.

pub mod config;
pub mod core;
pub mod dataset;
pub mod gallery;
pub mod imaging;
pub mod reporting;
pub mod ui;

// Re-export commonly used items at the crate root
pub use config::{CliConfig, Config};
pub use core::error::{FestDashError, Result};
pub use core::types::Participant;
pub use dataset::{FilterSet, generate};
pub use reporting::{DashboardData, HtmlDashboard};
