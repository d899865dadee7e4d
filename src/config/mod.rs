//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::constants::{dataset, output_formats};
use crate::core::error::{FestDashError, Result};
use crate::dataset::filter::{self, FilterSet};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Seed for deterministic dataset generation
    pub seed: Option<u64>,

    /// Event filter ("All" or an event name)
    pub event: Option<String>,

    /// College filter ("All" or a college name)
    pub college: Option<String>,

    /// State filter ("All" or a state name)
    pub state: Option<String>,

    /// Festival day whose gallery is shown (1-5)
    pub day: Option<u8>,

    /// Directory holding the gallery image files
    pub gallery_dir: Option<String>,

    /// Output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,

    /// Generate HTML dashboard report
    pub html_dashboard_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None, // Unseeded by default, fresh dataset every run
            event: None,
            college: None,
            state: None,
            day: Some(dataset::MIN_DAY),
            gallery_dir: None,
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
            html_dashboard_path: None, // No dashboard by default
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            FestDashError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            FestDashError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        // Validate the loaded configuration
        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        // Check for .festdash.toml in current directory
        if let Ok(config) = Self::load_from_file(".festdash.toml") {
            return config;
        }

        // Check for .festdash.toml in parent directories (up to 3 levels)
        for i in 1..=3 {
            let path = format!("{}.festdash.toml", "../".repeat(i));
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        // Fall back to defaults
        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        // Dataset options
        if let Some(seed) = cli_config.seed {
            self.seed = Some(seed);
        }

        // Filtering
        if let Some(ref event) = cli_config.event {
            self.event = Some(event.clone());
        }
        if let Some(ref college) = cli_config.college {
            self.college = Some(college.clone());
        }
        if let Some(ref state) = cli_config.state {
            self.state = Some(state.clone());
        }

        // Gallery
        if let Some(day) = cli_config.day {
            self.day = Some(day);
        }
        if let Some(ref gallery_dir) = cli_config.gallery_dir {
            self.gallery_dir = Some(gallery_dir.clone());
        }

        // Output & format
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if let Some(ref dashboard_path) = cli_config.html_dashboard_path {
            self.html_dashboard_path = Some(dashboard_path.clone());
        }
    }

    /// Build the filter set described by this configuration
    pub fn filter_set(&self) -> FilterSet {
        FilterSet::from_selections(
            self.event.as_deref(),
            self.college.as_deref(),
            self.state.as_deref(),
        )
    }

    /// The day whose gallery should be rendered
    pub fn gallery_day(&self) -> u8 {
        self.day.unwrap_or(dataset::MIN_DAY)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate gallery day
        if let Some(day) = self.day
            && !(dataset::MIN_DAY..=dataset::MAX_DAY).contains(&day)
        {
            return Err(FestDashError::Config(format!(
                "Day {day} is out of range. Expected a value between {}-{}.",
                dataset::MIN_DAY,
                dataset::MAX_DAY
            )));
        }

        // Validate filter values against the known vocabularies
        Self::validate_selection("event", self.event.as_deref(), &dataset::EVENTS)?;
        Self::validate_selection("college", self.college.as_deref(), &dataset::COLLEGES)?;
        Self::validate_selection("state", self.state.as_deref(), &dataset::STATES)?;

        // Validate output format
        if let Some(ref format) = self.output_format {
            match format.as_str() {
                f if output_formats::ALL.contains(&f) => {}
                _ => {
                    return Err(FestDashError::Config(format!(
                        "Invalid output format '{format}'. Expected one of: {}.",
                        output_formats::ALL.join(", ")
                    )));
                }
            }
        }

        Ok(())
    }

    fn validate_selection(name: &str, value: Option<&str>, vocabulary: &[&str]) -> Result<()> {
        let Some(value) = value else {
            return Ok(());
        };
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case(filter::ALL) || vocabulary.contains(&trimmed) {
            return Ok(());
        }
        Err(FestDashError::Config(format!(
            "Unknown {name} '{value}'. Expected '{}' or one of: {}.",
            filter::ALL,
            vocabulary.join(", ")
        )))
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Dataset options
    pub seed: Option<u64>, // --seed

    // Filtering
    pub event: Option<String>,   // --event
    pub college: Option<String>, // --college
    pub state: Option<String>,   // --state

    // Gallery
    pub day: Option<u8>,             // --day
    pub gallery_dir: Option<String>, // --gallery-dir

    // Output & format
    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub output_format: Option<String>, // --format

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config

    // Reporting
    pub html_dashboard_path: Option<String>, // --html-dashboard
}
