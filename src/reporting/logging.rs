use log::{debug, error, info, warn};
use std::path::Path;

use crate::dataset::filter::FilterSet;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    // try_init so repeated calls (tests drive the run logic more than once
    // per process) are a no-op instead of a panic
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log dataset generation information
pub fn log_generation(record_count: usize, seed: Option<u64>) {
    match seed {
        Some(seed) => info!("Generated {record_count} records (seed={seed})"),
        None => info!("Generated {record_count} records (unseeded)"),
    }
}

/// Log active filters and the resulting view size
pub fn log_filtering(filters: &FilterSet, filtered_count: usize, total_count: usize) {
    if filters.is_empty() {
        info!("No filters active, showing all {total_count} records");
    } else {
        info!(
            "Filters event={:?} college={:?} state={:?} matched {filtered_count}/{total_count} records",
            filters.event, filters.college, filters.state
        );
    }
}

/// Log the written dashboard path
pub fn log_dashboard_written<P: AsRef<Path>>(path: P) {
    info!("Dashboard written to {}", path.as_ref().display());
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_logger_initialization_verbose() {
        // Logger can only be initialized once per process
        std::panic::catch_unwind(|| init_logger(true, false)).ok();
    }

    #[test]
    fn test_logger_initialization_quiet() {
        std::panic::catch_unwind(|| init_logger(false, true)).ok();
    }

    #[test]
    fn test_logger_initialization_conflicting() {
        // Quiet takes precedence over verbose
        std::panic::catch_unwind(|| init_logger(true, true)).ok();
    }

    #[test]
    fn test_log_generation_variants() {
        log_generation(250, Some(42));
        log_generation(250, None);
        log_generation(0, None);
    }

    #[test]
    fn test_log_filtering_empty_and_active() {
        log_filtering(&FilterSet::default(), 250, 250);

        let filters = FilterSet::from_selections(Some("Chess"), None, Some("Karnataka"));
        log_filtering(&filters, 7, 250);
        log_filtering(&filters, 0, 250);
    }

    #[test]
    fn test_log_dashboard_written() {
        log_dashboard_written("dashboard.html");
        log_dashboard_written(std::path::PathBuf::from("/tmp/out.html"));
    }

    #[test]
    fn test_log_error_with_and_without_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "missing");
        log_error("Failed to read gallery image", Some(&io_error));
        log_error("Something went wrong", None);
    }

    #[test]
    fn test_log_warning_various_messages() {
        log_warning("This is a warning");
        log_warning("");
        log_warning("Warning with emojis: ⚠️");
    }
}
