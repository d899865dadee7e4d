// Command-line interface definitions and parsing for festdash

use crate::config::CliConfig;
use crate::core::constants::{dataset, imaging, output_formats};
use clap::{Parser, Subcommand};

/// Processing mode names accepted by `process-image --mode`
pub mod mode_names {
    pub const ORIGINAL: &str = "original";
    pub const GRAYSCALE: &str = "grayscale";
    pub const ENHANCE_CONTRAST: &str = "enhance-contrast";
    pub const ROTATE: &str = "rotate";
    pub const COLOR_GRADING: &str = "color-grading";
    pub const EDGE_DETECTION: &str = "edge-detection";

    pub const ALL: [&str; 6] = [
        ORIGINAL,
        GRAYSCALE,
        ENHANCE_CONTRAST,
        ROTATE,
        COLOR_GRADING,
        EDGE_DETECTION,
    ];
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // Dataset Options
    /// Seed for reproducible dataset generation
    #[arg(short = 's', long, value_name = "SEED", help_heading = "Dataset Options")]
    pub seed: Option<u64>,

    // Filtering
    /// Only include participants of this event ("All" disables the filter)
    #[arg(short = 'e', long, value_name = "EVENT", help_heading = "Filtering")]
    pub event: Option<String>,

    /// Only include participants from this college ("All" disables the filter)
    #[arg(short = 'c', long, value_name = "COLLEGE", help_heading = "Filtering")]
    pub college: Option<String>,

    /// Only include participants from this state ("All" disables the filter)
    #[arg(long, value_name = "STATE", help_heading = "Filtering")]
    pub state: Option<String>,

    // Gallery
    /// Festival day whose photo gallery is shown (1-5)
    #[arg(short = 'd', long, value_name = "DAY", help_heading = "Gallery")]
    pub day: Option<u8>,

    /// Directory holding the gallery image files
    #[arg(long, value_name = "DIR", help_heading = "Gallery")]
    pub gallery_dir: Option<String>,

    // Output & Verbosity
    /// Suppress informational output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, default_value = output_formats::DEFAULT, help_heading = "Output & Verbosity")]
    pub format: String,

    /// Generate HTML dashboard report
    #[arg(long, value_name = "PATH", help_heading = "Output & Verbosity")]
    pub html_dashboard: Option<String>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply a processing mode to an event photo
    #[command(name = "process-image", arg_required_else_help = true)]
    ProcessImage {
        /// Input image file (jpg, jpeg or png)
        input: String,

        /// Processing mode to apply
        #[arg(short = 'm', long, value_parser = mode_names::ALL, default_value = mode_names::ORIGINAL)]
        mode: String,

        /// Rotation angle in degrees (rotate mode)
        #[arg(long, value_name = "DEGREES")]
        angle: Option<u16>,

        /// Brightness factor 0.5-2.0 (color-grading mode)
        #[arg(long, value_name = "FACTOR")]
        brightness: Option<f32>,

        /// Contrast factor 0.5-2.0 (color-grading mode)
        #[arg(long, value_name = "FACTOR")]
        contrast: Option<f32>,

        /// Sharpness factor 0.5-2.0 (color-grading mode)
        #[arg(long, value_name = "FACTOR")]
        sharpness: Option<f32>,

        /// Output file (default: derived from input and mode)
        #[arg(short = 'o', long, value_name = "PATH")]
        output: Option<String>,
    },
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Run interactive configuration wizard
    #[command(name = "config-wizard")]
    ConfigWizard,
}

/// Convert derive-based CLI arguments directly to CliConfig structure
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    let mut cli_config = CliConfig::default();

    // Dataset options
    cli_config.seed = cli.seed;

    // Filtering
    cli_config.event = cli.event.clone();
    cli_config.college = cli.college.clone();
    cli_config.state = cli.state.clone();

    // Gallery
    if let Some(day) = cli.day {
        if !(dataset::MIN_DAY..=dataset::MAX_DAY).contains(&day) {
            eprintln!(
                "Error: Day {day} is out of range. Expected a value between {}-{}.",
                dataset::MIN_DAY,
                dataset::MAX_DAY
            );
            std::process::exit(1);
        }
        cli_config.day = Some(day);
    }
    cli_config.gallery_dir = cli.gallery_dir.clone();

    // Output & format
    cli_config.quiet = cli.quiet;
    cli_config.verbose = cli.verbose;
    cli_config.output_format = Some(cli.format.clone());
    cli_config.html_dashboard_path = cli.html_dashboard.clone();

    // Configuration
    cli_config.config_file = cli.config.clone();
    cli_config.no_config = cli.no_config;

    cli_config
}

/// Validate CLI arguments using the derive-based CLI structure
pub fn validate_cli_args(cli: &Cli) {
    if let Some(day) = cli.day
        && !(dataset::MIN_DAY..=dataset::MAX_DAY).contains(&day)
    {
        eprintln!(
            "Error: Day {day} is out of range. Expected a value between {}-{}.",
            dataset::MIN_DAY,
            dataset::MAX_DAY
        );
        std::process::exit(1);
    }

    if let Some(Commands::ProcessImage {
        mode,
        angle,
        brightness,
        contrast,
        sharpness,
        ..
    }) = &cli.command
    {
        if mode == mode_names::ROTATE
            && let Some(angle) = angle
            && !imaging::ROTATION_ANGLES.contains(angle)
        {
            eprintln!(
                "Error: Rotation angle {angle} is not supported. Expected one of: 90, 180, 270."
            );
            std::process::exit(1);
        }

        for (name, factor) in [
            ("brightness", brightness),
            ("contrast", contrast),
            ("sharpness", sharpness),
        ] {
            if let Some(factor) = factor
                && !(imaging::MIN_ENHANCE_FACTOR..=imaging::MAX_ENHANCE_FACTOR).contains(factor)
            {
                eprintln!(
                    "Error: {name} factor {factor} is out of range. Expected a value between {}-{}.",
                    imaging::MIN_ENHANCE_FACTOR,
                    imaging::MAX_ENHANCE_FACTOR
                );
                std::process::exit(1);
            }
        }
    }
}
