use clap::{CommandFactory, Parser};
use festdash::config::Config;
use festdash::core::constants::output_formats;
use festdash::dataset::{aggregate, generate};
use festdash::gallery;
use festdash::imaging::{self, ProcessingMode, RotationAngle};
use festdash::reporting::logging;
use festdash::reporting::{DashboardData, HtmlDashboard};
use festdash::ui::cli::mode_names;
use festdash::ui::output;
use festdash::ui::wizard::run_configuration_wizard;
use festdash::ui::{Cli, Commands, cli_to_config, print_completions};

use std::path::Path;

fn main() {
    let cli = Cli::parse();

    festdash::ui::cli::validate_cli_args(&cli);

    // Handle subcommands first
    if let Some(exit_code) = handle_special_commands(&cli) {
        std::process::exit(exit_code);
    }

    // Run the main analysis logic
    match run_festdash_logic(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle subcommands and return exit code if one was processed
pub fn handle_special_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::CompletionGenerate { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        Some(Commands::ConfigWizard) => match run_configuration_wizard() {
            Ok(()) => Some(0),
            Err(e) => {
                eprintln!("Error: {e}");
                Some(1)
            }
        },
        Some(Commands::ProcessImage {
            ref input,
            ref mode,
            angle,
            brightness,
            contrast,
            sharpness,
            ref output,
        }) => {
            let processing_mode = match build_processing_mode(
                mode, angle, brightness, contrast, sharpness,
            ) {
                Ok(processing_mode) => processing_mode,
                Err(e) => {
                    eprintln!("Error: {e}");
                    return Some(1);
                }
            };

            let output_path = output.as_deref().map(Path::new);
            match imaging::process_file(Path::new(input), output_path, &processing_mode) {
                Ok(written) => {
                    println!("🖼️  Processed image written to {}", written.display());
                    Some(0)
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    Some(1)
                }
            }
        }
        None => None,
    }
}

/// Build a processing mode from the flags of the process-image subcommand
pub fn build_processing_mode(
    mode: &str,
    angle: Option<u16>,
    brightness: Option<f32>,
    contrast: Option<f32>,
    sharpness: Option<f32>,
) -> Result<ProcessingMode, Box<dyn std::error::Error>> {
    let processing_mode = match mode {
        mode_names::ORIGINAL => ProcessingMode::Original,
        mode_names::GRAYSCALE => ProcessingMode::Grayscale,
        mode_names::ENHANCE_CONTRAST => ProcessingMode::EnhanceContrast,
        mode_names::ROTATE => {
            let angle = RotationAngle::from_degrees(angle.unwrap_or(90))?;
            ProcessingMode::Rotate(angle)
        }
        mode_names::COLOR_GRADING => {
            let brightness = brightness.unwrap_or(1.0);
            let contrast = contrast.unwrap_or(1.0);
            let sharpness = sharpness.unwrap_or(1.0);
            imaging::validate_factor("brightness", brightness)?;
            imaging::validate_factor("contrast", contrast)?;
            imaging::validate_factor("sharpness", sharpness)?;
            ProcessingMode::ColorGrading {
                brightness,
                contrast,
                sharpness,
            }
        }
        mode_names::EDGE_DETECTION => ProcessingMode::EdgeDetection,
        other => return Err(format!("Unknown processing mode '{other}'").into()),
    };
    Ok(processing_mode)
}

/// Main analysis logic extracted from main() for testing
pub fn run_festdash_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    // Parse CLI arguments into CliConfig using the derive-based CLI
    let cli_config = cli_to_config(cli);

    // Load and merge configuration
    let config = load_and_merge_config(&cli_config)?;

    // Setup logging and output settings
    let output_settings = setup_output_settings(&cli_config, &config);
    logging::init_logger(output_settings.verbose, output_settings.quiet);

    // Generate the participant collection
    let collection = generate(config.seed);
    logging::log_generation(collection.len(), config.seed);

    // Apply filters
    let filters = config.filter_set();
    let filtered = filters.apply(&collection);
    logging::log_filtering(&filters, filtered.len(), collection.len());

    // Aggregate the filtered view
    let event_counts = aggregate::count_by_event(&filtered);
    let day_counts = aggregate::count_by_day(&filtered);
    let college_counts = aggregate::count_by_college(&filtered);
    let state_counts = aggregate::count_by_state(&filtered);
    let feedback = aggregate::feedback_text(&filtered);
    let word_frequencies = aggregate::word_frequencies(&feedback);

    // The crosstab always covers the full collection, filters or not
    let crosstab = aggregate::event_feedback_crosstab(&collection);

    // Resolve the gallery for the selected day; missing files are warned
    // per slot inside collect_slots, never fatal
    let gallery_day = config.gallery_day();
    let gallery_dir = config.gallery_dir.clone().unwrap_or_else(|| ".".to_string());
    let gallery_slots = gallery::collect_slots(gallery_day, Path::new(&gallery_dir))?;

    // Create display metadata
    let metadata = output::DisplayMetadata {
        total_records: collection.len(),
        filtered_records: filtered.len(),
        distinct_events: event_counts.len(),
        distinct_colleges: college_counts.len(),
        distinct_states: state_counts.len(),
    };

    let data = DashboardData {
        metadata,
        filters,
        event_counts,
        day_counts,
        college_counts,
        state_counts,
        word_frequencies,
        crosstab,
        gallery_day,
        gallery_slots,
        timestamp: chrono::Utc::now()
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string(),
    };

    // Display final results
    output::display_results(&data, &output_settings.output_format, output_settings.quiet);

    // Generate HTML dashboard if requested
    if let Some(ref dashboard_path) = config.html_dashboard_path {
        if let Err(e) = HtmlDashboard::generate_dashboard(&data, Path::new(dashboard_path)) {
            eprintln!("Warning: Failed to generate HTML dashboard: {e}");
        } else {
            println!("📊 HTML dashboard generated: {dashboard_path}");
            logging::log_dashboard_written(dashboard_path);
        }
    }

    Ok(0)
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(
    cli_config: &festdash::config::CliConfig,
) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);

    // Reject out-of-vocabulary filters and out-of-range days up front
    config.validate()?;
    Ok(config)
}

/// Settings for output formatting and display
pub struct OutputSettings {
    pub quiet: bool,
    pub verbose: bool,
    pub output_format: String,
}

/// Setup output settings based on CLI and config
pub fn setup_output_settings(
    cli_config: &festdash::config::CliConfig,
    config: &Config,
) -> OutputSettings {
    let quiet = cli_config.quiet;
    let verbose = config.verbose.unwrap_or(false);
    let output_format = config
        .output_format
        .as_deref()
        .unwrap_or(output_formats::DEFAULT)
        .to_string();

    OutputSettings {
        quiet,
        verbose,
        output_format,
    }
}

#[cfg(test)]
#[allow(clippy::field_reassign_with_default)] // Test code for clarity
mod tests {
    use super::*;
    use festdash::config::CliConfig;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_cli() -> Cli {
        Cli {
            command: None,
            seed: None,
            event: None,
            college: None,
            state: None,
            day: None,
            gallery_dir: None,
            quiet: false,
            verbose: false,
            format: "text".to_string(),
            html_dashboard: None,
            config: None,
            no_config: false,
        }
    }

    #[test]
    fn test_handle_special_commands_none() {
        let cli = create_test_cli();
        let result = handle_special_commands(&cli);
        assert!(result.is_none());
    }

    #[test]
    fn test_handle_special_commands_generate() {
        // Generate the completion script into a buffer instead of stdout
        let mut cli = create_test_cli();
        cli.command = Some(Commands::CompletionGenerate {
            shell: clap_complete::Shell::Bash,
        });

        let mut app = Cli::command();
        let app_name = app.get_name().to_string();
        let mut buffer = Vec::new();
        clap_complete::generate(clap_complete::shells::Bash, &mut app, app_name, &mut buffer);

        assert!(!buffer.is_empty(), "Completion script should be generated");
        let completion_content = String::from_utf8(buffer).expect("Valid UTF-8");
        assert!(
            completion_content.contains("festdash"),
            "Completion should contain app name"
        );

        match cli.command {
            Some(Commands::CompletionGenerate { shell }) => {
                assert_eq!(shell, clap_complete::Shell::Bash);
            }
            _ => panic!("Expected CompletionGenerate command"),
        }
    }

    #[test]
    fn test_handle_special_commands_process_image_missing_file() {
        let mut cli = create_test_cli();
        cli.command = Some(Commands::ProcessImage {
            input: "/nonexistent/photo.jpg".to_string(),
            mode: mode_names::GRAYSCALE.to_string(),
            angle: None,
            brightness: None,
            contrast: None,
            sharpness: None,
            output: None,
        });

        let result = handle_special_commands(&cli);
        assert_eq!(result, Some(1));
    }

    #[test]
    fn test_build_processing_mode_basics() {
        assert_eq!(
            build_processing_mode(mode_names::ORIGINAL, None, None, None, None).unwrap(),
            ProcessingMode::Original
        );
        assert_eq!(
            build_processing_mode(mode_names::GRAYSCALE, None, None, None, None).unwrap(),
            ProcessingMode::Grayscale
        );
        assert_eq!(
            build_processing_mode(mode_names::ENHANCE_CONTRAST, None, None, None, None).unwrap(),
            ProcessingMode::EnhanceContrast
        );
        assert_eq!(
            build_processing_mode(mode_names::EDGE_DETECTION, None, None, None, None).unwrap(),
            ProcessingMode::EdgeDetection
        );
    }

    #[test]
    fn test_build_processing_mode_rotate_defaults_to_90() {
        let mode = build_processing_mode(mode_names::ROTATE, None, None, None, None).unwrap();
        match mode {
            ProcessingMode::Rotate(angle) => assert_eq!(angle.degrees(), 90),
            _ => panic!("Expected Rotate mode"),
        }
    }

    #[test]
    fn test_build_processing_mode_rotate_invalid_angle() {
        let result = build_processing_mode(mode_names::ROTATE, Some(45), None, None, None);
        assert!(result.is_err());
    }

    #[test]
    fn test_build_processing_mode_color_grading_defaults_neutral() {
        let mode =
            build_processing_mode(mode_names::COLOR_GRADING, None, None, None, None).unwrap();
        match mode {
            ProcessingMode::ColorGrading {
                brightness,
                contrast,
                sharpness,
            } => {
                assert_eq!(brightness, 1.0);
                assert_eq!(contrast, 1.0);
                assert_eq!(sharpness, 1.0);
            }
            _ => panic!("Expected ColorGrading mode"),
        }
    }

    #[test]
    fn test_build_processing_mode_color_grading_out_of_range() {
        let result =
            build_processing_mode(mode_names::COLOR_GRADING, None, Some(2.5), None, None);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_and_merge_config_no_config_flag() {
        let mut cli_config = CliConfig::default();
        cli_config.no_config = true;
        let result = load_and_merge_config(&cli_config);
        assert!(result.is_ok());
        let config = result.unwrap();
        // Should be default config since no_config is true
        assert_eq!(config.day, Config::default().day);
    }

    #[test]
    fn test_load_and_merge_config_with_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test_config.toml");
        let config_content = r#"
            seed = 7
            event = "Chess"
            day = 3
        "#;
        fs::write(&config_path, config_content).unwrap();

        let mut cli_config = CliConfig::default();
        cli_config.config_file = Some(config_path.to_str().unwrap().to_string());

        let result = load_and_merge_config(&cli_config);
        assert!(result.is_ok());
        let config = result.unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.event, Some("Chess".to_string()));
        assert_eq!(config.day, Some(3));
    }

    #[test]
    fn test_load_and_merge_config_invalid_file() {
        let mut cli_config = CliConfig::default();
        cli_config.config_file = Some("/nonexistent/config.toml".to_string());

        let result = load_and_merge_config(&cli_config);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_and_merge_config_cli_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test_config.toml");
        fs::write(&config_path, "event = \"Chess\"\nday = 2\n").unwrap();

        let mut cli_config = CliConfig::default();
        cli_config.config_file = Some(config_path.to_str().unwrap().to_string());
        cli_config.event = Some("Quiz".to_string());

        let config = load_and_merge_config(&cli_config).unwrap();
        assert_eq!(config.event, Some("Quiz".to_string()));
        assert_eq!(config.day, Some(2)); // File value survives where CLI is silent
    }

    #[test]
    fn test_load_and_merge_config_rejects_unknown_event() {
        let mut cli_config = CliConfig::default();
        cli_config.no_config = true;
        cli_config.event = Some("Juggling".to_string());

        let result = load_and_merge_config(&cli_config);
        assert!(result.is_err());
    }

    #[test]
    fn test_setup_output_settings_default() {
        let cli_config = CliConfig::default();
        let config = Config::default();
        let settings = setup_output_settings(&cli_config, &config);

        assert!(!settings.quiet);
        assert!(!settings.verbose);
        assert_eq!(settings.output_format, output_formats::DEFAULT.to_string());
    }

    #[test]
    fn test_setup_output_settings_quiet() {
        let mut cli_config = CliConfig::default();
        cli_config.quiet = true;
        let config = Config::default();
        let settings = setup_output_settings(&cli_config, &config);

        assert!(settings.quiet);
    }

    #[test]
    fn test_setup_output_settings_verbose() {
        let cli_config = CliConfig::default();
        let mut config = Config::default();
        config.verbose = Some(true);
        let settings = setup_output_settings(&cli_config, &config);

        assert!(settings.verbose);
    }

    #[test]
    fn test_setup_output_settings_json_format() {
        let cli_config = CliConfig::default();
        let mut config = Config::default();
        config.output_format = Some(output_formats::JSON.to_string());
        let settings = setup_output_settings(&cli_config, &config);

        assert_eq!(settings.output_format, output_formats::JSON.to_string());
    }

    #[test]
    fn test_run_festdash_logic_seeded() {
        let temp_dir = TempDir::new().unwrap();

        let mut cli = create_test_cli();
        cli.seed = Some(42);
        cli.no_config = true;
        cli.quiet = true;
        cli.format = output_formats::MINIMAL.to_string();
        cli.gallery_dir = Some(temp_dir.path().to_str().unwrap().to_string());

        let result = run_festdash_logic(&cli);
        assert_eq!(result.unwrap(), 0);
    }

    #[test]
    fn test_run_festdash_logic_with_dashboard() {
        let temp_dir = TempDir::new().unwrap();
        let dashboard_path = temp_dir.path().join("dashboard.html");

        let mut cli = create_test_cli();
        cli.seed = Some(1);
        cli.no_config = true;
        cli.quiet = true;
        cli.format = output_formats::MINIMAL.to_string();
        cli.gallery_dir = Some(temp_dir.path().to_str().unwrap().to_string());
        cli.html_dashboard = Some(dashboard_path.to_str().unwrap().to_string());

        let result = run_festdash_logic(&cli);
        assert_eq!(result.unwrap(), 0);
        assert!(dashboard_path.exists());
        let html = fs::read_to_string(&dashboard_path).unwrap();
        assert!(html.contains("crosstabChart"));
    }
}
