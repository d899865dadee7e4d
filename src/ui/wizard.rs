//! Interactive configuration wizard for festdash
//!
//! Provides a step-by-step guided setup for new users to create
//! a .festdash.toml with their default filters and output settings.

use crate::config::Config;
use crate::core::constants::{dataset, output_formats};
use crate::dataset::filter;
use crate::ui::color::{Colors, colorize};
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use std::fmt;
use std::path::PathBuf;

/// Errors that can occur during wizard execution
#[derive(Debug)]
pub enum WizardError {
    /// IO error during file operations
    Io(std::io::Error),
    /// Dialoguer interaction error
    Dialog(dialoguer::Error),
}

impl fmt::Display for WizardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Dialog(e) => write!(f, "Dialog error: {}", e),
        }
    }
}

impl std::error::Error for WizardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Dialog(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for WizardError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<dialoguer::Error> for WizardError {
    fn from(error: dialoguer::Error) -> Self {
        Self::Dialog(error)
    }
}

/// Result type for wizard operations
type WizardResult<T> = Result<T, WizardError>;

/// Configuration wizard builder for step-by-step setup
pub struct ConfigurationWizard {
    theme: ColorfulTheme,
}

impl Default for ConfigurationWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationWizard {
    /// Create a new configuration wizard
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    /// Run the interactive configuration wizard
    pub fn run(&self) -> WizardResult<()> {
        self.display_welcome();

        let mut config = Config::default();

        config.event = self.select_from_vocabulary("Default event filter", &dataset::EVENTS)?;
        config.college =
            self.select_from_vocabulary("Default college filter", &dataset::COLLEGES)?;
        config.state = self.select_from_vocabulary("Default state filter", &dataset::STATES)?;
        config.day = Some(self.select_day()?);
        config.output_format = Some(self.select_output_format()?);

        if self.should_pin_seed()? {
            let seed: u64 = Input::with_theme(&self.theme)
                .with_prompt("Seed value")
                .default(0)
                .interact()?;
            config.seed = Some(seed);
        }

        let gallery_dir: String = Input::with_theme(&self.theme)
            .with_prompt("Gallery image directory (empty for current directory)")
            .allow_empty(true)
            .interact()?;
        if !gallery_dir.is_empty() {
            config.gallery_dir = Some(gallery_dir);
        }

        self.generate_and_save_config(&config)?;
        self.show_completion_message();

        Ok(())
    }

    /// Display welcome message
    fn display_welcome(&self) {
        println!(
            "\n{}",
            colorize("🧙 festdash Configuration Wizard", Colors::BRIGHT_CYAN)
        );
        println!(
            "{}\n",
            colorize(
                "Let's set up your default festival analysis view!",
                Colors::CYAN
            )
        );
    }

    /// Pick a value from a fixed vocabulary, "All" meaning no filter
    fn select_from_vocabulary(
        &self,
        prompt: &str,
        vocabulary: &[&str],
    ) -> WizardResult<Option<String>> {
        let mut items = vec![filter::ALL];
        items.extend_from_slice(vocabulary);

        println!("{}", colorize(prompt, Colors::BRIGHT_WHITE));
        let selection = Select::with_theme(&self.theme)
            .items(&items)
            .default(0)
            .interact()?;

        if selection == 0 {
            Ok(None)
        } else {
            Ok(Some(items[selection].to_string()))
        }
    }

    /// Pick the default gallery day
    fn select_day(&self) -> WizardResult<u8> {
        let days: Vec<String> = (dataset::MIN_DAY..=dataset::MAX_DAY)
            .map(|day| format!("Day {day}"))
            .collect();

        println!(
            "{}",
            colorize("Which day's photo gallery by default?", Colors::BRIGHT_WHITE)
        );
        let selection = Select::with_theme(&self.theme)
            .items(&days)
            .default(0)
            .interact()?;

        Ok(dataset::MIN_DAY + selection as u8)
    }

    /// Pick the default output format
    fn select_output_format(&self) -> WizardResult<String> {
        println!(
            "{}",
            colorize("Default output format?", Colors::BRIGHT_WHITE)
        );
        let selection = Select::with_theme(&self.theme)
            .items(&output_formats::ALL)
            .default(0)
            .interact()?;

        Ok(output_formats::ALL[selection].to_string())
    }

    /// Ask if the user wants a pinned seed for reproducible datasets
    fn should_pin_seed(&self) -> WizardResult<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt("Pin a seed so every run shows the same dataset")
            .default(false)
            .interact()?)
    }

    /// Generate and save configuration file
    fn generate_and_save_config(&self, config: &Config) -> WizardResult<()> {
        println!(
            "\n{}",
            colorize("💾 Generating configuration...", Colors::BRIGHT_CYAN)
        );

        let config_content = ConfigFileGenerator::new(config).generate();
        let config_path = PathBuf::from(".festdash.toml");

        if config_path.exists() {
            let overwrite = Confirm::with_theme(&self.theme)
                .with_prompt(format!(
                    "{} .festdash.toml already exists. Overwrite?",
                    colorize("⚠️", Colors::BRIGHT_YELLOW)
                ))
                .default(false)
                .interact()?;

            if !overwrite {
                println!("{}", colorize("Configuration not saved.", Colors::YELLOW));
                return Ok(());
            }
        }

        std::fs::write(&config_path, config_content)?;

        println!(
            "\n{} {}",
            colorize("✅", Colors::BRIGHT_GREEN),
            colorize("Configuration saved to .festdash.toml", Colors::BRIGHT_GREEN)
        );

        Ok(())
    }

    /// Show completion message and usage examples
    fn show_completion_message(&self) {
        println!("\n{}", colorize("📚 Usage Examples", Colors::BRIGHT_WHITE));

        let examples = [
            ("Show the dashboard in your terminal:", "festdash"),
            ("Filter a single event:", "festdash --event Chess"),
            (
                "Write an HTML dashboard:",
                "festdash --html-dashboard inbloom.html",
            ),
            ("JSON output for automation:", "festdash --format json"),
        ];

        for (description, command) in &examples {
            println!("\n{}", colorize(description, Colors::CYAN));
            println!("  {}", colorize(command, Colors::WHITE));
        }

        println!(
            "\n{}",
            colorize("🎉 Setup complete! Enjoy the festival!", Colors::BRIGHT_GREEN)
        );
    }
}

/// Configuration file generator
struct ConfigFileGenerator<'a> {
    config: &'a Config,
}

impl<'a> ConfigFileGenerator<'a> {
    fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Generate the configuration file content
    fn generate(&self) -> String {
        let mut content = String::new();

        content.push_str("# festdash configuration file\n");
        content.push_str("# Generated by the configuration wizard\n\n");

        self.add_dataset_settings(&mut content);
        self.add_filter_settings(&mut content);
        self.add_gallery_settings(&mut content);
        self.add_output_settings(&mut content);

        content
    }

    fn add_dataset_settings(&self, content: &mut String) {
        if let Some(seed) = self.config.seed {
            content.push_str("# Dataset settings\n");
            content.push_str(&format!("seed = {}\n\n", seed));
        }
    }

    fn add_filter_settings(&self, content: &mut String) {
        if self.config.event.is_some()
            || self.config.college.is_some()
            || self.config.state.is_some()
        {
            content.push_str("# Default filters\n");

            if let Some(ref event) = self.config.event {
                content.push_str(&format!("event = \"{}\"\n", event));
            }
            if let Some(ref college) = self.config.college {
                content.push_str(&format!("college = \"{}\"\n", college));
            }
            if let Some(ref state) = self.config.state {
                content.push_str(&format!("state = \"{}\"\n", state));
            }
            content.push('\n');
        }
    }

    fn add_gallery_settings(&self, content: &mut String) {
        content.push_str("# Gallery settings\n");
        if let Some(day) = self.config.day {
            content.push_str(&format!("day = {}\n", day));
        }
        if let Some(ref gallery_dir) = self.config.gallery_dir {
            content.push_str(&format!("gallery_dir = \"{}\"\n", gallery_dir));
        }
        content.push('\n');
    }

    fn add_output_settings(&self, content: &mut String) {
        if let Some(ref format) = self.config.output_format {
            content.push_str("# Output settings\n");
            content.push_str(&format!("output_format = \"{}\"\n", format));
            content.push('\n');
        }
    }
}

/// Run the interactive configuration wizard (public API)
pub fn run_configuration_wizard() -> Result<(), Box<dyn std::error::Error>> {
    ConfigurationWizard::new()
        .run()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}
