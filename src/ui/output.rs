//! Output formatting and display logic for festdash

use crate::core::constants::{display, output_formats};
use crate::gallery::GallerySlot;
use crate::reporting::dashboard::DashboardData;
use crate::ui::color::{Colors, colorize};

/// Metadata for displaying results
#[derive(Debug, Clone)]
pub struct DisplayMetadata {
    pub total_records: usize,
    pub filtered_records: usize,
    pub distinct_events: usize,
    pub distinct_colleges: usize,
    pub distinct_states: usize,
}

/// Display the analysis based on output format
pub fn display_results(data: &DashboardData, output_format: &str, quiet: bool) {
    match output_format {
        output_formats::MINIMAL => display_minimal_output(data),
        output_formats::JSON => display_json_output(data),
        _ => display_text_output(data, quiet),
    }
}

/// Display the analysis in minimal format (no colors, emojis, or grouping)
fn display_minimal_output(data: &DashboardData) {
    println!("total {}", data.metadata.total_records);
    println!("filtered {}", data.metadata.filtered_records);

    for (label, count) in &data.event_counts {
        println!("event {count} {label}");
    }
    for (day, count) in &data.day_counts {
        println!("day {count} {day}");
    }
    for (label, count) in &data.college_counts {
        println!("college {count} {label}");
    }
    for (label, count) in &data.state_counts {
        println!("state {count} {label}");
    }
    for (word, count) in &data.word_frequencies {
        println!("word {count} {word}");
    }
    for slot in &data.gallery_slots {
        match slot {
            GallerySlot::Found(path) => println!("gallery found {}", path.display()),
            GallerySlot::Missing { file_name, .. } => println!("gallery missing {file_name}"),
        }
    }
}

/// Build the JSON document for the analysis
pub fn json_value(data: &DashboardData) -> serde_json::Value {
    let counts_object = |counts: &[(String, usize)]| {
        counts
            .iter()
            .map(|(label, count)| (label.clone(), serde_json::json!(count)))
            .collect::<serde_json::Map<String, serde_json::Value>>()
    };

    serde_json::json!({
        "summary": {
            "total_records": data.metadata.total_records,
            "filtered_records": data.metadata.filtered_records,
            "distinct_events": data.metadata.distinct_events,
            "distinct_colleges": data.metadata.distinct_colleges,
            "distinct_states": data.metadata.distinct_states,
        },
        "filters": {
            "event": data.filters.event,
            "college": data.filters.college,
            "state": data.filters.state,
        },
        "counts": {
            "by_event": counts_object(&data.event_counts),
            "by_day": data.day_counts.iter()
                .map(|(day, count)| (day.to_string(), serde_json::json!(count)))
                .collect::<serde_json::Map<String, serde_json::Value>>(),
            "by_college": counts_object(&data.college_counts),
            "by_state": counts_object(&data.state_counts),
        },
        "feedback_words": counts_object(&data.word_frequencies),
        "crosstab": {
            "events": data.crosstab.events,
            "feedbacks": data.crosstab.feedbacks,
            "counts": data.crosstab.counts,
        },
        "gallery": {
            "day": data.gallery_day,
            "slots": data.gallery_slots.iter().map(|slot| match slot {
                GallerySlot::Found(path) => serde_json::json!({
                    "file": path.display().to_string(),
                    "found": true,
                }),
                GallerySlot::Missing { file_name, warning } => serde_json::json!({
                    "file": file_name,
                    "found": false,
                    "warning": warning,
                }),
            }).collect::<Vec<_>>(),
        },
        "generated_at": data.timestamp,
    })
}

/// Display the analysis in JSON format
fn display_json_output(data: &DashboardData) {
    println!("{}", json_value(data));
}

/// Display the analysis in text format with colors, emojis, and grouping
fn display_text_output(data: &DashboardData, quiet: bool) {
    if !quiet {
        display_summary(data);
    }

    display_count_section("Participation by Event", &data.event_counts);
    display_count_section(
        "Participation by Day",
        &data
            .day_counts
            .iter()
            .map(|(day, count)| (format!("Day {day}"), *count))
            .collect::<Vec<_>>(),
    );
    display_count_section("Participation by College", &data.college_counts);
    display_count_section("Participation by State", &data.state_counts);

    display_feedback_section(data);

    if !quiet {
        display_gallery_section(data);
    }
}

/// Display the headline summary of records and active filters
fn display_summary(data: &DashboardData) {
    let filter_line = if data.filters.is_empty() {
        "all participants".to_string()
    } else {
        let mut parts = Vec::new();
        if let Some(ref event) = data.filters.event {
            parts.push(format!("event={event}"));
        }
        if let Some(ref college) = data.filters.college {
            parts.push(format!("college={college}"));
        }
        if let Some(ref state) = data.filters.state {
            parts.push(format!("state={state}"));
        }
        parts.join(", ")
    };

    println!(
        "{} {}: {}",
        colorize(display::DATASET_EMOJI, Colors::BRIGHT_BLUE),
        colorize(
            &format!("{}{}{}", Colors::BOLD, "Participants", Colors::RESET),
            Colors::BRIGHT_CYAN
        ),
        colorize(
            &format!(
                "{}{} of {} match ({}){}",
                Colors::BOLD,
                data.metadata.filtered_records,
                data.metadata.total_records,
                filter_line,
                Colors::RESET
            ),
            Colors::BRIGHT_WHITE
        )
    );
}

/// Display one numbered count table
fn display_count_section(title: &str, counts: &[(String, usize)]) {
    if counts.is_empty() {
        return;
    }

    println!(
        "\n{} {}:",
        colorize(display::CHART_EMOJI, Colors::BRIGHT_GREEN),
        colorize(
            &format!("{}{}{}", Colors::BOLD, title, Colors::RESET),
            Colors::BRIGHT_CYAN
        )
    );
    for (i, (label, count)) in counts.iter().enumerate() {
        println!(
            "   {}. {} {}",
            colorize(&format!("{}", i + 1), Colors::DIM),
            colorize(&format!("{count:>3}"), Colors::BRIGHT_WHITE),
            colorize(label, Colors::CYAN)
        );
    }
}

/// Display the most frequent feedback words
fn display_feedback_section(data: &DashboardData) {
    if data.word_frequencies.is_empty() {
        return;
    }

    println!(
        "\n{} {}:",
        colorize(display::FEEDBACK_EMOJI, Colors::BRIGHT_MAGENTA),
        colorize(
            &format!("{}{}{}", Colors::BOLD, "Top Feedback Words", Colors::RESET),
            Colors::BRIGHT_CYAN
        )
    );
    for (i, (word, count)) in data
        .word_frequencies
        .iter()
        .take(display::MAX_WORDS_TO_DISPLAY)
        .enumerate()
    {
        println!(
            "   {}. {} {}",
            colorize(&format!("{}", i + 1), Colors::DIM),
            colorize(&format!("{count:>3}"), Colors::BRIGHT_WHITE),
            colorize(word, Colors::MAGENTA)
        );
    }
    if data.word_frequencies.len() > display::MAX_WORDS_TO_DISPLAY {
        println!(
            "   {}",
            colorize(
                &format!(
                    "... and {} more words",
                    data.word_frequencies.len() - display::MAX_WORDS_TO_DISPLAY
                ),
                Colors::DIM
            )
        );
    }
}

/// Display the day gallery, with warnings for missing files
fn display_gallery_section(data: &DashboardData) {
    println!(
        "\n{} {}:",
        colorize(display::GALLERY_EMOJI, Colors::BRIGHT_BLUE),
        colorize(
            &format!(
                "{}Event Photos - Day {}{}",
                Colors::BOLD,
                data.gallery_day,
                Colors::RESET
            ),
            Colors::BRIGHT_CYAN
        )
    );
    for (i, slot) in data.gallery_slots.iter().enumerate() {
        match slot {
            GallerySlot::Found(path) => println!(
                "   {}. {}",
                colorize(&format!("{}", i + 1), Colors::DIM),
                colorize(&path.display().to_string(), Colors::BLUE)
            ),
            GallerySlot::Missing { warning, .. } => println!(
                "   {}. {} {}",
                colorize(&format!("{}", i + 1), Colors::DIM),
                colorize(display::WARNING_EMOJI, Colors::BRIGHT_YELLOW),
                colorize(warning, Colors::BRIGHT_YELLOW)
            ),
        }
    }
}
