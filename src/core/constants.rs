/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the fixed vocabularies, dataset parameters, and
/// other literal values used across the application, making them easier to
/// maintain and modify.
/// Dataset parameters and fixed vocabularies
pub mod dataset {
    /// Number of participant records synthesized per run
    pub const DATASET_SIZE: usize = 250;

    /// First festival day (inclusive)
    pub const MIN_DAY: u8 = 1;
    /// Last festival day (inclusive)
    pub const MAX_DAY: u8 = 5;

    /// Events participants can register for
    pub const EVENTS: [&str; 10] = [
        "Treasure Hunt",
        "Music",
        "Football",
        "Gaming",
        "Photography",
        "Chess",
        "Quiz",
        "Debate",
        "Catch The Flag",
        "Cricket",
    ];

    /// Colleges participants come from
    pub const COLLEGES: [&str; 6] = [
        "Christ University Bangalore",
        "Kristu Jayanti College",
        "Jyoti Niwas College",
        "BIT Mesra",
        "IIT Bombay",
        "BITS Pilani",
    ];

    /// Home states of participating colleges
    pub const STATES: [&str; 6] = [
        "Karnataka",
        "West Bengal",
        "Tamil Nadu",
        "Jharkhand",
        "Rajasthan",
        "Maharashtra",
    ];

    /// Free-text feedback phrases participants leave after an event
    pub const FEEDBACK_PHRASES: [&str; 19] = [
        "Amazing event!",
        "Loved it",
        "Could be better",
        "Fantastic experience",
        "Not great",
        "Management was Good",
        "Behaviour of Volunteers was very nice",
        "Liked the Refreshments",
        "Some events could have been better",
        "Pathetic",
        "The judges were Fair",
        "Good Decoration",
        "Awesome",
        "Internet and Lab Systems were working very nice",
        "Good Campus",
        "Flabbergasting",
        "Worth It",
        "Superb!! , Will attend this fest again next year",
        "10 on 10",
    ];
}

/// Output format constants
pub mod output_formats {
    /// Text output format - colorful output with grouped count tables
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";
    /// Minimal output format - plain text without colors
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// Image processing constants
pub mod imaging {
    /// Minimum enhancement factor for brightness/contrast/sharpness
    pub const MIN_ENHANCE_FACTOR: f32 = 0.5;
    /// Maximum enhancement factor for brightness/contrast/sharpness
    pub const MAX_ENHANCE_FACTOR: f32 = 2.0;
    /// Neutral enhancement factor (no change)
    pub const NEUTRAL_ENHANCE_FACTOR: f32 = 1.0;

    /// Contrast factor applied by the fixed "enhance contrast" mode
    pub const FIXED_CONTRAST_FACTOR: f32 = 2.0;

    /// Rotation angles supported by the rotate mode
    pub const ROTATION_ANGLES: [u16; 3] = [90, 180, 270];

    /// File extensions accepted for input images
    pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];
}

/// Gallery layout constants
pub mod gallery {
    /// Images shown per gallery row
    pub const IMAGES_PER_ROW: usize = 3;

    /// Fixed day-to-filenames table for the event photo gallery.
    /// Order within a day is the display order.
    pub const DAY_IMAGES: [(u8, [&str; 3]); 5] = [
        (1, ["img1.jpg", "img2.jpg", "img3.jpg"]),
        (2, ["img1.jpg", "img3.jpg", "img2.jpg"]),
        (3, ["img2.jpg", "img1.jpg", "img3.jpg"]),
        (4, ["img3.jpg", "img2.jpg", "img1.jpg"]),
        (5, ["img1.jpg", "img3.jpg", "img2.jpg"]),
    ];
}

/// Display and formatting constants
pub mod display {
    /// Emoji for the dataset summary section
    pub const DATASET_EMOJI: &str = "🎪";
    /// Emoji for count table sections
    pub const CHART_EMOJI: &str = "📊";
    /// Emoji for the feedback section
    pub const FEEDBACK_EMOJI: &str = "💬";
    /// Emoji for the gallery section
    pub const GALLERY_EMOJI: &str = "🖼️";
    /// Emoji for warnings
    pub const WARNING_EMOJI: &str = "⚠️";
    /// Emoji for the dashboard pointer line
    pub const DASHBOARD_EMOJI: &str = "📈";

    /// Max feedback words listed in terminal output before truncating
    pub const MAX_WORDS_TO_DISPLAY: usize = 10;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_constants() {
        assert_eq!(dataset::DATASET_SIZE, 250);
        assert_eq!(dataset::MIN_DAY, 1);
        assert_eq!(dataset::MAX_DAY, 5);
        assert_eq!(dataset::EVENTS.len(), 10);
        assert_eq!(dataset::COLLEGES.len(), 6);
        assert_eq!(dataset::STATES.len(), 6);
        assert_eq!(dataset::FEEDBACK_PHRASES.len(), 19);
    }

    #[test]
    fn test_vocabularies_have_no_duplicates() {
        for vocab in [
            dataset::EVENTS.as_slice(),
            dataset::COLLEGES.as_slice(),
            dataset::STATES.as_slice(),
            dataset::FEEDBACK_PHRASES.as_slice(),
        ] {
            let mut sorted: Vec<&str> = vocab.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), vocab.len());
        }
    }

    #[test]
    fn test_output_formats_constants() {
        assert_eq!(output_formats::TEXT, "text");
        assert_eq!(output_formats::JSON, "json");
        assert_eq!(output_formats::MINIMAL, "minimal");
        assert_eq!(output_formats::DEFAULT, "text");
        assert_eq!(output_formats::ALL.len(), 3);
    }

    #[test]
    fn test_imaging_constants() {
        assert_eq!(imaging::MIN_ENHANCE_FACTOR, 0.5);
        assert_eq!(imaging::MAX_ENHANCE_FACTOR, 2.0);
        assert_eq!(imaging::ROTATION_ANGLES, [90, 180, 270]);
    }

    #[test]
    fn test_gallery_table_covers_every_day() {
        let days: Vec<u8> = gallery::DAY_IMAGES.iter().map(|(d, _)| *d).collect();
        assert_eq!(days, vec![1, 2, 3, 4, 5]);
    }
}
