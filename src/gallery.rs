//! Day-indexed event photo gallery
//!
//! Resolves the fixed day-to-filenames table against a gallery directory.
//! A missing file becomes a per-slot warning, never a failed render.

use log::warn;
use std::path::{Path, PathBuf};

use crate::core::constants::dataset::{MAX_DAY, MIN_DAY};
use crate::core::constants::gallery::DAY_IMAGES;
use crate::core::error::{FestDashError, Result};

/// One gallery slot: either a resolved image file or a missing-file warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GallerySlot {
    /// The image file exists at this path
    Found(PathBuf),
    /// The configured filename does not exist; carries the warning text
    Missing { file_name: String, warning: String },
}

impl GallerySlot {
    /// Name of the configured file, found or not.
    pub fn file_name(&self) -> String {
        match self {
            GallerySlot::Found(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            GallerySlot::Missing { file_name, .. } => file_name.clone(),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, GallerySlot::Missing { .. })
    }
}

/// Ordered image filenames configured for a day.
pub fn images_for_day(day: u8) -> Result<&'static [&'static str]> {
    DAY_IMAGES
        .iter()
        .find(|(d, _)| *d == day)
        .map(|(_, files)| files.as_slice())
        .ok_or_else(|| {
            FestDashError::InvalidArgument(format!(
                "Day {day} is outside the festival range {MIN_DAY}-{MAX_DAY}"
            ))
        })
}

/// Resolve a day's gallery slots against the gallery directory.
///
/// Slots resolve independently: one missing file is logged and carried as a
/// `Missing` slot while the remaining slots still resolve.
pub fn collect_slots(day: u8, gallery_dir: &Path) -> Result<Vec<GallerySlot>> {
    let slots = images_for_day(day)?
        .iter()
        .map(|file_name| {
            let path = gallery_dir.join(file_name);
            if path.is_file() {
                GallerySlot::Found(path)
            } else {
                let warning = format!("Image {file_name} not found.");
                warn!("day {day}: {warning}");
                GallerySlot::Missing {
                    file_name: file_name.to_string(),
                    warning,
                }
            }
        })
        .collect();
    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_images_for_day_valid_days() {
        for day in 1..=5 {
            let files = images_for_day(day).unwrap();
            assert_eq!(files.len(), 3);
        }
    }

    #[test]
    fn test_images_for_day_out_of_range() {
        assert!(images_for_day(0).is_err());
        assert!(images_for_day(6).is_err());
    }

    #[test]
    fn test_images_for_day_ordering() {
        assert_eq!(
            images_for_day(4).unwrap(),
            &["img3.jpg", "img2.jpg", "img1.jpg"]
        );
    }

    #[test]
    fn test_collect_slots_all_missing() {
        let dir = tempfile::tempdir().unwrap();
        let slots = collect_slots(1, dir.path()).unwrap();

        assert_eq!(slots.len(), 3);
        assert!(slots.iter().all(|s| s.is_missing()));
        match &slots[0] {
            GallerySlot::Missing { file_name, warning } => {
                assert_eq!(file_name, "img1.jpg");
                assert_eq!(warning, "Image img1.jpg not found.");
            }
            other => panic!("expected missing slot, got {other:?}"),
        }
    }

    #[test]
    fn test_collect_slots_partial_availability() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("img2.jpg"), b"not a real jpeg").unwrap();

        let slots = collect_slots(1, dir.path()).unwrap();

        // Day 1 order is img1, img2, img3; only img2 exists.
        assert!(slots[0].is_missing());
        assert!(!slots[1].is_missing());
        assert!(slots[2].is_missing());
        assert_eq!(slots[1].file_name(), "img2.jpg");
    }

    #[test]
    fn test_collect_slots_invalid_day() {
        let dir = tempfile::tempdir().unwrap();
        assert!(collect_slots(9, dir.path()).is_err());
    }
}
