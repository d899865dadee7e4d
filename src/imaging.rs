//! Ad-hoc image processing
//!
//! Applies one of six processing modes to a user-supplied JPEG or PNG.
//! All pixel work is delegated to the `image` crate; this module only
//! validates inputs and maps modes to library calls.

use image::DynamicImage;
use log::info;
use std::path::{Path, PathBuf};

use crate::core::constants::imaging::{
    ACCEPTED_EXTENSIONS, FIXED_CONTRAST_FACTOR, MAX_ENHANCE_FACTOR, MIN_ENHANCE_FACTOR,
    ROTATION_ANGLES,
};
use crate::core::error::{FestDashError, Result};

/// Supported exact rotation angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationAngle {
    Deg90,
    Deg180,
    Deg270,
}

impl RotationAngle {
    /// Parse a degree value, accepting only the supported angles.
    pub fn from_degrees(degrees: u16) -> Result<Self> {
        match degrees {
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 => Ok(Self::Deg270),
            other => Err(FestDashError::InvalidArgument(format!(
                "Rotation angle {other} is not supported. Expected one of: {ROTATION_ANGLES:?}."
            ))),
        }
    }

    pub fn degrees(&self) -> u16 {
        match self {
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }
}

/// One of the six processing modes offered by the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingMode {
    /// Pass the image through unchanged
    Original,
    /// Convert to single-channel luma
    Grayscale,
    /// Fixed-factor contrast boost
    EnhanceContrast,
    /// Exact rotation by 90/180/270 degrees
    Rotate(RotationAngle),
    /// Brightness, contrast, and sharpness factors, each in [0.5, 2.0]
    ColorGrading {
        brightness: f32,
        contrast: f32,
        sharpness: f32,
    },
    /// Grayscale followed by a 3x3 edge-finding convolution
    EdgeDetection,
}

impl ProcessingMode {
    /// Short name used in output file names and log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Grayscale => "grayscale",
            Self::EnhanceContrast => "contrast",
            Self::Rotate(_) => "rotate",
            Self::ColorGrading { .. } => "graded",
            Self::EdgeDetection => "edges",
        }
    }
}

/// Validate an enhancement factor against the slider range.
pub fn validate_factor(name: &str, value: f32) -> Result<()> {
    if !(MIN_ENHANCE_FACTOR..=MAX_ENHANCE_FACTOR).contains(&value) {
        return Err(FestDashError::InvalidArgument(format!(
            "{name} factor {value} is out of range. Expected a value between \
             {MIN_ENHANCE_FACTOR} and {MAX_ENHANCE_FACTOR}."
        )));
    }
    Ok(())
}

/// Load an image, accepting only JPEG and PNG files.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if !ACCEPTED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(FestDashError::InvalidArgument(format!(
            "Unsupported image type '{extension}'. Expected one of: {}.",
            ACCEPTED_EXTENSIONS.join(", ")
        )));
    }
    if !path.is_file() {
        return Err(FestDashError::FileNotFound(path.display().to_string()));
    }
    Ok(image::open(path)?)
}

/// Apply a processing mode to an image.
///
/// Grading factors are assumed validated; use [`validate_factor`] at the
/// input boundary.
pub fn apply(image: &DynamicImage, mode: &ProcessingMode) -> DynamicImage {
    match mode {
        ProcessingMode::Original => image.clone(),
        ProcessingMode::Grayscale => image.grayscale(),
        ProcessingMode::EnhanceContrast => apply_contrast(image, FIXED_CONTRAST_FACTOR),
        ProcessingMode::Rotate(angle) => match angle {
            RotationAngle::Deg90 => image.rotate90(),
            RotationAngle::Deg180 => image.rotate180(),
            RotationAngle::Deg270 => image.rotate270(),
        },
        ProcessingMode::ColorGrading {
            brightness,
            contrast,
            sharpness,
        } => {
            let graded = apply_brightness(image, *brightness);
            let graded = apply_contrast(&graded, *contrast);
            apply_sharpness(&graded, *sharpness)
        }
        ProcessingMode::EdgeDetection => {
            // FIND_EDGES: 3x3 Laplacian-style kernel on the luma channel
            const KERNEL: [f32; 9] = [-1.0, -1.0, -1.0, -1.0, 8.0, -1.0, -1.0, -1.0, -1.0];
            image.grayscale().filter3x3(&KERNEL)
        }
    }
}

/// Process a file end to end: load, apply, save.
///
/// Without an explicit output path the result lands next to the input as
/// `<stem>_<mode>.<ext>`. Returns the written path.
pub fn process_file(
    input: &Path,
    output: Option<&Path>,
    mode: &ProcessingMode,
) -> Result<PathBuf> {
    let image = load_image(input)?;
    let processed = apply(&image, mode);

    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => derive_output_path(input, mode.label()),
    };
    processed.save(&output_path)?;
    info!(
        "processed {} -> {} ({})",
        input.display(),
        output_path.display(),
        mode.label()
    );
    Ok(output_path)
}

fn derive_output_path(input: &Path, label: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let extension = input
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "png".to_string());
    input.with_file_name(format!("{stem}_{label}.{extension}"))
}

/// Multiplicative brightness: each RGB channel scales by the factor,
/// alpha untouched.
fn apply_brightness(image: &DynamicImage, factor: f32) -> DynamicImage {
    let mut buffer = image.to_rgba8();
    for pixel in buffer.pixels_mut() {
        for channel in 0..3 {
            let scaled = (f32::from(pixel[channel]) * factor).round();
            pixel[channel] = scaled.clamp(0.0, 255.0) as u8;
        }
    }
    DynamicImage::ImageRgba8(buffer)
}

/// Contrast factor mapped to the percentage adjustment the library expects:
/// 1.0 is neutral, 2.0 doubles the distance from the midpoint.
fn apply_contrast(image: &DynamicImage, factor: f32) -> DynamicImage {
    if factor == 1.0 {
        return image.clone();
    }
    image.adjust_contrast((factor - 1.0) * 100.0)
}

/// Sharpness via blur (factor < 1) or unsharp masking (factor > 1).
fn apply_sharpness(image: &DynamicImage, factor: f32) -> DynamicImage {
    if factor < 1.0 {
        image.blur((1.0 - factor) * 2.0)
    } else if factor > 1.0 {
        image.unsharpen((factor - 1.0) * 2.0, 1)
    } else {
        image.clone()
    }
}
