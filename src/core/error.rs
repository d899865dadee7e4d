use std::fmt;

/// Comprehensive error types for festdash operations
#[derive(Debug)]
pub enum FestDashError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Invalid argument error
    InvalidArgument(String),

    /// File not found error
    FileNotFound(String),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// Image decoding or encoding error
    Image(image::ImageError),

    /// Dashboard generation error
    Dashboard(String),
}

impl fmt::Display for FestDashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FestDashError::Io(err) => write!(f, "IO error: {err}"),
            FestDashError::Config(msg) => write!(f, "Configuration error: {msg}"),
            FestDashError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            FestDashError::FileNotFound(path) => write!(f, "File not found: {path}"),
            FestDashError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            FestDashError::Image(err) => write!(f, "Image error: {err}"),
            FestDashError::Dashboard(msg) => write!(f, "Dashboard error: {msg}"),
        }
    }
}

impl std::error::Error for FestDashError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FestDashError::Io(err) => Some(err),
            FestDashError::TomlParsing(err) => Some(err),
            FestDashError::Image(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FestDashError {
    fn from(err: std::io::Error) -> Self {
        FestDashError::Io(err)
    }
}

impl From<toml::de::Error> for FestDashError {
    fn from(err: toml::de::Error) -> Self {
        FestDashError::TomlParsing(err)
    }
}

impl From<image::ImageError> for FestDashError {
    fn from(err: image::ImageError) -> Self {
        FestDashError::Image(err)
    }
}

/// Type alias for Results using FestDashError
pub type Result<T> = std::result::Result<T, FestDashError>;
