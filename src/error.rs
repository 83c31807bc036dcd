use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("city directory is empty")]
    Empty,
    #[error("failed to parse city data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate city name: {0}")]
    DuplicateName(String),
    #[error("city {name} has invalid coordinates ({lon}, {lat})")]
    InvalidCoords { name: String, lon: f64, lat: f64 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("hint zoom {hint} must be wider (smaller) than default zoom {default}")]
    HintZoom { hint: f64, default: f64 },
    #[error("hint after {hint_after} misses must be below max guesses {max}")]
    HintAfter { hint_after: u32, max: u32 },
    #[error("max guesses must be at least 1")]
    NoGuesses,
    #[error("unknown log level: {0}")]
    LogLevel(String),
}

/// Failure to construct the map at all. Asynchronous load failures are reported
/// as [`crate::map::MapOutcome::Failed`] instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    #[error("map container is not mounted")]
    NoContainer,
    #[error("{0}")]
    Construct(String),
}

/// Startup failures. Any of these means the game cannot start.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid city data: {0}")]
    Directory(#[from] DirectoryError),
}
