use thiserror::Error;

/// Error type for invalid operations.
#[derive(Error, Debug)]
pub enum WoodCarbonError {
    #[error("{0}")]
    Error(String),
    #[error("Invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
    #[error("Could not parse configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl WoodCarbonError {
    /// Build an [`WoodCarbonError::InvalidParameter`] for `name` = `value`
    pub fn invalid(
        name: &'static str,
        value: impl std::fmt::Display,
        reason: &'static str,
    ) -> Self {
        WoodCarbonError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}

/// Convenience type for `Result<T, WoodCarbonError>`.
pub type WoodCarbonResult<T> = Result<T, WoodCarbonError>;
