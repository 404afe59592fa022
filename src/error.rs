use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColourError {
    /// Malformed hex string or unknown colour name.
    #[error("Invalid colour: {0}")]
    InvalidInput(String),

    /// Unknown component name or WCAG level.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, ColourError>;
