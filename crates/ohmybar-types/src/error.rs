use std::fmt;

/// Result type for ohmybar-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A configuration value is not one of the accepted variants
    UnknownVariant { kind: &'static str, value: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownVariant { kind, value } => {
                write!(f, "Unknown {}: {}", kind, value)
            }
        }
    }
}

impl std::error::Error for Error {}
