use thiserror::Error;

/// Which field of an expiry entry failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryField {
    Owner,
    Label,
    Duration,
}

impl std::fmt::Display for ExpiryField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ExpiryField::Owner => "owner",
            ExpiryField::Label => "label",
            ExpiryField::Duration => "duration",
        };
        write!(f, "{}", name)
    }
}

/// Core tracker errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackError {
    #[error("\"{input}\" is not a valid time")]
    InvalidTimeValue { input: String },

    #[error("\"{input}\" is not a valid expiry entry: bad {field}")]
    InvalidExpiryEntry { input: String, field: ExpiryField },

    #[error("Invalid command: {reason}")]
    InvalidCommand { reason: String },
}

pub type Result<T> = std::result::Result<T, TrackError>;
