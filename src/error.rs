use thiserror::Error;

use crate::models::PrayerType;

pub type Result<T> = std::result::Result<T, NawafilError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NawafilError {
    /// A clock string that is not `HH:MM`, optionally followed by a zone token.
    #[error("invalid time '{value}': {reason}")]
    InvalidTime { value: String, reason: String },

    /// One of the six anchors failed validation at the input boundary.
    #[error("invalid {field} time: {reason}")]
    InvalidInput { field: PrayerType, reason: String },

    #[error("prayer calculation failed: {0}")]
    Calculation(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl NawafilError {
    pub fn invalid_input(field: PrayerType, reason: impl Into<String>) -> Self {
        NawafilError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// The anchor this error refers to, if any.
    pub fn field(&self) -> Option<PrayerType> {
        match self {
            NawafilError::InvalidInput { field, .. } => Some(*field),
            _ => None,
        }
    }
}
