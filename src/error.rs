use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ClimateError {
    #[error("Listener '{listener}' failed: {reason}")]
    ListenerFailed { listener: String, reason: String },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl ClimateError {
    /// Build a listener failure from any displayable reason.
    pub fn listener_failed(listener: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::ListenerFailed {
            listener: listener.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClimateError>;
