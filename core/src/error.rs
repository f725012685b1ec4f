use crate::api::ApiError;
use thiserror::Error;

/// Failures that abort a stats request. Each one produces a single chat
/// error message and no partial report.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Invalid game :L")]
    InvalidGame(String),
    #[error("{0}")]
    ApiFailure(String),
    #[error("API returned empty body. Is this a real player [{0}]?")]
    PlayerNotFound(String),
    #[error("No API key set. Use /setkey <key> first.")]
    NoApiKey,
}

impl From<ApiError> for StatsError {
    fn from(err: ApiError) -> Self {
        StatsError::ApiFailure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_chat_output() {
        assert_eq!(StatsError::InvalidGame("chess".into()).to_string(), "Invalid game :L");
        assert_eq!(
            StatsError::PlayerNotFound("nobody".into()).to_string(),
            "API returned empty body. Is this a real player [nobody]?"
        );
        let err: StatsError = ApiError::Rejected("Key throttle".into()).into();
        assert_eq!(err.to_string(), "Key throttle");
    }
}
