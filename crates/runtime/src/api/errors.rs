//! Error types surfaced by the runtime API.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("level of {width}x{height} pixels has no area to spawn into")]
    EmptyLevel { width: u32, height: u32 },
}

/// Failure to parse an intent script. `index` is the zero-based token position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("token {index} `{token}`: unknown command")]
    UnknownCommand { index: usize, token: String },

    #[error("token {index} `{token}`: repeat count must be a positive integer")]
    InvalidRepeat { index: usize, token: String },

    #[error("token {index} `{token}`: expected {expected} integer arguments")]
    InvalidArguments {
        index: usize,
        token: String,
        expected: usize,
    },

    #[error("unbalanced parentheses in `{token}`")]
    UnbalancedParens { token: String },
}
