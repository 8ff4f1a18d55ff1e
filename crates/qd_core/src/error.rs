use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed in the middle of a turn frame")]
    UnexpectedEof,

    #[error("malformed input line {line:?}: {reason}")]
    MalformedInput { line: String, reason: String },

    #[error("invalid team id: {0} (expected 0 or 1)")]
    InvalidTeamId(i64),

    #[error("controlled wizard {id} missing from the entity list")]
    MissingWizard { id: i32 },

    #[error("no snaffle remains in play")]
    NoSnafflesInPlay,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BotError {
    pub fn malformed(line: &str, reason: impl Into<String>) -> Self {
        BotError::MalformedInput { line: line.to_string(), reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
