// crates/friends-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading a friend list or planning invitations.
#[derive(Debug, Error)]
pub enum FriendsError {
    #[error("friend list not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unreadable line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed friend record on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("multiple users with same user_id {0}")]
    DuplicateUserId(i64),

    #[error("invalid {field} for user_id {user_id}: {value:?}")]
    InvalidCoordinate {
        user_id: i64,
        field: &'static str,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, FriendsError>;
