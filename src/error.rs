// src/error.rs

use thiserror::Error;

/// Errors raised while reading a mail-capture inbox.
///
/// Every variant is terminal for the assertion step that hit it; nothing is retried.
#[derive(Debug, Error)]
pub enum InboxError {
    /// Network failure, timeout or non-2xx answer from the capture service.
    #[error("{method} {path} failed: {reason}")]
    Transport {
        method: &'static str,
        path: String,
        reason: String,
    },

    /// An accessor was called for a header the message does not carry.
    #[error("message has no {0} header")]
    FieldMissing(&'static str),

    /// The unread queue has nothing left to open.
    #[error("no unread messages left in the inbox")]
    EmptyInbox,

    /// Pattern extraction found nothing in the message body.
    #[error("no match for pattern {0} in message body")]
    NoMatch(String),

    /// The pattern handed to `grab_field` does not compile.
    #[error("invalid pattern {pattern}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// The service answered with something that is not a MailHog message payload.
    #[error("failed to decode messages: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, InboxError>;

impl InboxError {
    pub(crate) fn transport(method: &'static str, path: &str, reason: impl ToString) -> Self {
        InboxError::Transport {
            method,
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }
}
