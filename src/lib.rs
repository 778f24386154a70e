// src/lib.rs
//
// Library entry point for mailhog-inbox.
// Re-exports the inbox client and its collaborators for test suites.

pub mod cfg;
pub mod client;
pub mod error;
pub mod filter;
pub mod message;
pub mod store;
pub mod transport;
pub mod utils;

pub use client::InboxClient;
pub use error::InboxError;
pub use message::MessageRecord;
pub use transport::{MailApi, UreqMailApi};
