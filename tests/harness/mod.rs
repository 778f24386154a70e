// tests/harness/mod.rs
//
// Integration testing harness for mailhog-inbox.
// Provides an in-memory MailHog and a recording MailApi over it.

pub mod mock_api;
pub mod virtual_capture;

pub use mock_api::{MockMailApi, RecordedRequest};
pub use virtual_capture::{CapturedMessage, VirtualCapture};
