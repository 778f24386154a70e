// tests/harness/mock_api.rs
//
// Mock MailApi for testing.
// Serves a VirtualCapture and records every request for verification.

use std::sync::{Arc, RwLock};

use mailhog_inbox::error::{InboxError, Result};
use mailhog_inbox::transport::{MailApi, MESSAGES_PATH};

use crate::harness::virtual_capture::VirtualCapture;

/// Recorded request types for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedRequest {
    Get { path: String },
    Delete { path: String },
}

impl RecordedRequest {
    pub fn is_get(&self, expected: &str) -> bool {
        matches!(self, RecordedRequest::Get { path } if path == expected)
    }

    pub fn is_delete(&self, expected: &str) -> bool {
        matches!(self, RecordedRequest::Delete { path } if path == expected)
    }
}

/// Mock MailHog API operating against a shared VirtualCapture.
pub struct MockMailApi {
    capture: Arc<RwLock<VirtualCapture>>,
    requests: Arc<RwLock<Vec<RecordedRequest>>>,
}

impl MockMailApi {
    pub fn new(capture: Arc<RwLock<VirtualCapture>>) -> Self {
        Self {
            capture,
            requests: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// All requests made so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.read().unwrap().clone()
    }

    fn record(&self, request: RecordedRequest) {
        self.requests.write().unwrap().push(request);
    }
}

impl MailApi for MockMailApi {
    fn get(&mut self, path: &str) -> Result<String> {
        self.record(RecordedRequest::Get {
            path: path.to_string(),
        });

        let capture = self.capture.read().unwrap();
        if capture.offline {
            return Err(InboxError::Transport {
                method: "GET",
                path: path.to_string(),
                reason: "connection refused".to_string(),
            });
        }

        if path == MESSAGES_PATH {
            return Ok(capture.list_json());
        }

        let id = path
            .strip_prefix(MESSAGES_PATH)
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or_default();
        capture.message_json(id).ok_or_else(|| InboxError::Transport {
            method: "GET",
            path: path.to_string(),
            reason: "HTTP status 404".to_string(),
        })
    }

    fn delete(&mut self, path: &str) -> Result<u16> {
        self.record(RecordedRequest::Delete {
            path: path.to_string(),
        });

        let mut capture = self.capture.write().unwrap();
        if capture.offline {
            return Err(InboxError::Transport {
                method: "DELETE",
                path: path.to_string(),
                reason: "connection refused".to_string(),
            });
        }
        capture.clear();
        Ok(200)
    }
}
