// tests/harness/virtual_capture.rs
//
// In-memory MailHog for testing.
// Holds captured messages and renders them the way the v1 API does.

use serde_json::{json, Map, Value};

/// One captured message, built up with header helpers.
#[derive(Debug, Clone)]
pub struct CapturedMessage {
    pub id: String,
    pub created: String,
    pub headers: Vec<(String, Vec<String>)>,
    pub body: String,
}

impl CapturedMessage {
    /// Create a message with a To header and a `Date` header.
    pub fn new(id: &str, to: &str, date: &str) -> Self {
        Self {
            id: id.to_string(),
            created: "2024-01-01T00:00:00Z".to_string(),
            headers: vec![
                ("To".to_string(), vec![to.to_string()]),
                ("Date".to_string(), vec![date.to_string()]),
            ],
            body: String::new(),
        }
    }

    /// Builder method to set any header (replacing an earlier value).
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.retain(|(n, _)| n != name);
        self.headers.push((name.to_string(), vec![value.to_string()]));
        self
    }

    /// Builder method to drop a header entirely.
    pub fn without_header(mut self, name: &str) -> Self {
        self.headers.retain(|(n, _)| n != name);
        self
    }

    pub fn with_subject(self, subject: &str) -> Self {
        self.with_header("Subject", subject)
    }

    pub fn with_from(self, from: &str) -> Self {
        self.with_header("From", from)
    }

    pub fn with_cc(self, cc: &str) -> Self {
        self.with_header("Cc", cc)
    }

    pub fn with_bcc(self, bcc: &str) -> Self {
        self.with_header("Bcc", bcc)
    }

    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    /// MailHog JSON for this message. `with_body = false` mimics a listing that
    /// leaves the body out.
    pub fn to_json(&self, with_body: bool) -> Value {
        let headers: Map<String, Value> = self
            .headers
            .iter()
            .map(|(k, v)| (k.clone(), json!(v)))
            .collect();
        let body = if with_body { self.body.as_str() } else { "" };
        json!({
            "ID": self.id,
            "Created": self.created,
            "From": {"Relays": null, "Mailbox": "noreply", "Domain": "example.com", "Params": ""},
            "To": [],
            "Content": {
                "Headers": headers,
                "Body": body,
                "Size": self.body.len(),
                "MIME": null
            },
            "MIME": null,
            "Raw": {"From": "noreply@example.com", "To": [], "Data": "", "Helo": "localhost"}
        })
    }
}

/// Simulated capture service state.
#[derive(Debug, Default)]
pub struct VirtualCapture {
    messages: Vec<CapturedMessage>,
    /// When set, every request fails as if the service were down.
    pub offline: bool,
    /// When set, the list endpoint omits bodies; only single fetches carry them.
    pub listing_without_bodies: bool,
}

impl VirtualCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture a message; listing order is capture order.
    pub fn capture(&mut self, message: CapturedMessage) {
        self.messages.push(message);
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn list_json(&self) -> String {
        let items: Vec<Value> = self
            .messages
            .iter()
            .map(|m| m.to_json(!self.listing_without_bodies))
            .collect();
        Value::Array(items).to_string()
    }

    pub fn message_json(&self, id: &str) -> Option<String> {
        self.messages
            .iter()
            .find(|m| m.id == id)
            .map(|m| m.to_json(true).to_string())
    }
}
