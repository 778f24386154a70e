// src/message.rs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{InboxError, Result};
use crate::utils::{parse_created, parse_header_date};

/// One captured message as MailHog serializes it. Envelope fields (`From`, `To`,
/// `Raw`, `MIME`) are ignored; the headers carry everything we read.
#[derive(Debug, Deserialize)]
struct RawMessage {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Created", default)]
    created: Option<String>,
    #[serde(rename = "Content")]
    content: RawContent,
}

#[derive(Debug, Deserialize)]
struct RawContent {
    #[serde(rename = "Headers", default)]
    headers: HashMap<String, Vec<String>>,
    #[serde(rename = "Body", default)]
    body: String,
}

/// Immutable, typed view of a captured email.
///
/// Header names are folded to lower case at decode time. Optional headers stay
/// `None` when the service did not send them, so "no Cc" and "empty Cc" differ.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageRecord {
    id: String,
    created_at: DateTime<Utc>,
    subject: Option<String>,
    to: Option<Vec<String>>,
    cc: Option<Vec<String>>,
    bcc: Option<Vec<String>>,
    from: Option<String>,
    reply_to: Option<String>,
    priority: Option<String>,
    body: String,
    headers: HashMap<String, Vec<String>>,
}

impl TryFrom<RawMessage> for MessageRecord {
    type Error = InboxError;

    fn try_from(raw: RawMessage) -> Result<Self> {
        let headers: HashMap<String, Vec<String>> = raw
            .content
            .headers
            .into_iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v))
            .collect();

        let first = |name: &str| headers.get(name).and_then(|v| v.first()).cloned();

        // Date header first, then MailHog's own receive stamp
        let created_at = first("date")
            .as_deref()
            .and_then(parse_header_date)
            .or_else(|| raw.created.as_deref().and_then(parse_created))
            .ok_or_else(|| {
                InboxError::Decode(format!("message {} has no usable Date or Created", raw.id))
            })?;

        Ok(MessageRecord {
            id: raw.id,
            created_at,
            subject: first("subject"),
            to: headers.get("to").cloned(),
            cc: headers.get("cc").cloned(),
            bcc: headers.get("bcc").cloned(),
            from: first("from"),
            reply_to: first("reply-to"),
            priority: first("x-priority"),
            body: raw.content.body,
            headers,
        })
    }
}

/// Decode the body of `GET /api/v1/messages`, keeping the server's order.
pub fn decode_messages(body: &str) -> Result<Vec<MessageRecord>> {
    let raw: Vec<RawMessage> =
        serde_json::from_str(body).map_err(|e| InboxError::Decode(e.to_string()))?;
    raw.into_iter().map(MessageRecord::try_from).collect()
}

/// Decode the body of `GET /api/v1/messages/{id}`.
pub fn decode_message(body: &str) -> Result<MessageRecord> {
    let raw: RawMessage =
        serde_json::from_str(body).map_err(|e| InboxError::Decode(e.to_string()))?;
    MessageRecord::try_from(raw)
}

fn first_of(values: &Option<Vec<String>>) -> Option<&str> {
    values.as_ref().and_then(|v| v.first()).map(String::as_str)
}

impl MessageRecord {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn subject(&self) -> Result<&str> {
        self.subject.as_deref().ok_or(InboxError::FieldMissing("Subject"))
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// First To value, exactly as the service joined it.
    pub fn to(&self) -> Result<&str> {
        first_of(&self.to).ok_or(InboxError::FieldMissing("To"))
    }

    /// Callers check `has_cc` first when Cc is optional for them.
    pub fn cc(&self) -> Result<&str> {
        first_of(&self.cc).ok_or(InboxError::FieldMissing("Cc"))
    }

    /// Bcc is usually stripped in transit, so absence yields `""`.
    pub fn bcc(&self) -> &str {
        first_of(&self.bcc).unwrap_or("")
    }

    pub fn has_cc(&self) -> bool {
        self.cc.is_some()
    }

    pub fn has_bcc(&self) -> bool {
        self.bcc.is_some()
    }

    /// To, Cc and Bcc joined with single spaces. Cc and Bcc only when present.
    pub fn recipients(&self) -> Result<String> {
        let mut parts = vec![self.to()?];
        if self.has_cc() {
            parts.push(self.cc()?);
        }
        if self.has_bcc() {
            parts.push(self.bcc());
        }
        Ok(parts.join(" "))
    }

    pub fn sender(&self) -> Result<&str> {
        self.from.as_deref().ok_or(InboxError::FieldMissing("From"))
    }

    pub fn reply_to(&self) -> Result<&str> {
        self.reply_to.as_deref().ok_or(InboxError::FieldMissing("Reply-To"))
    }

    pub fn priority(&self) -> Result<&str> {
        self.priority.as_deref().ok_or(InboxError::FieldMissing("X-Priority"))
    }

    /// First value of any header, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    pub(crate) fn to_values(&self) -> Option<&[String]> {
        self.to.as_deref()
    }

    pub(crate) fn cc_values(&self) -> Option<&[String]> {
        self.cc.as_deref()
    }

    pub(crate) fn bcc_values(&self) -> Option<&[String]> {
        self.bcc.as_deref()
    }
}
