// src/utils.rs

use chrono::{DateTime, TimeZone, Utc};
use log::debug;
use regex::{Regex, RegexBuilder};

use crate::error::{InboxError, Result};

/// Compile a body pattern. Accepts a bare regex (`A=\s*B\d+`) or a delimited one
/// (`/A=\s*B\d+/i`) whose trailing `i`, `m`, `s`, `x` flags become builder options.
/// Anything else after the last `/` means the pattern is bare: `/reset/token` is a
/// literal path.
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    let (source, flags) = split_delimited(pattern).unwrap_or((pattern, ""));
    debug!("Compiling pattern '{}' with flags '{}'", source, flags);

    let mut builder = RegexBuilder::new(source);
    for flag in flags.chars() {
        match flag {
            'i' => builder.case_insensitive(true),
            'm' => builder.multi_line(true),
            's' => builder.dot_matches_new_line(true),
            'x' => builder.ignore_whitespace(true),
            _ => continue,
        };
    }

    builder.build().map_err(|e| InboxError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

/// `/body/flags` -> `(body, flags)`; `None` unless every flag is one of `imsx`.
fn split_delimited(pattern: &str) -> Option<(&str, &str)> {
    let rest = pattern.strip_prefix('/')?;
    let end = rest.rfind('/')?;
    let flags = &rest[end + 1..];
    if flags.chars().all(|c| "imsx".contains(c)) {
        Some((&rest[..end], flags))
    } else {
        None
    }
}

/// Remove quoted-printable soft line breaks: every `=` followed by whitespace.
pub fn strip_soft_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '=' && chars.peek().is_some_and(|n| n.is_whitespace()) {
            while chars.peek().is_some_and(|n| n.is_whitespace()) {
                chars.next();
            }
            continue;
        }
        out.push(c);
    }
    out
}

/// Parse an RFC 2822 `Date` header value.
pub fn parse_header_date(value: &str) -> Option<DateTime<Utc>> {
    let secs = mailparse::dateparse(value).ok()?;
    Utc.timestamp_opt(secs, 0).single()
}

/// Parse the RFC 3339 `Created` stamp MailHog puts on every message.
pub fn parse_created(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
