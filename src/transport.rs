// src/transport.rs
//
// Trait abstraction for the capture service's HTTP API.
// Production code talks to MailHog over ureq; tests plug in an in-memory server.

use base64::{engine::general_purpose::STANDARD, Engine};
use log::debug;
use std::io::Read;

use crate::cfg::config::Config;
use crate::error::{InboxError, Result};

pub const MESSAGES_PATH: &str = "/api/v1/messages";

pub fn message_path(id: &str) -> String {
    format!("{}/{}", MESSAGES_PATH, id)
}

/// The two HTTP verbs the inbox needs. Implementations return the raw response
/// body; any non-2xx answer is an error.
pub trait MailApi {
    /// GET `path`, returning the response body.
    fn get(&mut self, path: &str) -> Result<String>;

    /// DELETE `path`, returning the status code.
    fn delete(&mut self, path: &str) -> Result<u16>;
}

/// Blocking MailHog client. Every request is bounded by the configured timeout
/// and carries the configured extra headers.
pub struct UreqMailApi {
    agent: ureq::Agent,
    base_url: String,
    headers: Vec<(String, String)>,
}

impl UreqMailApi {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(config.timeout()).build();

        let mut headers: Vec<(String, String)> = config
            .headers
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        if let Some(user) = &config.username {
            let password = config.password.as_ref().map(|p| p.unsecure()).unwrap_or("");
            headers.push((
                "Authorization".to_string(),
                basic_auth_value(user, password),
            ));
        }

        debug!(
            "MailHog API at {} (timeout {}s, {} extra headers)",
            config.base_url(),
            config.timeout,
            headers.len()
        );

        UreqMailApi {
            agent,
            base_url: config.base_url(),
            headers,
        }
    }

    fn call(&self, method: &'static str, path: &str) -> Result<ureq::Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let mut request = self.agent.request(method, &url);
        for (name, value) in &self.headers {
            request = request.set(name, value);
        }

        request.call().map_err(|e| match e {
            ureq::Error::Status(code, _) => {
                InboxError::transport(method, path, format!("HTTP status {}", code))
            }
            ureq::Error::Transport(t) => InboxError::transport(method, path, t),
        })
    }
}

impl MailApi for UreqMailApi {
    fn get(&mut self, path: &str) -> Result<String> {
        // read uncapped; into_string stops at 10 MB
        let mut body = String::new();
        self.call("GET", path)?
            .into_reader()
            .read_to_string(&mut body)
            .map_err(|e| InboxError::transport("GET", path, e))?;
        Ok(body)
    }

    fn delete(&mut self, path: &str) -> Result<u16> {
        Ok(self.call("DELETE", path)?.status())
    }
}

/// `Basic base64(user:password)`
pub fn basic_auth_value(user: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", user, password)))
}
