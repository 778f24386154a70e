// src/client.rs

use log::{debug, info};

use crate::cfg::config::Config;
use crate::error::{InboxError, Result};
use crate::filter::select_for_recipient;
use crate::message::{decode_message, decode_messages, MessageRecord};
use crate::store::InboxStore;
use crate::transport::{message_path, MailApi, UreqMailApi, MESSAGES_PATH};
use crate::utils::{compile_pattern, strip_soft_breaks};

/// One test's view of the capture service. Build one per test run and hand it to
/// whatever needs to look at mail; nothing here is global.
pub struct InboxClient<A: MailApi> {
    api: A,
    store: InboxStore,
    delete_after_scenario: bool,
}

impl InboxClient<UreqMailApi> {
    pub fn from_config(config: &Config) -> Self {
        InboxClient::new(UreqMailApi::new(config))
            .delete_after_scenario(config.delete_emails_after_scenario)
    }
}

impl<A: MailApi> InboxClient<A> {
    pub fn new(api: A) -> Self {
        InboxClient {
            api,
            store: InboxStore::new(),
            delete_after_scenario: false,
        }
    }

    pub fn delete_after_scenario(mut self, enabled: bool) -> Self {
        self.delete_after_scenario = enabled;
        self
    }

    pub fn store(&self) -> &InboxStore {
        &self.store
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Replace the store contents with every captured message, newest first.
    ///
    /// Equal timestamps keep the order the service listed them in. If the request
    /// or decoding fails the store is left as it was.
    pub fn fetch_all(&mut self) -> Result<&[MessageRecord]> {
        let body = self.api.get(MESSAGES_PATH)?;
        let mut messages = decode_messages(&body)?;
        messages.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        debug!("Fetched {} messages", messages.len());

        self.store.set_fetched(messages.clone());
        self.store.set_view(messages);
        Ok(self.store.current_view())
    }

    /// Fetch, then narrow the view to messages addressed to `address`.
    pub fn select_inbox_for(&mut self, address: &str) -> Result<&[MessageRecord]> {
        self.fetch_all()?;
        let selected = select_for_recipient(self.store.fetched_all(), address);
        self.store.set_view(selected);
        Ok(self.store.current_view())
    }

    pub fn delete_all(&mut self) -> Result<()> {
        let status = self.api.delete(MESSAGES_PATH)?;
        info!("Deleted all captured messages (HTTP {})", status);
        Ok(())
    }

    /// Number of captured messages, ignoring any recipient filter.
    pub fn count(&mut self) -> Result<usize> {
        self.fetch_all()?;
        Ok(self.store.fetched_all().len())
    }

    /// Load the full content of the next unread message by id and open it. The
    /// message leaves the unread queue only once that load succeeded.
    pub fn open_next(&mut self) -> Result<&MessageRecord> {
        let id = self.store.peek_next_unread()?.id().to_string();
        let body = self.api.get(&message_path(&id))?;
        let full = decode_message(&body)?;
        self.store.pop_next_unread()?;
        Ok(self.store.set_opened(full))
    }

    /// The opened message, opening the next unread one first when `force_next`
    /// is set or nothing has been opened yet.
    pub fn opened(&mut self, force_next: bool) -> Result<&MessageRecord> {
        if force_next || self.store.opened_message().is_none() {
            return self.open_next();
        }
        self.store.opened_message().ok_or(InboxError::EmptyInbox)
    }

    /// Extract `pattern` from the body of a message sent to `address`, with
    /// quoted-printable soft breaks removed from the match.
    ///
    /// The message searched is the last one of the newest-first view, i.e. the
    /// oldest match, not the most recent one.
    pub fn grab_field(&mut self, address: &str, pattern: &str) -> Result<String> {
        let re = compile_pattern(pattern)?;
        self.select_inbox_for(address)?;

        let message = self
            .store
            .current_view()
            .last()
            .ok_or_else(|| InboxError::NoMatch(pattern.to_string()))?;
        debug!("Grabbing '{}' from message {}", pattern, message.id());

        re.find(message.body())
            .map(|m| strip_soft_breaks(m.as_str()))
            .ok_or_else(|| InboxError::NoMatch(pattern.to_string()))
    }

    /// After-scenario hook: purge the service if configured, then forget the
    /// session state.
    pub fn finish_scenario(&mut self) -> Result<()> {
        if self.delete_after_scenario {
            self.delete_all()?;
        }
        self.reset();
        Ok(())
    }

    pub fn reset(&mut self) {
        self.store.reset();
    }
}
