// src/store.rs

use log::debug;
use std::collections::VecDeque;

use crate::error::{InboxError, Result};
use crate::message::MessageRecord;

/// Session state for one test: what was fetched, what is in view, what is left
/// to open, and what is open right now.
#[derive(Debug, Default)]
pub struct InboxStore {
    fetched_all: Vec<MessageRecord>,
    current_view: Vec<MessageRecord>,
    unread_queue: VecDeque<MessageRecord>,
    opened_message: Option<MessageRecord>,
}

impl InboxStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the full set. The view is left alone; callers follow with `set_view`.
    pub fn set_fetched(&mut self, messages: Vec<MessageRecord>) {
        debug!("Storing {} fetched messages", messages.len());
        self.fetched_all = messages;
    }

    /// Replace the view and refill the unread queue from it.
    pub fn set_view(&mut self, messages: Vec<MessageRecord>) {
        debug!("Setting inbox view to {} messages", messages.len());
        self.unread_queue = messages.iter().cloned().collect();
        self.current_view = messages;
    }

    pub fn pop_next_unread(&mut self) -> Result<MessageRecord> {
        self.unread_queue.pop_front().ok_or(InboxError::EmptyInbox)
    }

    /// Head of the unread queue, left in place.
    pub fn peek_next_unread(&self) -> Result<&MessageRecord> {
        self.unread_queue.front().ok_or(InboxError::EmptyInbox)
    }

    pub fn set_opened(&mut self, message: MessageRecord) -> &MessageRecord {
        debug!("Opened message {}", message.id());
        self.opened_message.insert(message)
    }

    pub fn opened_message(&self) -> Option<&MessageRecord> {
        self.opened_message.as_ref()
    }

    pub fn fetched_all(&self) -> &[MessageRecord] {
        &self.fetched_all
    }

    pub fn current_view(&self) -> &[MessageRecord] {
        &self.current_view
    }

    pub fn unread_count(&self) -> usize {
        self.unread_queue.len()
    }

    /// Back to the state of a freshly created store, opened message included.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
