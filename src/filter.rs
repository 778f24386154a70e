// src/filter.rs

use log::debug;

use crate::message::MessageRecord;

/// Messages addressed to `address`, in input order.
///
/// The match is a cascade, not a union: a message carrying Bcc is judged on Bcc
/// alone, otherwise one carrying Cc on Cc alone, and only then on To. An address
/// that sits in To of a message that also has Cc is therefore not selected.
pub fn select_for_recipient(messages: &[MessageRecord], address: &str) -> Vec<MessageRecord> {
    let bracketed = format!("<{}>", address);

    let selected: Vec<MessageRecord> = messages
        .iter()
        .filter(|msg| addressed_to(msg, address, &bracketed))
        .cloned()
        .collect();

    debug!(
        "Selected {} of {} messages for recipient {}",
        selected.len(),
        messages.len(),
        address
    );
    selected
}

fn addressed_to(msg: &MessageRecord, address: &str, bracketed: &str) -> bool {
    if let Some(bcc) = msg.bcc_values() {
        let first = bcc.first().map(String::as_str).unwrap_or("");
        return first.contains(address) || first.contains(bracketed);
    }

    if let Some(cc) = msg.cc_values() {
        // exact membership only; "Name <a@x.com>" does not count as a@x.com
        let first = cc.first().map(String::as_str).unwrap_or("");
        return split_addresses(first).any(|entry| entry == address || entry == bracketed);
    }

    msg.to_values()
        .and_then(|to| to.first())
        .is_some_and(|to| to.contains(address))
}

fn split_addresses(value: &str) -> impl Iterator<Item = &str> {
    value
        .split([',', ';'])
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
}
