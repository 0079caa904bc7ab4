#![allow(dead_code)]

use qubestr_policy::{HookChain, Roster};
use qubestr_types::{Event, RequestContext, Tag};
use std::sync::Arc;

pub fn operator_key() -> String {
    "5c".repeat(32)
}

pub fn outsider_key() -> String {
    "9e".repeat(32)
}

pub fn node_key() -> String {
    "07".repeat(32)
}

pub fn chain() -> HookChain {
    HookChain::standard(Arc::new(Roster::from_keys([operator_key()])))
}

pub fn as_operator() -> RequestContext {
    RequestContext::authenticated(operator_key())
}

pub fn as_outsider() -> RequestContext {
    RequestContext::authenticated(outsider_key())
}

pub fn as_node() -> RequestContext {
    RequestContext::authenticated(node_key())
}

pub fn build_event(kind: u32, author: &str, tags: Vec<Tag>, content: &str) -> Event {
    Event {
        id: "ee".repeat(32),
        pubkey: author.to_string(),
        created_at: 1_717_000_000,
        kind,
        tags,
        content: content.to_string(),
        sig: "00".repeat(64),
    }
}

pub fn signal_tags(action: &str) -> Vec<Tag> {
    vec![
        Tag::new(["d", "hyperqube"]),
        Tag::new(["version", "v2.0.0"]),
        Tag::new(["hash", "b3c1f0"]),
        Tag::new(["network", "mainnet"]),
        Tag::new(["action", action]),
    ]
}

pub fn upgrade_signal() -> Event {
    build_event(
        33321,
        &operator_key(),
        signal_tags("upgrade"),
        "Please upgrade to v2.0.0",
    )
}

pub fn reboot_signal() -> Event {
    let mut tags = signal_tags("reboot");
    tags.push(Tag::new(["genesis_url", "https://example.org/genesis.json"]));
    tags.push(Tag::new(["required_by", "1720000000"]));
    build_event(33321, &operator_key(), tags, "Network reboot scheduled")
}

pub fn signal_reference() -> String {
    format!("33321:{}:hyperqube", operator_key())
}

pub fn manager_tags(status: &str) -> Vec<Tag> {
    vec![
        Tag::new(["a".to_string(), signal_reference()]),
        Tag::new(["version", "v2.0.0"]),
        Tag::new(["network", "mainnet"]),
        Tag::new(["action", "upgrade"]),
        Tag::new(["status", status]),
        Tag::new(["node_id", "node-17"]),
        Tag::new(["action_at", "1717000500"]),
    ]
}

pub fn success_report() -> Event {
    build_event(
        3333,
        &node_key(),
        manager_tags("success"),
        "Upgraded to v2.0.0",
    )
}

/// Returns a copy of `event` without any tag named `name`.
pub fn without_tag(event: &Event, name: &str) -> Event {
    let mut event = event.clone();
    event.tags.retain(|tag| tag.name() != Some(name));
    event
}

/// Returns a copy of `event` with the first tag named `name` set to `value`.
pub fn with_tag_value(event: &Event, name: &str, value: &str) -> Event {
    let mut event = event.clone();
    if let Some(tag) = event.tags.iter_mut().find(|tag| tag.name() == Some(name)) {
        *tag = Tag::new([name, value]);
    }
    event
}
