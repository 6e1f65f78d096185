//! Post-save message surfacing.

mod common;

use common::{sku_metabox, Fixture, POST_TYPE};
use metabox::{ItemId, UpdatedMessages};
use metabox_host::TransientStore;
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;
use std::time::Duration;

fn defaults() -> UpdatedMessages {
    BTreeMap::from([
        (
            POST_TYPE.to_string(),
            BTreeMap::from([("1".to_string(), "Product updated.".to_string())]),
        ),
        ("page".to_string(), BTreeMap::from([("1".to_string(), "Page updated.".to_string())])),
    ])
}

#[test]
fn sku_scenario_end_to_end() {
    let fx = Fixture::new();
    let host = fx.mem.host();
    let metabox = sku_metabox();

    let outcome = metabox.persist(&host, fx.item, &fx.submission().with("sku", ""), fx.actor);
    assert_eq!(
        outcome.report().unwrap().error_message.as_deref(),
        Some("SKU cannot be empty<br/>")
    );
    assert_eq!(
        metabox.resolve_display_message(&host, fx.item).as_deref(),
        Some("Saving failed.<br/>SKU cannot be empty<br/>")
    );
}

#[test]
fn message_is_returned_exactly_once() {
    let fx = Fixture::new();
    let host = fx.mem.host();
    let metabox = sku_metabox();
    metabox.persist(&host, fx.item, &fx.submission(), fx.actor);

    assert!(metabox.resolve_display_message(&host, fx.item).is_some());
    assert_eq!(metabox.resolve_display_message(&host, fx.item), None);
}

#[test]
fn no_message_without_failed_save() {
    let fx = Fixture::new();
    let host = fx.mem.host();
    assert_eq!(sku_metabox().resolve_display_message(&host, fx.item), None);
}

#[test]
fn messages_are_scoped_per_item() {
    let fx = Fixture::new();
    let host = fx.mem.host();
    let metabox = sku_metabox();
    metabox.persist(&host, fx.item, &fx.submission(), fx.actor);

    assert_eq!(metabox.resolve_display_message(&host, ItemId::new()), None);
    assert!(metabox.resolve_display_message(&host, fx.item).is_some());
}

#[test]
fn expired_message_is_not_shown() {
    let fx = Fixture::new();
    let host = fx.mem.host();
    let metabox = sku_metabox();
    host.transients
        .set(&metabox.transient_key(fx.item), "stale", Duration::ZERO)
        .unwrap();
    assert_eq!(metabox.resolve_display_message(&host, fx.item), None);
}

#[test]
fn messages_replace_post_type_table_at_requested_index() {
    let fx = Fixture::new();
    let host = fx.mem.host();
    let metabox = sku_metabox();
    metabox.persist(&host, fx.item, &fx.submission(), fx.actor);

    let messages = metabox.messages(&host, defaults(), fx.item, Some("6"));
    assert_eq!(
        messages[POST_TYPE],
        BTreeMap::from([(
            "6".to_string(),
            "Saving failed.<br/>SKU cannot be empty<br/>".to_string()
        )])
    );
    assert_eq!(messages["page"]["1"], "Page updated.");
}

#[test]
fn messages_default_to_index_zero() {
    let fx = Fixture::new();
    let host = fx.mem.host();
    let metabox = sku_metabox();
    metabox.persist(&host, fx.item, &fx.submission(), fx.actor);

    let messages = metabox.messages(&host, UpdatedMessages::new(), fx.item, None);
    assert!(messages[POST_TYPE].contains_key("0"));
}

#[test]
fn messages_fall_through_without_error() {
    let fx = Fixture::new();
    let host = fx.mem.host();
    let messages = sku_metabox().messages(&host, defaults(), fx.item, Some("1"));
    assert_eq!(messages, defaults());
}

#[test]
fn messages_consume_the_error() {
    let fx = Fixture::new();
    let host = fx.mem.host();
    let metabox = sku_metabox();
    metabox.persist(&host, fx.item, &fx.submission(), fx.actor);

    metabox.messages(&host, defaults(), fx.item, Some("1"));
    let second = metabox.messages(&host, defaults(), fx.item, Some("1"));
    assert_eq!(second, defaults());
}
