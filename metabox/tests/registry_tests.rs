//! Hook registration and event dispatch.

mod common;

use common::{product_metabox, sku_metabox, Fixture, POST_TYPE};
use metabox::{
    Context, FieldDescriptor, FieldSchema, MetaBox, MetaBoxConfig, MetaBoxError, MetaBoxRegistry,
    PersistOutcome, Priority, SkipReason, TransformRegistry, UpdatedMessages,
};
use metabox_host::{Hook, HookRegistry};
use pretty_assertions::assert_eq;
use std::io::Write;

// ================================================================
// Registration
// ================================================================

#[test]
fn construction_registers_nothing() {
    let fx = Fixture::new();
    let _metabox = sku_metabox();
    assert!(fx.mem.hooks.handlers(Hook::SavePost).is_empty());
}

#[test]
fn register_attaches_three_handlers() {
    let fx = Fixture::new();
    let metabox = sku_metabox();
    metabox.register(fx.mem.hooks.as_ref());
    assert_eq!(fx.mem.hooks.handlers(Hook::AddMetaBoxes), vec!["sku_box::add_meta_boxes"]);
    assert_eq!(fx.mem.hooks.handlers(Hook::SavePost), vec!["sku_box::save_post"]);
    assert_eq!(
        fx.mem.hooks.handlers(Hook::PostUpdatedMessages),
        vec!["sku_box::post_updated_messages"]
    );

    metabox.unregister(fx.mem.hooks.as_ref());
    assert!(fx.mem.hooks.handlers(Hook::SavePost).is_empty());
}

#[test]
fn add_meta_boxes_announces_config() {
    let fx = Fixture::new();
    let config = MetaBoxConfig::new("side_box", POST_TYPE)
        .with_title("Details")
        .with_context(Context::Side)
        .with_priority(Priority::Low);
    MetaBox::new(config.clone(), FieldSchema::default()).add_meta_boxes(fx.mem.screen.as_ref());
    assert_eq!(fx.mem.screen.meta_boxes(), vec![config]);
}

#[test]
fn registry_rejects_duplicate_ids() {
    let fx = Fixture::new();
    let mut registry = MetaBoxRegistry::new(fx.mem.host());
    registry.add(sku_metabox()).unwrap();
    let err = registry.add(sku_metabox()).unwrap_err();
    assert!(matches!(err, MetaBoxError::DuplicateMetaBox(ref id) if id == "sku_box"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn registry_remove_detaches_handlers() {
    let fx = Fixture::new();
    let mut registry = MetaBoxRegistry::new(fx.mem.host());
    registry.add(sku_metabox()).unwrap();
    let removed = registry.remove("sku_box").unwrap();
    assert_eq!(removed.id(), "sku_box");
    assert!(registry.is_empty());
    assert!(!fx.mem.hooks.is_registered(Hook::SavePost, "sku_box::save_post"));
    assert!(registry.remove("sku_box").is_none());
}

// ================================================================
// Dispatch
// ================================================================

#[test]
fn add_meta_boxes_places_each_attached_box() {
    let fx = Fixture::new();
    let mut registry = MetaBoxRegistry::new(fx.mem.host());
    registry.add(sku_metabox()).unwrap();
    registry.add(product_metabox()).unwrap();
    registry.add_meta_boxes();
    let ids: Vec<String> = fx.mem.screen.meta_boxes().into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["sku_box", "product_attributes"]);
}

#[test]
fn save_dispatches_to_attached_boxes() {
    let fx = Fixture::new();
    let mut registry = MetaBoxRegistry::new(fx.mem.host());
    registry.add(sku_metabox()).unwrap();
    registry.add(product_metabox()).unwrap();

    let results = registry.save(fx.item, &fx.submission().with("sku", "A-1"), fx.actor);
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|(_, o)| matches!(o, PersistOutcome::Saved(_))));
    assert_eq!(fx.mem.attributes.snapshot(fx.item)["sku"], "A-1");
}

#[test]
fn detached_save_handler_is_not_called() {
    let fx = Fixture::new();
    let mut registry = MetaBoxRegistry::new(fx.mem.host());
    registry.add(sku_metabox()).unwrap();
    fx.mem.hooks.remove(Hook::SavePost, "sku_box::save_post");

    let results = registry.save(fx.item, &fx.submission().with("sku", "A-1"), fx.actor);
    assert!(results.is_empty());
    assert!(fx.mem.attributes.is_empty());
}

#[test]
fn save_reports_skips_per_box() {
    let fx = Fixture::new();
    let mut registry = MetaBoxRegistry::new(fx.mem.host());
    registry.add(sku_metabox()).unwrap();
    registry
        .add(MetaBox::new(
            MetaBoxConfig::new("page_box", "page"),
            FieldSchema::new(vec![FieldDescriptor::input("subtitle", "Subtitle")]).unwrap(),
        ))
        .unwrap();

    let results = registry.save(fx.item, &fx.submission().with("sku", "A-1"), fx.actor);
    assert_eq!(
        results[1],
        ("page_box".to_string(), PersistOutcome::Skipped(SkipReason::WrongPostType))
    );
}

#[test]
fn failed_save_surfaces_through_registry_messages() {
    let fx = Fixture::new();
    let mut registry = MetaBoxRegistry::new(fx.mem.host());
    registry.add(sku_metabox()).unwrap();

    registry.save(fx.item, &fx.submission(), fx.actor);
    let messages = registry.messages(UpdatedMessages::new(), fx.item, Some("1"));
    assert_eq!(messages[POST_TYPE]["1"], "Saving failed.<br/>SKU cannot be empty<br/>");

    // Still attached after the rollback.
    assert!(fx.mem.hooks.is_registered(Hook::SavePost, "sku_box::save_post"));
}

#[test]
fn registry_render_by_id() {
    let fx = Fixture::new();
    let mut registry = MetaBoxRegistry::new(fx.mem.host());
    registry.add(sku_metabox()).unwrap();
    assert!(registry.render("sku_box", fx.item).unwrap().contains(r#"name="sku""#));
    assert!(registry.render("missing", fx.item).is_none());
}

// ================================================================
// Definition files
// ================================================================

#[test]
fn metabox_loads_from_definition_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"
[metabox]
id = "from_file"
post_type = "product"

[[fields]]
key = "sku"
label = "SKU"
kind = "input"
constraints = "required"
transform = "trim"
"#,
    )
    .unwrap();

    let metabox = MetaBox::load_from(file.path(), &TransformRegistry::with_builtins()).unwrap();
    assert_eq!(metabox.id(), "from_file");
    assert_eq!(metabox.config().title, "Attributes");

    let fx = Fixture::new();
    let host = fx.mem.host();
    let outcome = metabox.persist(&host, fx.item, &fx.submission().with("sku", "   "), fx.actor);
    assert!(outcome.is_rejected());
    assert_eq!(fx.mem.attributes.snapshot(fx.item)["sku"], "");
}

#[test]
fn bad_definition_file_is_model_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[metabox]\nid = 1\n").unwrap();
    let err = MetaBox::load_from(file.path(), &TransformRegistry::with_builtins()).unwrap_err();
    assert!(matches!(err, MetaBoxError::Model(_)));
}
