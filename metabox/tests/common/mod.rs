//! Shared fixtures for metabox tests.

#![allow(dead_code)]

use metabox::{
    ActorId, FieldDescriptor, FieldSchema, ItemId, ItemStatus, MetaBox, MetaBoxConfig, Submission,
};
use metabox_host::memory::InMemoryHost;

pub const POST_TYPE: &str = "product";

/// Schema with one field of every kind.
pub fn product_schema() -> FieldSchema {
    FieldSchema::new(vec![
        FieldDescriptor::title("general", "General"),
        FieldDescriptor::input("sku", "SKU").required(),
        FieldDescriptor::select("color", "Color", [("red", "Red"), ("blue", "Blue")]),
        FieldDescriptor::check("tags", "Tags", [("a", "Alpha"), ("b", "Beta"), ("c", "Gamma")]),
        FieldDescriptor::radio("size", "Size", [("s", "Small"), ("m", "Medium")]),
        FieldDescriptor::text_editor("notes", "Notes"),
    ])
    .unwrap()
}

pub fn product_metabox() -> MetaBox {
    MetaBox::new(MetaBoxConfig::new("product_attributes", POST_TYPE), product_schema())
}

pub fn sku_metabox() -> MetaBox {
    MetaBox::new(
        MetaBoxConfig::new("sku_box", POST_TYPE),
        FieldSchema::new(vec![
            FieldDescriptor::input("sku", "SKU").with_constraints("required"),
        ])
        .unwrap(),
    )
}

/// An in-memory host with one published item editable by one actor.
pub struct Fixture {
    pub mem: InMemoryHost,
    pub item: ItemId,
    pub actor: ActorId,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_host(InMemoryHost::new())
    }

    pub fn with_host(mem: InMemoryHost) -> Self {
        let item = ItemId::new();
        let actor = ActorId::new();
        mem.items.insert(item, ItemStatus::Publish);
        mem.authorizer.grant(actor, item);
        Self { mem, item, actor }
    }

    pub fn submission(&self) -> Submission {
        Submission::new(POST_TYPE)
    }
}
