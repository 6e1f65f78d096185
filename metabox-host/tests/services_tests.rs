//! Escaping, filtering and editor rendering.

use metabox_host::{
    DataFilter, EditorSettings, EditorWidget, Escaper, FilterChain, HtmlEscaper, PassThrough,
    SubmittedValue, TextareaEditor, EDITOR_TOOLBAR,
};
use pretty_assertions::assert_eq;

// ── Filters ──────────────────────────────────────────────────────

#[test]
fn pass_through_returns_value() {
    let v = PassThrough.filter(SubmittedValue::from("x"), "sku");
    assert_eq!(v, SubmittedValue::from("x"));
}

#[test]
fn empty_chain_is_pass_through() {
    let chain = FilterChain::new();
    assert!(chain.is_empty());
    assert_eq!(chain.filter(SubmittedValue::Absent, "k"), SubmittedValue::Absent);
}

#[test]
fn chain_applies_in_order_with_field_key() {
    let chain = FilterChain::new()
        .with(|v, key| SubmittedValue::Text(format!("{}:{key}", v.flatten())))
        .with(|v, _| SubmittedValue::Text(v.flatten().to_uppercase()));
    assert_eq!(chain.len(), 2);
    assert_eq!(chain.filter(SubmittedValue::from("a"), "sku"), SubmittedValue::from("A:SKU"));
}

#[test]
fn chain_can_target_one_field() {
    let mut chain = FilterChain::new();
    chain.add(|v, key| {
        if key == "price" {
            SubmittedValue::from("0")
        } else {
            v
        }
    });
    assert_eq!(chain.filter(SubmittedValue::from("9"), "price"), SubmittedValue::from("0"));
    assert_eq!(chain.filter(SubmittedValue::from("9"), "sku"), SubmittedValue::from("9"));
}

// ── Editor ───────────────────────────────────────────────────────

#[test]
fn default_editor_settings_are_reduced() {
    let s = EditorSettings::default();
    assert!(!s.media_buttons);
    assert_eq!(s.textarea_rows, 5);
    assert!(!s.tinymce.menubar);
    assert_eq!(s.tinymce.toolbar1, EDITOR_TOOLBAR);
    assert!(s.tinymce.toolbar2.is_empty());
    assert!(s.tinymce.toolbar3.is_empty());
    assert!(s.tinymce.toolbar4.is_empty());
}

#[test]
fn toolbar_has_no_media_button() {
    assert!(!EDITOR_TOOLBAR.contains("media"));
    assert!(EDITOR_TOOLBAR.starts_with("bold,italic,underline"));
    assert!(EDITOR_TOOLBAR.ends_with("fullscreen"));
}

#[test]
fn textarea_editor_escapes_value() {
    let out = TextareaEditor.render("<p>Hi & bye</p>", "body", &EditorSettings::default());
    assert!(out.starts_with(r#"<textarea class="wp-editor-area" name="body" id="body" rows="5""#));
    assert!(out.contains("&lt;p&gt;Hi &amp; bye&lt;/p&gt;</textarea>"));
}

#[test]
fn textarea_editor_embeds_settings() {
    let out = TextareaEditor.render("", "body", &EditorSettings::default());
    assert!(out.contains("data-settings=\""));
    assert!(out.contains("strikethrough"));
    assert!(out.contains("&quot;media_buttons&quot;:false"));
}

// ── Escaping ─────────────────────────────────────────────────────

#[test]
fn escaper_text_and_attr() {
    assert_eq!(HtmlEscaper.html("a < b"), "a &lt; b");
    assert_eq!(HtmlEscaper.attr("say \"hi\""), "say &quot;hi&quot;");
}
