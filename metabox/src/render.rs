//! Turns a field schema and the stored values into form markup.
//!
//! Layout is one table row per field, in schema order. Every interpolated
//! key, value and label goes through the host [`Escaper`].

use metabox_host::{EditorSettings, EditorWidget, Escaper};
use metabox_model::{FieldDescriptor, FieldKind, FieldOptions, FieldSchema};
use std::collections::HashMap;

/// Appended to the visible label of required fields.
pub const REQUIRED_MARKER: &str = "*";

const CHECKED: &str = r#" checked="checked""#;
const SELECTED: &str = r#" selected="selected""#;

/// Renders metabox markup. Reads nothing and writes nothing.
pub struct MetaboxRenderer<'a> {
    escaper: &'a dyn Escaper,
    editor: &'a dyn EditorWidget,
    editor_settings: EditorSettings,
}

impl<'a> MetaboxRenderer<'a> {
    pub fn new(escaper: &'a dyn Escaper, editor: &'a dyn EditorWidget) -> Self {
        Self {
            escaper,
            editor,
            editor_settings: EditorSettings::default(),
        }
    }

    /// Renders every field of `schema` pre-filled from `current_values`.
    ///
    /// Keys missing from `current_values` render as empty.
    pub fn render(&self, schema: &FieldSchema, current_values: &HashMap<String, String>) -> String {
        let mut out = String::from(r#"<table class="form-table">"#);
        for field in schema {
            let value = current_values
                .get(&field.key)
                .map(String::as_str)
                .unwrap_or_default();
            self.render_row(&mut out, field, value);
        }
        out.push_str("</table>");
        out
    }

    fn render_row(&self, out: &mut String, field: &FieldDescriptor, value: &str) {
        match &field.kind {
            FieldKind::Title => {
                if !field.label.is_empty() {
                    out.push_str(&format!(
                        r#"<tr><th colspan="2" style="padding: 0"><h2 class="{}">{}</h2></th></tr>"#,
                        self.escaper.attr(&field.key),
                        self.escaper.html(&field.label),
                    ));
                }
            }
            FieldKind::Input => {
                out.push_str("<tr>");
                self.headline(out, field);
                out.push_str(&format!(
                    r#"<td><input class="widefat" name="{key}" id="{key}" type="text" value="{value}" /></td>"#,
                    key = self.escaper.attr(&field.key),
                    value = self.escaper.attr(value),
                ));
                out.push_str("</tr>");
            }
            FieldKind::Select { options } => {
                out.push_str("<tr>");
                self.headline(out, field);
                self.select(out, field, options, value);
                out.push_str("</tr>");
            }
            FieldKind::Check { options } => {
                out.push_str("<tr>");
                self.headline(out, field);
                self.checkboxes(out, field, options, value);
                out.push_str("</tr>");
            }
            FieldKind::Radio { options } => {
                out.push_str("<tr>");
                self.headline(out, field);
                self.radios(out, field, options, value);
                out.push_str("</tr>");
            }
            FieldKind::TextEditor => {
                out.push_str("<tr>");
                self.headline(out, field);
                out.push_str("<td>");
                out.push_str(&self.editor.render(value, &field.key, &self.editor_settings));
                out.push_str("</td></tr>");
            }
            FieldKind::Unsupported { .. } => out.push_str("<tr></tr>"),
        }
    }

    fn headline(&self, out: &mut String, field: &FieldDescriptor) {
        let marker = if field.is_required() {
            REQUIRED_MARKER
        } else {
            ""
        };
        out.push_str(&format!(
            r#"<th><label for="{}">{}{}</label></th>"#,
            self.escaper.attr(&field.key),
            self.escaper.html(&field.label),
            self.escaper.html(marker),
        ));
    }

    fn select(
        &self,
        out: &mut String,
        field: &FieldDescriptor,
        options: &FieldOptions,
        value: &str,
    ) {
        out.push_str(&format!(
            r#"<td><select class="widefat" name="{key}" id="{key}">"#,
            key = self.escaper.attr(&field.key),
        ));
        for (option_key, option_label) in options {
            let selected = if option_key == value { SELECTED } else { "" };
            out.push_str(&format!(
                r#"<option{selected} value="{}">{}</option>"#,
                self.escaper.attr(option_key),
                self.escaper.html(option_label),
            ));
        }
        out.push_str("</select></td>");
    }

    fn checkboxes(
        &self,
        out: &mut String,
        field: &FieldDescriptor,
        options: &FieldOptions,
        value: &str,
    ) {
        let checked_keys: Vec<&str> = value.split(',').collect();
        let name = self.escaper.attr(&field.key);
        out.push_str("<td>");
        for (option_key, option_label) in options {
            let checked = if checked_keys.contains(&option_key.as_str()) {
                CHECKED
            } else {
                ""
            };
            out.push_str(&format!(
                r#"<input class="selectit widefat" type="checkbox"{checked} name="{name}[]" value="{}">{}<br/>"#,
                self.escaper.attr(option_key),
                self.escaper.html(option_label),
            ));
        }
        out.push_str("</td>");
    }

    fn radios(
        &self,
        out: &mut String,
        field: &FieldDescriptor,
        options: &FieldOptions,
        value: &str,
    ) {
        let name = self.escaper.attr(&field.key);
        out.push_str("<td>");
        for (option_key, option_label) in options {
            let checked = if option_key == value { CHECKED } else { "" };
            out.push_str(&format!(
                r#"<input type="radio" class="widefat"{checked} name="{name}" value="{}">{}<br/>"#,
                self.escaper.attr(option_key),
                self.escaper.html(option_label),
            ));
        }
        out.push_str("</td>");
    }
}
