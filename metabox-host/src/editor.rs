use crate::escape::{Escaper, HtmlEscaper};
use serde::{Deserialize, Serialize};

/// Buttons shown on the reduced rich-text toolbar.
pub const EDITOR_TOOLBAR: &str = "bold,italic,underline,blockquote,strikethrough,bullist,numlist,alignleft,aligncenter,alignright,undo,redo,link,unlink,fullscreen";

/// Toolbar configuration of the embedded editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TinyMceSettings {
    pub menubar: bool,
    pub toolbar1: String,
    pub toolbar2: String,
    pub toolbar3: String,
    pub toolbar4: String,
}

/// Settings handed to the editor widget.
///
/// The default is the fixed metabox configuration: no media buttons,
/// five rows and the reduced single-row toolbar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSettings {
    pub media_buttons: bool,
    pub textarea_rows: u32,
    pub tinymce: TinyMceSettings,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            media_buttons: false,
            textarea_rows: 5,
            tinymce: TinyMceSettings {
                menubar: false,
                toolbar1: EDITOR_TOOLBAR.to_string(),
                toolbar2: String::new(),
                toolbar3: String::new(),
                toolbar4: String::new(),
            },
        }
    }
}

/// Renders a rich-text editor control.
pub trait EditorWidget: Send + Sync {
    fn render(&self, value: &str, field_key: &str, settings: &EditorSettings) -> String;
}

/// Plain `<textarea>` stand-in that carries its settings as a data attribute.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextareaEditor;

impl EditorWidget for TextareaEditor {
    fn render(&self, value: &str, field_key: &str, settings: &EditorSettings) -> String {
        let escaper = HtmlEscaper;
        let settings_json = serde_json::to_string(settings).unwrap_or_default();
        format!(
            r#"<textarea class="wp-editor-area" name="{key}" id="{key}" rows="{rows}" data-settings="{settings}">{value}</textarea>"#,
            key = escaper.attr(field_key),
            rows = settings.textarea_rows,
            settings = escaper.attr(&settings_json),
            value = escaper.html(value),
        )
    }
}
