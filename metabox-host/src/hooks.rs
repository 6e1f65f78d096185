use metabox_model::MetaBoxConfig;
use std::fmt;

/// Host extension points a metabox attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    /// Before the edit screen renders; metaboxes announce themselves here.
    AddMetaBoxes,
    /// After a content item is saved.
    SavePost,
    /// While composing post-save status messages.
    PostUpdatedMessages,
}

impl Hook {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AddMetaBoxes => "add_meta_boxes",
            Self::SavePost => "save_post",
            Self::PostUpdatedMessages => "post_updated_messages",
        }
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks which named handlers are attached to which hooks.
pub trait HookRegistry: Send + Sync {
    fn add(&self, hook: Hook, handler: &str);

    fn remove(&self, hook: Hook, handler: &str);

    fn is_registered(&self, hook: Hook, handler: &str) -> bool;
}

/// The edit screen metaboxes are placed on.
pub trait AdminScreen: Send + Sync {
    fn add_meta_box(&self, config: &MetaBoxConfig);
}
