use serde::{Deserialize, Serialize};
use std::fmt;

/// Title used when a metabox does not set one.
pub const DEFAULT_TITLE: &str = "Attributes";

/// Layout zone of the edit screen a metabox is placed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    Normal,
    Side,
    #[default]
    Advanced,
}

impl Context {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Side => "side",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering hint among metaboxes that share a [`Context`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    High,
    Core,
    Default,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Core => "core",
            Self::Default => "default",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registration settings of a metabox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaBoxConfig {
    /// Unique metabox identifier.
    pub id: String,
    #[serde(default = "default_title")]
    pub title: String,
    /// Content type whose edit screen shows the metabox.
    pub post_type: String,
    #[serde(default)]
    pub context: Context,
    #[serde(default)]
    pub priority: Priority,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl MetaBoxConfig {
    pub fn new(id: impl Into<String>, post_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: default_title(),
            post_type: post_type.into(),
            context: Context::default(),
            priority: Priority::default(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}
