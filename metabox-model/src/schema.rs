use crate::error::{ModelError, ModelResult};
use crate::transform::Transform;
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashSet;

/// Option keys and labels of a choice field, in display order.
///
/// Pairs are kept exactly as given. Duplicate keys are reported by
/// [`FieldSchema::new`] instead of being merged here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "IndexMap<String, String>")]
pub struct FieldOptions(Vec<(String, String)>);

impl FieldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, label: impl Into<String>) {
        self.0.push((key.into(), label.into()));
    }

    /// Label of the first option with `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, label)| label.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, String)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn first_duplicate(&self) -> Option<&str> {
        let mut seen = HashSet::with_capacity(self.0.len());
        self.keys().find(|key| !seen.insert(*key))
    }
}

impl From<IndexMap<String, String>> for FieldOptions {
    fn from(map: IndexMap<String, String>) -> Self {
        Self(map.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<'a> IntoIterator for &'a FieldOptions {
    type Item = &'a (String, String);
    type IntoIter = std::slice::Iter<'a, (String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Free-text constraint flags attached to a field.
///
/// Only one flag is understood: any string containing `required`, in any
/// position, marks the field mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints(String);

impl Constraints {
    pub fn new(flags: impl Into<String>) -> Self {
        Self(flags.into())
    }

    /// Shorthand for the `required` flag.
    pub fn required() -> Self {
        Self("required".into())
    }

    pub fn is_required(&self) -> bool {
        self.0.contains("required")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Constraints {
    fn from(flags: &str) -> Self {
        Self::new(flags)
    }
}

/// The control a field renders as.
///
/// Choice kinds carry their options; the others need nothing beyond the
/// descriptor's key and label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Section caption. No input control.
    Title,
    /// Single-line text input.
    Input,
    /// Dropdown with one selected option.
    Select { options: FieldOptions },
    /// Checkbox group; the stored value is a comma-joined list of keys.
    Check { options: FieldOptions },
    /// Radio group with one checked option.
    Radio { options: FieldOptions },
    /// Rich-text editor.
    TextEditor,
    /// A kind name this crate does not know. Renders an empty row.
    Unsupported { name: String },
}

impl FieldKind {
    /// Builds a kind from its definition-file name.
    ///
    /// `options` is kept for choice kinds and dropped for the rest.
    pub fn from_name(name: &str, options: FieldOptions) -> Self {
        match name {
            "title" => Self::Title,
            "input" => Self::Input,
            "select" => Self::Select { options },
            "check" => Self::Check { options },
            "radio" => Self::Radio { options },
            "text_editor" | "texteditor" => Self::TextEditor,
            other => Self::Unsupported {
                name: other.to_string(),
            },
        }
    }

    /// Returns the definition-file name of this kind.
    pub fn name(&self) -> &str {
        match self {
            Self::Title => "title",
            Self::Input => "input",
            Self::Select { .. } => "select",
            Self::Check { .. } => "check",
            Self::Radio { .. } => "radio",
            Self::TextEditor => "text_editor",
            Self::Unsupported { name } => name,
        }
    }

    /// Options for choice kinds, `None` otherwise.
    pub fn options(&self) -> Option<&FieldOptions> {
        match self {
            Self::Select { options } | Self::Check { options } | Self::Radio { options } => {
                Some(options)
            }
            _ => None,
        }
    }
}

/// One entry in a [`FieldSchema`].
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Storage attribute name and form field name.
    pub key: String,
    /// Heading text, or the section caption for [`FieldKind::Title`].
    pub label: String,
    pub kind: FieldKind,
    pub constraints: Constraints,
    /// Applied to the submitted value before it is stored.
    pub transform: Option<Transform>,
}

impl FieldDescriptor {
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            constraints: Constraints::default(),
            transform: None,
        }
    }

    /// Shorthand for a section caption.
    pub fn title(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Title)
    }

    /// Shorthand for a single-line text input.
    pub fn input(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Input)
    }

    /// Shorthand for a dropdown.
    pub fn select<K, V>(
        key: impl Into<String>,
        label: impl Into<String>,
        options: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(key, label, FieldKind::Select {
            options: options.into_iter().collect(),
        })
    }

    /// Shorthand for a checkbox group.
    pub fn check<K, V>(
        key: impl Into<String>,
        label: impl Into<String>,
        options: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(key, label, FieldKind::Check {
            options: options.into_iter().collect(),
        })
    }

    /// Shorthand for a radio group.
    pub fn radio<K, V>(
        key: impl Into<String>,
        label: impl Into<String>,
        options: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(key, label, FieldKind::Radio {
            options: options.into_iter().collect(),
        })
    }

    /// Shorthand for a rich-text editor.
    pub fn text_editor(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::TextEditor)
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.constraints = Constraints::required();
        self
    }

    #[must_use]
    pub fn with_constraints(mut self, constraints: impl Into<Constraints>) -> Self {
        self.constraints = constraints.into();
        self
    }

    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn is_required(&self) -> bool {
        self.constraints.is_required()
    }
}

/// The ordered list of fields a metabox contains.
///
/// Field keys are unique and non-empty, and so are option keys within a
/// field. The schema is immutable once built.
#[derive(Debug, Clone, Default)]
pub struct FieldSchema {
    fields: Vec<FieldDescriptor>,
}

impl FieldSchema {
    pub fn new(fields: Vec<FieldDescriptor>) -> ModelResult<Self> {
        let mut seen = HashSet::with_capacity(fields.len());
        for (position, field) in fields.iter().enumerate() {
            if field.key.is_empty() {
                return Err(ModelError::EmptyFieldKey(position));
            }
            if !seen.insert(field.key.as_str()) {
                return Err(ModelError::DuplicateFieldKey(field.key.clone()));
            }
            if let Some(option) = field.kind.options().and_then(FieldOptions::first_duplicate) {
                return Err(ModelError::DuplicateOptionKey {
                    field: field.key.clone(),
                    option: option.to_string(),
                });
            }
        }
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldDescriptor> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Looks up a field by key.
    pub fn get(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Field keys in schema order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.key.as_str())
    }
}

impl<'a> IntoIterator for &'a FieldSchema {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
