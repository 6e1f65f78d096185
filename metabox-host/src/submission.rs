use std::collections::HashMap;

/// A raw value from a submitted form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmittedValue {
    /// The form carried no value under this key.
    Absent,
    Text(String),
    /// Multi-value fields such as checkbox groups.
    List(Vec<String>),
}

impl SubmittedValue {
    /// Flattens the value to a single string, joining lists with `,`.
    pub fn flatten(&self) -> String {
        match self {
            Self::Absent => String::new(),
            Self::Text(text) => text.clone(),
            Self::List(items) => items.join(","),
        }
    }
}

impl From<&str> for SubmittedValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for SubmittedValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<String>> for SubmittedValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<Vec<&str>> for SubmittedValue {
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(str::to_string).collect())
    }
}

/// Form data submitted on save, with the content type it claims to target.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub post_type: Option<String>,
    pub fields: HashMap<String, SubmittedValue>,
}

impl Submission {
    pub fn new(post_type: impl Into<String>) -> Self {
        Self {
            post_type: Some(post_type.into()),
            fields: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<SubmittedValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// True when the submission declares `post_type` as its target.
    pub fn targets(&self, post_type: &str) -> bool {
        self.post_type.as_deref() == Some(post_type)
    }

    /// The raw value for `key`, [`SubmittedValue::Absent`] when not submitted.
    pub fn value(&self, key: &str) -> SubmittedValue {
        self.fields.get(key).cloned().unwrap_or(SubmittedValue::Absent)
    }
}
