//! Sanitizers applied to submitted values before they are stored.
//!
//! A [`Transform`] is a function reference plus the extra positional
//! arguments it is called with. Definition files name transforms; the
//! [`TransformRegistry`] resolves those names once, at load time.

use crate::error::{ModelError, ModelResult};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Signature of a transform: `(value, extra_args) -> stored value`.
pub type TransformFn = dyn Fn(&str, &[String]) -> String + Send + Sync;

/// A sanitizer bound to its extra arguments.
#[derive(Clone)]
pub struct Transform {
    name: String,
    func: Arc<TransformFn>,
    args: Vec<String>,
}

impl Transform {
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&str, &[String]) -> String + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
            args: Vec::new(),
        }
    }

    fn from_shared(name: &str, func: Arc<TransformFn>, args: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            func,
            args,
        }
    }

    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Runs the transform on an already-flattened value.
    pub fn apply(&self, value: &str) -> String {
        (self.func)(value, &self.args)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("name", &self.name)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

/// Named transforms available to definition files.
pub struct TransformRegistry {
    transforms: HashMap<String, Arc<TransformFn>>,
}

impl TransformRegistry {
    /// Creates a registry with no transforms.
    pub fn empty() -> Self {
        Self {
            transforms: HashMap::new(),
        }
    }

    /// Creates a registry holding `trim`, `email`, `integer` and `max_length`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry.register("trim", |value, _| value.trim().to_string());
        registry.register("email", |value, _| sanitize_email(value));
        registry.register("integer", |value, _| {
            value
                .trim()
                .parse::<i64>()
                .map(|n| n.to_string())
                .unwrap_or_default()
        });
        registry.register("max_length", |value, args| {
            match args.first().and_then(|a| a.parse::<usize>().ok()) {
                Some(limit) => value.chars().take(limit).collect(),
                None => value.to_string(),
            }
        });
        registry
    }

    /// Registers or replaces a named transform.
    pub fn register<F>(&mut self, name: impl Into<String>, func: F)
    where
        F: Fn(&str, &[String]) -> String + Send + Sync + 'static,
    {
        self.transforms.insert(name.into(), Arc::new(func));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.transforms.contains_key(name)
    }

    /// Binds the named transform to `args` for use on `field`.
    pub fn resolve(&self, field: &str, name: &str, args: Vec<String>) -> ModelResult<Transform> {
        self.transforms
            .get(name)
            .map(|func| Transform::from_shared(name, Arc::clone(func), args))
            .ok_or_else(|| ModelError::UnknownTransform {
                field: field.to_string(),
                transform: name.to_string(),
            })
    }
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// Trimmed address when it has one `@`, a local part and a dotted domain.
fn sanitize_email(value: &str) -> String {
    let value = value.trim();
    let Some((local, domain)) = value.split_once('@') else {
        return String::new();
    };
    let valid = !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.chars().any(char::is_whitespace);
    if valid {
        value.to_string()
    } else {
        String::new()
    }
}
