use crate::submission::SubmittedValue;

/// Pre-processing extension point for submitted values.
///
/// Runs before the metabox's own pipeline with `(raw value, field key)`.
pub trait DataFilter: Send + Sync {
    fn filter(&self, value: SubmittedValue, field_key: &str) -> SubmittedValue;
}

/// Filter that returns every value unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl DataFilter for PassThrough {
    fn filter(&self, value: SubmittedValue, _field_key: &str) -> SubmittedValue {
        value
    }
}

type FilterFn = dyn Fn(SubmittedValue, &str) -> SubmittedValue + Send + Sync;

/// Registered filter callbacks, applied in registration order.
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<FilterFn>>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<F>(&mut self, filter: F)
    where
        F: Fn(SubmittedValue, &str) -> SubmittedValue + Send + Sync + 'static,
    {
        self.filters.push(Box::new(filter));
    }

    #[must_use]
    pub fn with<F>(mut self, filter: F) -> Self
    where
        F: Fn(SubmittedValue, &str) -> SubmittedValue + Send + Sync + 'static,
    {
        self.add(filter);
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl DataFilter for FilterChain {
    fn filter(&self, value: SubmittedValue, field_key: &str) -> SubmittedValue {
        self.filters
            .iter()
            .fold(value, |value, filter| filter(value, field_key))
    }
}
