use std::collections::HashMap;

/// String-keyed bag of values attached to a performer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetadataStore<T> {
    data: HashMap<String, T>,
}

impl<T> Default for MetadataStore<T> {
    fn default() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl<T> MetadataStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, returning what was there before.
    pub fn set(&mut self, key: impl Into<String>, value: T) -> Option<T> {
        self.data.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.data.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<T> {
        self.data.remove(key)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
