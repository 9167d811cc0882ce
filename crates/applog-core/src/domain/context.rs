//! Diagnostic context derived from a captured call stack

use std::collections::HashMap;

/// Call-site attribution attached to an error event.
///
/// Keys are `"<frame index> <symbol>"`, values the remaining location
/// text of the frame. Inserting an existing key overwrites the previous
/// value. Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticContext {
    entries: HashMap<String, String>,
}

impl DiagnosticContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, replacing any previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Flattens the context into a plain key/value map for backends.
    pub fn to_properties(&self) -> HashMap<String, String> {
        self.entries.clone()
    }
}

impl FromIterator<(String, String)> for DiagnosticContext {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut context = DiagnosticContext::new();
        for (key, value) in iter {
            context.insert(key, value);
        }
        context
    }
}
