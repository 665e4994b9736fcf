//! Fields the widgets write into.
//!
//! Widgets receive their target fields at construction time instead of
//! looking them up in the document, so the same logic drives a Dioxus
//! signal or an in-memory field in tests.

use dioxus::prelude::*;

/// A single-value form field.
pub trait FormField {
    /// Current value of the field.
    fn value(&self) -> String;

    /// Replace the field's value.
    fn set_value(&mut self, value: &str);

    /// Reset the field to the empty string.
    fn clear(&mut self) {
        self.set_value("");
    }
}

impl FormField for Signal<String> {
    fn value(&self) -> String {
        self.cloned()
    }

    fn set_value(&mut self, value: &str) {
        self.set(value.to_string());
    }
}

/// Field held in memory, keyed by its form name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryField {
    name: String,
    value: String,
}

impl MemoryField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
        }
    }

    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FormField for MemoryField {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_field_set_and_clear() {
        let mut field = MemoryField::with_value("checkinDate", "2024-06-01");
        assert_eq!(field.name(), "checkinDate");
        assert_eq!(field.value(), "2024-06-01");

        field.set_value("2024-06-02");
        assert_eq!(field.value(), "2024-06-02");

        field.clear();
        assert_eq!(field.value(), "");
    }
}
