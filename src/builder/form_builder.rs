use std::collections::HashMap;

use crate::identity::descriptor::AttributeDescriptor;
use crate::markup::constants::{FORM_GROUP_CLASS, FORM_GROUP_ERROR_CLASS};
use crate::markup::tag::Tag;

// ============================================================================
// FormBuilder: one bound object per render
// ============================================================================

/// Renders controls for a single bound object.
///
/// The builder only reads the values and error messages handed to it; every
/// call recomputes ids from scratch and returns a markup fragment.
#[derive(Debug, Clone, Default)]
pub struct FormBuilder {
    object_name: String,
    values: HashMap<String, Vec<String>>,
    errors: HashMap<String, Vec<String>>,
}

impl FormBuilder {
    pub fn new(object_name: &str) -> Self {
        Self {
            object_name: object_name.to_string(),
            values: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    /// Add a bound value for `attribute`. Multi-valued attributes (check box
    /// collections) take several calls.
    pub fn with_value(mut self, attribute: &str, value: &str) -> Self {
        self.values
            .entry(attribute.to_string())
            .or_default()
            .push(value.to_string());
        self
    }

    pub fn with_error(mut self, attribute: &str, message: &str) -> Self {
        self.errors
            .entry(attribute.to_string())
            .or_default()
            .push(message.to_string());
        self
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    pub fn values_for(&self, attribute: &str) -> &[String] {
        self.values.get(attribute).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn errors_for(&self, attribute: &str) -> &[String] {
        self.errors.get(attribute).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_errors(&self, attribute: &str) -> bool {
        self.errors_for(attribute).iter().any(|m| !m.is_empty())
    }

    pub fn descriptor(&self, attribute: &str) -> AttributeDescriptor {
        AttributeDescriptor::new(&self.object_name, attribute)
    }

    pub(crate) fn is_selected(&self, attribute: &str, value: &str) -> bool {
        self.values_for(attribute).iter().any(|v| v == value)
    }

    /// Wrap `inner` in a form group, flagged when the attribute has errors.
    pub(crate) fn form_group(&self, attribute: &str, inner: &str) -> String {
        let error_class = if self.has_errors(attribute) {
            FORM_GROUP_ERROR_CLASS
        } else {
            ""
        };

        Tag::new("div")
            .classes([FORM_GROUP_CLASS, error_class])
            .html(inner)
            .render()
    }
}
