use serde::Serialize;

use crate::identity::slug::{slugify, slugify_parts};
use crate::markup::constants::{CONDITIONAL_SUFFIX, ERROR_SUFFIX, HINT_SUFFIX};

/// Identifies a single rendered form element: the bound object, one of its
/// attributes and, for collection items, the choice value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeDescriptor {
    pub object_name: String,
    pub attribute_name: String,
    pub value: Option<String>,
}

impl AttributeDescriptor {
    pub fn new(object_name: &str, attribute_name: &str) -> Self {
        Self {
            object_name: object_name.to_string(),
            attribute_name: attribute_name.to_string(),
            value: None,
        }
    }

    /// Descriptor of one item in a collection.
    pub fn with_value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }

    /// The same object/attribute pair without the item value.
    pub fn attribute_only(&self) -> Self {
        Self {
            object_name: self.object_name.clone(),
            attribute_name: self.attribute_name.clone(),
            value: None,
        }
    }

    /// Hyphen-joined slug of object, attribute and value.
    ///
    /// A value with no alphanumeric characters (`"?"`) would otherwise share the
    /// attribute's slug, so it is spelled out as hex code points instead.
    pub fn slug(&self) -> String {
        let base = slugify_parts([self.object_name.as_str(), self.attribute_name.as_str()]);
        match self.value.as_deref() {
            None => base,
            Some(value) => {
                let mut value_slug = slugify(value);
                if value_slug.is_empty() {
                    value_slug = code_point_slug(value);
                    tracing::warn!(
                        value,
                        slug = %value_slug,
                        "choice value has no alphanumeric characters"
                    );
                }
                slugify_parts([base.as_str(), value_slug.as_str()])
            }
        }
    }

    /// `object[attribute]`, or `object[attribute][]` for collection items.
    pub fn field_name(&self) -> String {
        match self.value {
            Some(_) => self.multiple_field_name(),
            None => format!("{}[{}]", self.object_name, self.attribute_name),
        }
    }

    /// `object[attribute][]`, the name every item of a multi-valued attribute shares.
    pub fn multiple_field_name(&self) -> String {
        format!("{}[{}][]", self.object_name, self.attribute_name)
    }
}

/// `"?!"` becomes `"3f-21"`, the empty string becomes `"blank"`.
fn code_point_slug(value: &str) -> String {
    if value.is_empty() {
        return "blank".to_string();
    }
    value
        .chars()
        .map(|c| format!("{:x}", u32::from(c)))
        .collect::<Vec<_>>()
        .join("-")
}

/// The `id` and `name` of an element, recomputed on every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementIdentity {
    pub id: String,
    pub name: String,
}

impl ElementIdentity {
    pub fn hint_id(&self) -> String {
        format!("{}{}", self.id, HINT_SUFFIX)
    }

    pub fn error_id(&self) -> String {
        format!("{}{}", self.id, ERROR_SUFFIX)
    }

    /// Id of the container revealed by this control.
    pub fn conditional_id(&self) -> String {
        format!("{}{}", self.id, CONDITIONAL_SUFFIX)
    }
}

/// Derive the element identity for a descriptor. Never fails.
pub fn derive(descriptor: &AttributeDescriptor) -> ElementIdentity {
    ElementIdentity {
        id: descriptor.slug(),
        name: descriptor.field_name(),
    }
}
