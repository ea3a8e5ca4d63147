use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::builder::error::BuilderError;
use crate::identity::descriptor::{AttributeDescriptor, derive};
use crate::identity::slug::capitalize;
use crate::markup::constants::{
    LABEL_CLASS, LABEL_SIZE_LARGE_CLASS, LABEL_SIZE_MEDIUM_CLASS, LABEL_SIZE_SMALL_CLASS,
    LABEL_WEIGHT_BOLD_CLASS,
};
use crate::markup::tag::Tag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelSize {
    Large,
    Medium,
    Small,
    #[default]
    Regular,
}

impl LabelSize {
    pub fn class(self) -> Option<&'static str> {
        match self {
            LabelSize::Large => Some(LABEL_SIZE_LARGE_CLASS),
            LabelSize::Medium => Some(LABEL_SIZE_MEDIUM_CLASS),
            LabelSize::Small => Some(LABEL_SIZE_SMALL_CLASS),
            LabelSize::Regular => None,
        }
    }
}

impl FromStr for LabelSize {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "large" => Ok(LabelSize::Large),
            "medium" => Ok(LabelSize::Medium),
            "small" => Ok(LabelSize::Small),
            "regular" => Ok(LabelSize::Regular),
            other => Err(BuilderError::InvalidLabelSize {
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelWeight {
    Bold,
    #[default]
    Regular,
}

impl LabelWeight {
    pub fn class(self) -> Option<&'static str> {
        match self {
            LabelWeight::Bold => Some(LABEL_WEIGHT_BOLD_CLASS),
            LabelWeight::Regular => None,
        }
    }
}

impl FromStr for LabelWeight {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bold" => Ok(LabelWeight::Bold),
            "regular" => Ok(LabelWeight::Regular),
            other => Err(BuilderError::InvalidLabelWeight {
                value: other.to_string(),
            }),
        }
    }
}

/// Caller-facing label options. Size and weight stay keywords until composition
/// so that an unknown keyword aborts the control that uses it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}

impl LabelOptions {
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_size(mut self, size: &str) -> Self {
        self.size = Some(size.to_string());
        self
    }

    pub fn with_weight(mut self, weight: &str) -> Self {
        self.weight = Some(weight.to_string());
        self
    }
}

/// A composed `<label>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub for_id: String,
    pub text: String,
    pub size: LabelSize,
    pub weight: LabelWeight,
    pub markup: String,
}

/// Compose a label for the element identified by `descriptor`.
///
/// Text is the explicit option, else the descriptor value, else the capitalised
/// attribute name. Returns `Ok(None)` when that text is empty.
pub fn compose_label(
    descriptor: &AttributeDescriptor,
    options: &LabelOptions,
) -> Result<Option<Label>, BuilderError> {
    compose_label_with_class(descriptor, options, None)
}

/// As [`compose_label`], with a context class (e.g. `govuk-checkboxes__label`)
/// placed after the base class.
pub fn compose_label_with_class(
    descriptor: &AttributeDescriptor,
    options: &LabelOptions,
    context_class: Option<&str>,
) -> Result<Option<Label>, BuilderError> {
    let size = options
        .size
        .as_deref()
        .map(LabelSize::from_str)
        .transpose()?
        .unwrap_or_default();
    let weight = options
        .weight
        .as_deref()
        .map(LabelWeight::from_str)
        .transpose()?
        .unwrap_or_default();

    let text = resolve_label_text(descriptor, options.text.as_deref());
    if text.is_empty() {
        tracing::trace!(attribute = %descriptor.attribute_name, "label text empty, no label");
        return Ok(None);
    }

    let for_id = derive(descriptor).id;
    let markup = Tag::new("label")
        .classes(
            [
                Some(LABEL_CLASS),
                context_class,
                size.class(),
                weight.class(),
            ]
            .into_iter()
            .flatten(),
        )
        .attr("for", for_id.as_str())
        .text(&text)
        .render();

    Ok(Some(Label {
        for_id,
        text,
        size,
        weight,
        markup,
    }))
}

fn resolve_label_text(descriptor: &AttributeDescriptor, explicit: Option<&str>) -> String {
    explicit
        .or(descriptor.value.as_deref())
        .map(str::to_string)
        .unwrap_or_else(|| capitalize(&descriptor.attribute_name))
}
