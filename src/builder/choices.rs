use serde::{Deserialize, Serialize};

use crate::builder::error::BuilderError;
use crate::builder::form_builder::FormBuilder;
use crate::elements::conditional::ConditionalLink;
use crate::elements::describedby::DescriptionSet;
use crate::elements::hint::compose_hint_with_class;
use crate::elements::label::{LabelOptions, compose_label_with_class};
use crate::identity::descriptor::{AttributeDescriptor, derive};
use crate::markup::constants::{
    CHECKBOX_INPUT_CLASS, CHECKBOXES_CLASS, CHECKBOXES_MODULE, CONTROLS_ATTRIBUTE,
    DESCRIBEDBY_ATTRIBUTE, RADIO_INPUT_CLASS, RADIOS_CLASS, RADIOS_MODULE, UNCHECKED_VALUE,
};
use crate::markup::tag::Tag;

/// Which family of choice control is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChoiceKind {
    CheckBox,
    Radio,
}

impl ChoiceKind {
    /// Class of the wrapping container.
    pub fn container_class(self) -> &'static str {
        match self {
            ChoiceKind::CheckBox => CHECKBOXES_CLASS,
            ChoiceKind::Radio => RADIOS_CLASS,
        }
    }

    /// `data-module` of the wrapping container.
    pub fn data_module(self) -> &'static str {
        match self {
            ChoiceKind::CheckBox => CHECKBOXES_MODULE,
            ChoiceKind::Radio => RADIOS_MODULE,
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            ChoiceKind::CheckBox => "checkbox",
            ChoiceKind::Radio => "radio",
        }
    }

    pub fn item_class(self) -> String {
        self.element_class("item")
    }

    pub fn input_class(self) -> &'static str {
        match self {
            ChoiceKind::CheckBox => CHECKBOX_INPUT_CLASS,
            ChoiceKind::Radio => RADIO_INPUT_CLASS,
        }
    }

    pub fn label_class(self) -> String {
        self.element_class("label")
    }

    pub fn hint_class(self) -> String {
        self.element_class("hint")
    }

    pub fn conditional_class(self) -> String {
        self.element_class("conditional")
    }

    pub fn conditional_hidden_class(self) -> String {
        self.element_class("conditional--hidden")
    }

    fn element_class(self, element: &str) -> String {
        format!("{}__{}", self.container_class(), element)
    }
}

/// Options for a single check box or radio button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOptions {
    #[serde(default)]
    pub label: LabelOptions,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,

    /// Extra ids appended to the input's `aria-describedby`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aria_describedby: Vec<String>,
}

impl ChoiceOptions {
    pub fn with_label(mut self, label: LabelOptions) -> Self {
        self.label = label;
        self
    }

    pub fn with_hint(mut self, hint: &str) -> Self {
        self.hint = Some(hint.to_string());
        self
    }

    pub fn with_describedby(mut self, id: &str) -> Self {
        self.aria_describedby.push(id.to_string());
        self
    }
}

/// One entry of a collection: the submitted value, its label and an optional hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ChoiceOption {
    pub fn new(value: &str, text: &str) -> Self {
        Self {
            value: value.to_string(),
            text: Some(text.to_string()),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: Option<&str>) -> Self {
        self.hint = hint.map(str::to_string);
        self
    }
}

/// Everything needed to render one item.
pub(crate) struct ChoiceItem<'a> {
    pub kind: ChoiceKind,
    pub descriptor: AttributeDescriptor,
    pub options: &'a ChoiceOptions,
    pub checked: bool,
    pub include_hidden: bool,
    pub content: Option<&'a str>,
}

impl ChoiceItem<'_> {
    pub fn render(&self) -> Result<String, BuilderError> {
        let identity = derive(&self.descriptor);
        let name = match self.kind {
            ChoiceKind::CheckBox => identity.name.clone(),
            ChoiceKind::Radio => self.descriptor.attribute_only().field_name(),
        };

        let label_class = self.kind.label_class();
        let label = compose_label_with_class(
            &self.descriptor,
            &self.options.label,
            Some(label_class.as_str()),
        )?;

        let hint_class = self.kind.hint_class();
        let hint = compose_hint_with_class(
            &self.descriptor,
            self.options.hint.as_deref(),
            Some(hint_class.as_str()),
        );

        let describedby = DescriptionSet::new()
            .with_hint(hint.as_ref())
            .with_extras(&self.options.aria_describedby)
            .aggregate();

        let link = ConditionalLink::new(&self.descriptor, self.content);

        let value = self.descriptor.value.as_deref().unwrap_or_default();
        let input = Tag::void("input")
            .classes([self.kind.input_class()])
            .attr("id", identity.id.as_str())
            .attr("name", name.as_str())
            .attr("type", self.kind.input_type())
            .attr("value", value)
            .flag("checked", self.checked)
            .attr_opt(DESCRIBEDBY_ATTRIBUTE, describedby)
            .attr_opt(CONTROLS_ATTRIBUTE, link.controls())
            .render();

        let mut item = Tag::new("div").classes([self.kind.item_class().as_str()]);
        if self.include_hidden && self.kind == ChoiceKind::CheckBox {
            item = item.html(&hidden_input(&name, UNCHECKED_VALUE));
        }
        item = item.html(&input);
        if let Some(label) = &label {
            item = item.html(&label.markup);
        }
        if let Some(hint) = &hint {
            item = item.html(&hint.markup);
        }

        let mut out = item.render();
        if let Some(container) = link.render_container(self.kind) {
            out.push_str(&container);
        }

        Ok(out)
    }
}

pub(crate) fn hidden_input(name: &str, value: &str) -> String {
    Tag::void("input")
        .attr("name", name)
        .attr("type", "hidden")
        .attr("value", value)
        .render()
}

impl FormBuilder {
    /// A single check box, preceded by the hidden unchecked field. Non-empty
    /// `content` is revealed conditionally when the box is ticked.
    pub fn govuk_check_box(
        &self,
        attribute: &str,
        value: &str,
        options: &ChoiceOptions,
        content: Option<&str>,
    ) -> Result<String, BuilderError> {
        self.choice_item(ChoiceKind::CheckBox, attribute, value, options, content)
    }

    /// A single radio button. Non-empty `content` is revealed conditionally.
    pub fn govuk_radio_button(
        &self,
        attribute: &str,
        value: &str,
        options: &ChoiceOptions,
        content: Option<&str>,
    ) -> Result<String, BuilderError> {
        self.choice_item(ChoiceKind::Radio, attribute, value, options, content)
    }

    fn choice_item(
        &self,
        kind: ChoiceKind,
        attribute: &str,
        value: &str,
        options: &ChoiceOptions,
        content: Option<&str>,
    ) -> Result<String, BuilderError> {
        tracing::debug!(object = %self.object_name(), attribute, value, ?kind, "rendering choice item");

        ChoiceItem {
            kind,
            descriptor: self.descriptor(attribute).with_value(value),
            options,
            checked: self.is_selected(attribute, value),
            include_hidden: true,
            content,
        }
        .render()
    }
}
