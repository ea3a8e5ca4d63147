use serde::{Deserialize, Serialize};

use crate::builder::error::BuilderError;
use crate::builder::form_builder::FormBuilder;
use crate::elements::describedby::DescriptionSet;
use crate::elements::error_message::compose_error_message;
use crate::elements::hint::compose_hint;
use crate::elements::label::{LabelOptions, compose_label};
use crate::identity::descriptor::derive;
use crate::markup::constants::{DESCRIBEDBY_ATTRIBUTE, INPUT_CLASS, INPUT_ERROR_CLASS};
use crate::markup::tag::Tag;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFieldOptions {
    #[serde(default)]
    pub label: LabelOptions,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aria_describedby: Vec<String>,
}

impl TextFieldOptions {
    pub fn with_label(mut self, label: LabelOptions) -> Self {
        self.label = label;
        self
    }

    pub fn with_hint(mut self, hint: &str) -> Self {
        self.hint = Some(hint.to_string());
        self
    }
}

impl FormBuilder {
    /// A labelled single-line text input inside its form group.
    pub fn govuk_text_field(
        &self,
        attribute: &str,
        options: &TextFieldOptions,
    ) -> Result<String, BuilderError> {
        let descriptor = self.descriptor(attribute);
        let identity = derive(&descriptor);

        let label = compose_label(&descriptor, &options.label)?;
        let hint = compose_hint(&descriptor, options.hint.as_deref());
        let error = compose_error_message(&descriptor, self.errors_for(attribute));

        let describedby = DescriptionSet::new()
            .with_hint(hint.as_ref())
            .with_error(error.as_ref())
            .with_extras(&options.aria_describedby)
            .aggregate();

        let error_class = if error.is_some() { INPUT_ERROR_CLASS } else { "" };
        let input = Tag::void("input")
            .classes([INPUT_CLASS, error_class])
            .attr("id", identity.id.as_str())
            .attr("name", identity.name.as_str())
            .attr("type", "text")
            .attr_opt("value", self.values_for(attribute).first().map(String::as_str))
            .attr_opt(DESCRIBEDBY_ATTRIBUTE, describedby)
            .render();

        let inner = [
            label.map(|l| l.markup),
            hint.map(|h| h.markup),
            error.map(|e| e.markup),
            Some(input),
        ]
        .into_iter()
        .flatten()
        .collect::<String>();

        Ok(self.form_group(attribute, &inner))
    }
}
