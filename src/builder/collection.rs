use serde::{Deserialize, Serialize};

use crate::builder::choices::{ChoiceItem, ChoiceKind, ChoiceOption, ChoiceOptions, hidden_input};
use crate::builder::error::BuilderError;
use crate::builder::form_builder::FormBuilder;
use crate::elements::describedby::DescriptionSet;
use crate::elements::error_message::compose_error_message;
use crate::elements::hint::compose_hint;
use crate::elements::label::LabelOptions;
use crate::elements::legend::{LegendOptions, compose_legend};
use crate::markup::constants::{DESCRIBEDBY_ATTRIBUTE, FIELDSET_CLASS};
use crate::markup::tag::Tag;

/// Options shared by collections and fieldsets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldsetOptions {
    #[serde(default)]
    pub legend: LegendOptions,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,

    /// Extra ids appended to the fieldset's `aria-describedby`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aria_describedby: Vec<String>,
}

impl FieldsetOptions {
    pub fn with_legend(mut self, legend: LegendOptions) -> Self {
        self.legend = legend;
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

impl FormBuilder {
    /// One check box per option inside a fieldset. `content` is appended after
    /// the check boxes.
    pub fn govuk_collection_check_boxes(
        &self,
        attribute: &str,
        choices: &[ChoiceOption],
        options: &FieldsetOptions,
        content: Option<&str>,
    ) -> Result<String, BuilderError> {
        self.collection(ChoiceKind::CheckBox, attribute, choices, options, content)
    }

    /// One radio button per option inside a fieldset.
    pub fn govuk_collection_radio_buttons(
        &self,
        attribute: &str,
        choices: &[ChoiceOption],
        options: &FieldsetOptions,
        content: Option<&str>,
    ) -> Result<String, BuilderError> {
        self.collection(ChoiceKind::Radio, attribute, choices, options, content)
    }

    /// Wrap already rendered check boxes in a fieldset. Fails without content.
    pub fn govuk_check_boxes_fieldset(
        &self,
        attribute: &str,
        options: &FieldsetOptions,
        content: Option<&str>,
    ) -> Result<String, BuilderError> {
        let content = content.ok_or_else(|| BuilderError::NoContent {
            entry_point: "govuk_check_boxes_fieldset".to_string(),
        })?;
        self.fieldset(ChoiceKind::CheckBox, attribute, options, content, None)
    }

    /// Wrap already rendered radio buttons in a fieldset. Fails without content.
    pub fn govuk_radio_buttons_fieldset(
        &self,
        attribute: &str,
        options: &FieldsetOptions,
        content: Option<&str>,
    ) -> Result<String, BuilderError> {
        let content = content.ok_or_else(|| BuilderError::NoContent {
            entry_point: "govuk_radio_buttons_fieldset".to_string(),
        })?;
        self.fieldset(ChoiceKind::Radio, attribute, options, content, None)
    }

    fn collection(
        &self,
        kind: ChoiceKind,
        attribute: &str,
        choices: &[ChoiceOption],
        options: &FieldsetOptions,
        content: Option<&str>,
    ) -> Result<String, BuilderError> {
        tracing::debug!(
            object = %self.object_name(),
            attribute,
            items = choices.len(),
            ?kind,
            "rendering collection"
        );

        let mut items = String::new();
        for choice in choices {
            let item_options = ChoiceOptions {
                label: LabelOptions {
                    text: choice.text.clone(),
                    ..LabelOptions::default()
                },
                hint: choice.hint.clone(),
                aria_describedby: Vec::new(),
            };

            let item = ChoiceItem {
                kind,
                descriptor: self.descriptor(attribute).with_value(&choice.value),
                options: &item_options,
                checked: self.is_selected(attribute, &choice.value),
                include_hidden: false,
                content: None,
            };
            items.push_str(&item.render()?);
        }

        if kind == ChoiceKind::CheckBox {
            let name = self.descriptor(attribute).multiple_field_name();
            items.push_str(&hidden_input(&name, ""));
        }

        self.fieldset(kind, attribute, options, &items, content)
    }

    fn fieldset(
        &self,
        kind: ChoiceKind,
        attribute: &str,
        options: &FieldsetOptions,
        items: &str,
        trailing: Option<&str>,
    ) -> Result<String, BuilderError> {
        let descriptor = self.descriptor(attribute);

        let legend = compose_legend(&options.legend)?;
        let hint = compose_hint(&descriptor, options.hint.as_deref());
        let error = compose_error_message(&descriptor, self.errors_for(attribute));

        let describedby = DescriptionSet::new()
            .with_hint(hint.as_ref())
            .with_error(error.as_ref())
            .with_extras(&options.aria_describedby)
            .aggregate();

        let choices = Tag::new("div")
            .classes([kind.container_class()])
            .attr("data-module", kind.data_module())
            .html(items)
            .render();

        let mut fieldset = Tag::new("fieldset")
            .classes([FIELDSET_CLASS])
            .attr_opt(DESCRIBEDBY_ATTRIBUTE, describedby);
        for part in [legend, Some(choices), trailing.map(str::to_string)]
            .into_iter()
            .flatten()
        {
            fieldset = fieldset.html(&part);
        }

        // hint and error precede the fieldset inside the form group
        let group = [
            hint.map(|h| h.markup),
            error.map(|e| e.markup),
            Some(fieldset.render()),
        ]
        .into_iter()
        .flatten()
        .collect::<String>();

        Ok(self.form_group(attribute, &group))
    }
}
