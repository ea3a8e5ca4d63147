use serde::{Deserialize, Serialize};

use crate::builder::choices::{ChoiceKind, ChoiceOptions};
use crate::builder::collection::FieldsetOptions;
use crate::builder::error::BuilderError;
use crate::builder::form_builder::FormBuilder;
use crate::builder::text_field::TextFieldOptions;
use crate::definition::definition_model::{ChoiceDefinition, FieldDefinition, FormDefinition};
use crate::elements::label::LabelOptions;
use crate::elements::legend::LegendOptions;

/// Keywords applied where a definition leaves them unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderDefaults {
    #[serde(default)]
    pub label_size: Option<String>,

    #[serde(default)]
    pub label_weight: Option<String>,

    #[serde(default)]
    pub legend_size: Option<String>,
}

impl RenderDefaults {
    fn label(&self, label: &LabelOptions) -> LabelOptions {
        LabelOptions {
            text: label.text.clone(),
            size: label.size.clone().or_else(|| self.label_size.clone()),
            weight: label.weight.clone().or_else(|| self.label_weight.clone()),
        }
    }

    fn legend(&self, legend: &LegendOptions) -> LegendOptions {
        LegendOptions {
            text: legend.text.clone(),
            size: legend.size.clone().or_else(|| self.legend_size.clone()),
            tag: legend.tag.clone(),
        }
    }
}

/// Renders form definitions through a [`FormBuilder`].
pub struct DefinitionRenderer<'a> {
    builder: FormBuilder,
    defaults: &'a RenderDefaults,
}

impl<'a> DefinitionRenderer<'a> {
    pub fn new(definition: &FormDefinition, defaults: &'a RenderDefaults) -> Self {
        let mut builder = FormBuilder::new(&definition.object_name);
        for (attribute, values) in &definition.values {
            for value in values {
                builder = builder.with_value(attribute, value);
            }
        }
        for (attribute, messages) in &definition.errors {
            for message in messages {
                builder = builder.with_error(attribute, message);
            }
        }

        Self { builder, defaults }
    }

    /// Render every field, one fragment per line. The first error aborts the render.
    pub fn render(&self, fields: &[FieldDefinition]) -> Result<String, BuilderError> {
        let fragments = fields
            .iter()
            .map(|field| self.render_field(field))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(fragments.join("\n"))
    }

    fn render_field(&self, field: &FieldDefinition) -> Result<String, BuilderError> {
        match field {
            FieldDefinition::TextField {
                attribute,
                label,
                hint,
            } => {
                let options = TextFieldOptions {
                    label: self.defaults.label(label),
                    hint: hint.clone(),
                    aria_describedby: Vec::new(),
                };
                self.builder.govuk_text_field(attribute, &options)
            }

            FieldDefinition::CheckBox {
                attribute,
                value,
                label,
                hint,
                conditional,
            } => self.render_item(
                ChoiceKind::CheckBox,
                attribute,
                value,
                label,
                hint.as_deref(),
                conditional,
            ),

            FieldDefinition::RadioButton {
                attribute,
                value,
                label,
                hint,
                conditional,
            } => self.render_item(
                ChoiceKind::Radio,
                attribute,
                value,
                label,
                hint.as_deref(),
                conditional,
            ),

            FieldDefinition::CollectionCheckBoxes {
                attribute,
                legend,
                hint,
                options,
            } => self.builder.govuk_collection_check_boxes(
                attribute,
                options,
                &self.fieldset_options(legend, hint.as_deref()),
                None,
            ),

            FieldDefinition::CollectionRadioButtons {
                attribute,
                legend,
                hint,
                options,
            } => self.builder.govuk_collection_radio_buttons(
                attribute,
                options,
                &self.fieldset_options(legend, hint.as_deref()),
                None,
            ),

            FieldDefinition::CheckBoxesFieldset {
                attribute,
                legend,
                hint,
                items,
            } => {
                let content = self.render_items(ChoiceKind::CheckBox, attribute, items.as_deref())?;
                self.builder.govuk_check_boxes_fieldset(
                    attribute,
                    &self.fieldset_options(legend, hint.as_deref()),
                    content.as_deref(),
                )
            }

            FieldDefinition::RadioButtonsFieldset {
                attribute,
                legend,
                hint,
                items,
            } => {
                let content = self.render_items(ChoiceKind::Radio, attribute, items.as_deref())?;
                self.builder.govuk_radio_buttons_fieldset(
                    attribute,
                    &self.fieldset_options(legend, hint.as_deref()),
                    content.as_deref(),
                )
            }
        }
    }

    fn render_items(
        &self,
        kind: ChoiceKind,
        attribute: &str,
        items: Option<&[ChoiceDefinition]>,
    ) -> Result<Option<String>, BuilderError> {
        let Some(items) = items else {
            return Ok(None);
        };

        let mut content = String::new();
        for item in items {
            content.push_str(&self.render_item(
                kind,
                attribute,
                &item.value,
                &item.label,
                item.hint.as_deref(),
                &item.conditional,
            )?);
        }
        Ok(Some(content))
    }

    fn render_item(
        &self,
        kind: ChoiceKind,
        attribute: &str,
        value: &str,
        label: &LabelOptions,
        hint: Option<&str>,
        conditional: &[FieldDefinition],
    ) -> Result<String, BuilderError> {
        // nested controls are rendered first and handed over as a fragment
        let nested = conditional
            .iter()
            .map(|field| self.render_field(field))
            .collect::<Result<String, _>>()?;

        let options = ChoiceOptions {
            label: self.defaults.label(label),
            hint: hint.map(str::to_string),
            aria_describedby: Vec::new(),
        };
        let content = Some(nested.as_str()).filter(|n| !n.is_empty());

        match kind {
            ChoiceKind::CheckBox => self.builder.govuk_check_box(attribute, value, &options, content),
            ChoiceKind::Radio => self.builder.govuk_radio_button(attribute, value, &options, content),
        }
    }

    fn fieldset_options(&self, legend: &LegendOptions, hint: Option<&str>) -> FieldsetOptions {
        FieldsetOptions {
            legend: self.defaults.legend(legend),
            hint: hint.map(str::to_string),
            aria_describedby: Vec::new(),
        }
    }
}

/// Render a whole definition.
pub fn render_definition(
    definition: &FormDefinition,
    defaults: &RenderDefaults,
) -> Result<String, BuilderError> {
    tracing::debug!(
        object = %definition.object_name,
        fields = definition.fields.len(),
        "rendering form definition"
    );
    DefinitionRenderer::new(definition, defaults).render(&definition.fields)
}
