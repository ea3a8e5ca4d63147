use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::builder::choices::ChoiceOption;
use crate::elements::label::LabelOptions;
use crate::elements::legend::LegendOptions;

/// A form described in YAML: the bound object, its current values and
/// errors, and the controls to render in order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormDefinition {
    /// Name of the bound object, e.g. `person`
    pub object_name: String,

    /// Current values per attribute
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub values: BTreeMap<String, Vec<String>>,

    /// Error messages per attribute
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, Vec<String>>,

    /// Controls rendered top to bottom
    pub fields: Vec<FieldDefinition>,
}

/// A single control.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldDefinition {
    TextField {
        attribute: String,
        #[serde(default)]
        label: LabelOptions,
        #[serde(default)]
        hint: Option<String>,
    },

    CheckBox {
        attribute: String,
        value: String,
        #[serde(default)]
        label: LabelOptions,
        #[serde(default)]
        hint: Option<String>,
        /// Controls revealed when the box is ticked
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        conditional: Vec<FieldDefinition>,
    },

    RadioButton {
        attribute: String,
        value: String,
        #[serde(default)]
        label: LabelOptions,
        #[serde(default)]
        hint: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        conditional: Vec<FieldDefinition>,
    },

    CollectionCheckBoxes {
        attribute: String,
        #[serde(default)]
        legend: LegendOptions,
        #[serde(default)]
        hint: Option<String>,
        options: Vec<ChoiceOption>,
    },

    CollectionRadioButtons {
        attribute: String,
        #[serde(default)]
        legend: LegendOptions,
        #[serde(default)]
        hint: Option<String>,
        options: Vec<ChoiceOption>,
    },

    /// Hand-built check boxes; `items` omitted is a usage error
    CheckBoxesFieldset {
        attribute: String,
        #[serde(default)]
        legend: LegendOptions,
        #[serde(default)]
        hint: Option<String>,
        #[serde(default)]
        items: Option<Vec<ChoiceDefinition>>,
    },

    RadioButtonsFieldset {
        attribute: String,
        #[serde(default)]
        legend: LegendOptions,
        #[serde(default)]
        hint: Option<String>,
        #[serde(default)]
        items: Option<Vec<ChoiceDefinition>>,
    },
}

/// One hand-built item inside a fieldset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChoiceDefinition {
    pub value: String,

    #[serde(default)]
    pub label: LabelOptions,

    #[serde(default)]
    pub hint: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditional: Vec<FieldDefinition>,
}
