//! Accessible GOV.UK Design System form controls.
//!
//! Ids are derived from an object/attribute/value triple so that labels,
//! hints, error messages and conditionally revealed content can all be wired
//! to their control by plain string equality.

pub mod builder;
pub mod cli;
pub mod definition;
pub mod elements;
pub mod identity;
pub mod markup;

pub use builder::choices::{ChoiceKind, ChoiceOption, ChoiceOptions};
pub use builder::collection::FieldsetOptions;
pub use builder::error::BuilderError;
pub use builder::form_builder::FormBuilder;
pub use builder::text_field::TextFieldOptions;
pub use elements::label::LabelOptions;
pub use elements::legend::LegendOptions;
pub use identity::descriptor::{AttributeDescriptor, ElementIdentity, derive};
