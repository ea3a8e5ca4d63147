pub mod choices;
pub mod collection;
pub mod error;
pub mod form_builder;
pub mod text_field;
