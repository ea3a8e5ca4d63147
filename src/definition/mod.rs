pub mod definition_model;
pub mod renderer;
