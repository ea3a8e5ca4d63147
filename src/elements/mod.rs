pub mod conditional;
pub mod describedby;
pub mod error_message;
pub mod hint;
pub mod label;
pub mod legend;
