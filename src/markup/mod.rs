pub mod constants;
pub mod tag;
