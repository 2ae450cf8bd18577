pub mod constants;
pub mod metadata;
