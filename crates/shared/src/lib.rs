pub mod abstract_trait;
pub mod config;
pub mod errors;
pub mod utils;
pub mod validation;
