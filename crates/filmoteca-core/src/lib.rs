pub mod domain;
pub mod errors;
pub mod services;

pub use errors::CoreError;
