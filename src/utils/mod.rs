pub mod error;
pub mod logger;
pub mod mask;
pub mod validation;
