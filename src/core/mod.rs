pub mod accessor;

pub use accessor::{get_api_key, CredentialAccessor};
