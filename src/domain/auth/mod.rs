pub mod api_key;
pub mod error;

pub use api_key::{extract_api_key, generate_api_key};
pub use error::CredentialError;
