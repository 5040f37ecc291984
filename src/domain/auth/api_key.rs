use axum::http::{header::AUTHORIZATION, HeaderMap};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use super::CredentialError;

const API_KEY_SCHEME: &str = "ApiKey";

/// Extract the API key from `Authorization: ApiKey <token>`.
///
/// Header lookup is case-insensitive. The value must be exactly two
/// non-empty tokens separated by a single space, the first being `ApiKey`.
pub fn extract_api_key(headers: &HeaderMap) -> Result<&str, CredentialError> {
    let value = headers.get(AUTHORIZATION).ok_or(CredentialError::Missing)?;
    let value = value.to_str().map_err(|_| CredentialError::Malformed)?;

    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(API_KEY_SCHEME), Some(token), None) if !token.is_empty() => Ok(token),
        _ => Err(CredentialError::Malformed),
    }
}

/// Issue a new API key: 64 lowercase hex chars
pub fn generate_api_key() -> String {
    let mut hasher = Sha256::new();
    hasher.update(Uuid::new_v4().as_bytes());
    hasher.update(Uuid::new_v4().as_bytes());
    format!("{:x}", hasher.finalize())
}
