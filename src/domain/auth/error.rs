/// Failures of the `Authorization: ApiKey <token>` header parse
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("no authorization header included")]
    Missing,
    #[error("malformed authorization header")]
    Malformed,
}
