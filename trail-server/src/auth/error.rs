//! Authentication error types.

/// Errors from login and token verification.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Login attempted with an empty username or password
    #[error("username and password are required")]
    MissingCredentials,

    /// No `Authorization` header on a protected request
    #[error("Authorization header required")]
    MissingHeader,

    /// Token absent, malformed, wrongly signed, expired or from another issuer
    #[error("Invalid token")]
    InvalidToken,

    /// Token could not be signed
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}
