use axum::extract::rejection::FormRejection;
use thiserror::Error;

/// Failures of the credential flow. A wrong password is not one of these; see
/// `LoginOutcome::Rejected`.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing form field: {0}")]
    MissingField(&'static str),

    #[error("unreadable form body")]
    Form(#[from] FormRejection),

    #[error("password hashing failed")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("password hashing task failed")]
    Join(#[from] tokio::task::JoinError),

    #[error("user store error")]
    Store(#[source] anyhow::Error),
}
