use sqlx::FromRow;

/// User document as stored: the login key and the bcrypt hash, nothing else.
#[derive(Clone, PartialEq, Eq, FromRow)]
pub struct UserRecord {
    pub email: String,
    pub password_hash: String, // bcrypt, cost and salt embedded
}

impl UserRecord {
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }
}

impl std::fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRecord")
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}
