use serde::Deserialize;

use crate::auth::errors::AuthError;

/// Raw urlencoded body of the signup and login forms.
#[derive(Default, Deserialize)]
pub struct CredentialsForm {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Email and plaintext password, both present.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl TryFrom<CredentialsForm> for Credentials {
    type Error = AuthError;

    fn try_from(form: CredentialsForm) -> Result<Self, Self::Error> {
        // Only absence counts; an empty string is a value like any other.
        let email = form.email.ok_or(AuthError::MissingField("email"))?;
        let password = form.password.ok_or(AuthError::MissingField("password"))?;
        Ok(Self { email, password })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl std::fmt::Debug for CredentialsForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsForm")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
