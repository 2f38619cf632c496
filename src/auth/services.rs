use tracing::{debug, info, warn};

use crate::auth::{
    dto::Credentials,
    errors::AuthError,
    password::{hash_password, verify_password},
    repo::UserStore,
    repo_types::UserRecord,
};

/// Result of a login attempt that reached a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Granted,
    /// Unknown email or wrong password; callers must not tell the two apart.
    Rejected,
}

/// Hash the password and store a new user record.
pub async fn signup(store: &dyn UserStore, creds: Credentials) -> Result<(), AuthError> {
    let Credentials { email, password } = creds;

    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password)).await??;
    debug!(email = %email, "password hashed");

    store
        .insert(UserRecord::new(email.clone(), password_hash))
        .await
        .map_err(AuthError::Store)?;

    info!(email = %email, "user registered");
    Ok(())
}

/// Look the user up by email and check the password against the stored hash.
pub async fn login(store: &dyn UserStore, creds: Credentials) -> Result<LoginOutcome, AuthError> {
    let Credentials { email, password } = creds;

    let user = match store.find_one_by_email(&email).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            warn!(email = %email, "login unknown email");
            return Ok(LoginOutcome::Rejected);
        }
        Err(e) => return Err(AuthError::Store(e)),
    };

    let stored = user.password_hash;
    let ok = tokio::task::spawn_blocking(move || verify_password(&password, &stored)).await??;

    if !ok {
        warn!(email = %email, "login invalid password");
        return Ok(LoginOutcome::Rejected);
    }

    info!(email = %email, "user logged in");
    Ok(LoginOutcome::Granted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repo::MemoryUserStore;
    use async_trait::async_trait;

    /// Accepts nothing and finds nothing; every call is an outage.
    struct BrokenStore;

    #[async_trait]
    impl UserStore for BrokenStore {
        async fn insert(&self, _record: UserRecord) -> anyhow::Result<()> {
            anyhow::bail!("connection refused")
        }
        async fn find_one_by_email(&self, _email: &str) -> anyhow::Result<Option<UserRecord>> {
            anyhow::bail!("connection refused")
        }
    }

    #[tokio::test]
    async fn signup_then_login_is_granted() {
        let store = MemoryUserStore::new();
        signup(&store, Credentials::new("a@x.com", "secret1"))
            .await
            .expect("signup");
        let outcome = login(&store, Credentials::new("a@x.com", "secret1"))
            .await
            .expect("login");
        assert_eq!(outcome, LoginOutcome::Granted);
    }

    #[tokio::test]
    async fn signup_stores_a_hash_not_the_plaintext() {
        let store = MemoryUserStore::new();
        signup(&store, Credentials::new("a@x.com", "secret1"))
            .await
            .expect("signup");
        let record = store
            .find_one_by_email("a@x.com")
            .await
            .expect("lookup")
            .expect("record stored");
        assert_ne!(record.password_hash, "secret1");
        assert!(verify_password("secret1", &record.password_hash).expect("verify"));
    }

    #[tokio::test]
    async fn unknown_email_and_wrong_password_look_the_same() {
        let store = MemoryUserStore::new();
        signup(&store, Credentials::new("a@x.com", "secret1"))
            .await
            .expect("signup");

        let unknown = login(&store, Credentials::new("b@x.com", "secret1"))
            .await
            .expect("login unknown");
        let wrong = login(&store, Credentials::new("a@x.com", "secret2"))
            .await
            .expect("login wrong password");
        assert_eq!(unknown, LoginOutcome::Rejected);
        assert_eq!(wrong, unknown);
    }

    #[tokio::test]
    async fn duplicate_signup_is_accepted_and_first_record_wins() {
        let store = MemoryUserStore::new();
        signup(&store, Credentials::new("a@x.com", "first"))
            .await
            .expect("first signup");
        signup(&store, Credentials::new("a@x.com", "second"))
            .await
            .expect("second signup");
        assert_eq!(store.count().await, 2);

        let first = login(&store, Credentials::new("a@x.com", "first"))
            .await
            .expect("login");
        let second = login(&store, Credentials::new("a@x.com", "second"))
            .await
            .expect("login");
        assert_eq!(first, LoginOutcome::Granted);
        assert_eq!(second, LoginOutcome::Rejected);
    }

    #[tokio::test]
    async fn store_outage_is_an_error_not_a_rejection() {
        let err = signup(&BrokenStore, Credentials::new("a@x.com", "secret1"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Store(_)));

        let err = login(&BrokenStore, Credentials::new("a@x.com", "secret1"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Store(_)));
    }

    #[tokio::test]
    async fn malformed_stored_hash_is_an_error() {
        let store = MemoryUserStore::new();
        store
            .insert(UserRecord::new("a@x.com", "plaintext-by-mistake"))
            .await
            .expect("insert");
        let err = login(&store, Credentials::new("a@x.com", "plaintext-by-mistake"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Hash(_)));
    }
}
