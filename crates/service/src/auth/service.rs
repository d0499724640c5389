use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::domain::{PublicUser, SigninInput, SignupInput, User, UserType, USERS};
use super::password::PasswordScheme;
use crate::errors::ServiceError;
use crate::storage::{Collection, DocumentStore};
use crate::validate::present;

/// Signup and signin over the `users` collection.
pub struct AuthService {
    users: Collection<User>,
    scheme: PasswordScheme,
}

impl AuthService {
    pub fn new(store: Arc<dyn DocumentStore>, scheme: PasswordScheme) -> Self {
        Self { users: Collection::new(USERS, store), scheme }
    }

    pub fn scheme(&self) -> PasswordScheme {
        self.scheme
    }

    /// Register a new user. The email must not be taken yet.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::auth::{AuthService, PasswordScheme, domain::SignupInput};
    /// use service::storage::MemoryStore;
    /// let svc = AuthService::new(Arc::new(MemoryStore::new()), PasswordScheme::Plaintext);
    /// let input = SignupInput {
    ///     email: Some("user@example.com".into()),
    ///     password: Some("Secret123".into()),
    ///     name: Some("Test".into()),
    ///     ..Default::default()
    /// };
    /// let user = tokio_test::block_on(svc.signup(input)).unwrap();
    /// assert_eq!(user.email, "user@example.com");
    /// ```
    #[instrument(skip(self, input), fields(email = ?input.email))]
    pub async fn signup(&self, mut input: SignupInput) -> Result<PublicUser, ServiceError> {
        let (email, password, name) = match (present(&input.email), present(&input.password), present(&input.name)) {
            (Some(e), Some(p), Some(n)) => (e.to_string(), p.to_string(), n.to_string()),
            _ => return Err(ServiceError::missing_fields()),
        };
        let user_type = match present(&input.user_type) {
            Some(t) => Some(t.parse::<UserType>()?),
            None => None,
        };
        input.strip_reserved();

        let stored_password = self.scheme.hash(&password)?;
        let user = self
            .users
            .insert_with(
                |existing| {
                    if let Some(dup) = existing.iter().find(|u| u.email == email) {
                        debug!(user_id = %dup.id, "email already registered");
                        return Err(ServiceError::Conflict("User with this email already exists".into()));
                    }
                    Ok(())
                },
                || User {
                    id: Uuid::new_v4().to_string(),
                    email: email.clone(),
                    password: stored_password,
                    name,
                    user_type,
                    created_at: Some(Utc::now()),
                    extra: input.extra,
                },
            )
            .await?;

        info!(user_id = %user.id, email = %user.email, user_type = ?user.user_type, "user_registered");
        Ok(user.into())
    }

    /// Authenticate by exact email match, then password match under the configured scheme.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::auth::{AuthService, PasswordScheme, domain::{SigninInput, SignupInput}};
    /// use service::storage::MemoryStore;
    /// let svc = AuthService::new(Arc::new(MemoryStore::new()), PasswordScheme::Plaintext);
    /// let _ = tokio_test::block_on(svc.signup(SignupInput {
    ///     email: Some("u@e.com".into()),
    ///     password: Some("Passw0rd".into()),
    ///     name: Some("N".into()),
    ///     ..Default::default()
    /// }));
    /// let user = tokio_test::block_on(svc.signin(SigninInput {
    ///     email: Some("u@e.com".into()),
    ///     password: Some("Passw0rd".into()),
    /// })).unwrap();
    /// assert_eq!(user.name, "N");
    /// ```
    #[instrument(skip(self, input), fields(email = ?input.email))]
    pub async fn signin(&self, input: SigninInput) -> Result<PublicUser, ServiceError> {
        let (email, password) = match (present(&input.email), present(&input.password)) {
            (Some(e), Some(p)) => (e, p),
            _ => return Err(ServiceError::Validation("Email and password are required".into())),
        };

        let user = self
            .users
            .find(|u| u.email == email)
            .await?
            .filter(|u| self.scheme.verify(password, &u.password))
            .ok_or_else(|| ServiceError::Unauthorized("Invalid email or password".into()))?;

        info!(user_id = %user.id, "user_signed_in");
        Ok(user.into())
    }

    #[cfg(test)]
    async fn list_users(&self) -> Result<Vec<PublicUser>, ServiceError> {
        Ok(self.users.load().await?.into_iter().map(PublicUser::from).collect())
    }
}
