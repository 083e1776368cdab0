use email_address::EmailAddress;

use crate::modules::session::application::ports::outgoing::{
    AuthGateway, SessionStore, SessionStoreError,
};
use crate::modules::session::domain::entities::{Session, SessionUser};
use crate::shared::http::ApiFailure;

// ========================= Login Request =========================

/// Validated login credentials. Construction is the only way in, so a request
/// that reaches the gateway is guaranteed well-formed.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password is required")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(email: &str, password: &str) -> Result<Self, LoginRequestError> {
        let email = email.trim();
        if email.is_empty() || !EmailAddress::is_valid(email) {
            return Err(LoginRequestError::InvalidEmail);
        }

        if password.trim().is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_lowercase(),
            password: password.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ========================= Login Use Case =========================

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error(transparent)]
    Api(#[from] ApiFailure),
    #[error(transparent)]
    Session(#[from] SessionStoreError),
}

impl LoginError {
    /// The line shown to the operator; invalid credentials come back from the
    /// backend as a status failure with its own message.
    pub fn user_message(&self) -> String {
        match self {
            LoginError::Api(failure) => failure.user_message(),
            LoginError::Session(error) => error.to_string(),
        }
    }
}

/// Sign in and persist the session: token, profile, and the cookie mirror all
/// land in the store before the caller sees the profile.
pub struct LoginUseCase<G, S>
where
    G: AuthGateway,
    S: SessionStore,
{
    gateway: G,
    store: S,
}

impl<G, S> LoginUseCase<G, S>
where
    G: AuthGateway,
    S: SessionStore,
{
    pub fn new(gateway: G, store: S) -> Self {
        Self { gateway, store }
    }

    pub async fn execute(&self, request: LoginRequest) -> Result<SessionUser, LoginError> {
        let outcome = self
            .gateway
            .login(request.email(), request.password())
            .await?;

        let session = Session {
            token: outcome.token,
            user: outcome.user,
        };
        self.store.save(&session)?;

        Ok(session.user)
    }
}
