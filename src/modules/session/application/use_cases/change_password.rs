use email_address::EmailAddress;

use crate::modules::session::application::ports::outgoing::AuthGateway;
use crate::shared::http::ApiFailure;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChangePasswordRequestError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password is required")]
    EmptyPassword,
}

#[derive(Debug, thiserror::Error)]
pub enum ChangePasswordError {
    #[error(transparent)]
    Request(#[from] ChangePasswordRequestError),
    #[error(transparent)]
    Api(#[from] ApiFailure),
}

/// Settings-page password change for an already signed-in operator.
pub struct ChangePasswordUseCase<G: AuthGateway> {
    gateway: G,
}

impl<G: AuthGateway> ChangePasswordUseCase<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, email: &str, new_password: &str) -> Result<(), ChangePasswordError> {
        let email = email.trim();
        if email.is_empty() || !EmailAddress::is_valid(email) {
            return Err(ChangePasswordRequestError::InvalidEmail.into());
        }
        if new_password.trim().is_empty() {
            return Err(ChangePasswordRequestError::EmptyPassword.into());
        }

        Ok(self
            .gateway
            .change_password(&email.to_lowercase(), new_password)
            .await?)
    }
}
