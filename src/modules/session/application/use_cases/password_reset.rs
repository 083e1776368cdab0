use email_address::EmailAddress;

use crate::modules::session::application::ports::outgoing::{AuthGateway, PasswordResetTicket};
use crate::shared::http::ApiFailure;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordResetRequestError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Reset token is required")]
    EmptyToken,
    #[error("Password is required")]
    EmptyPassword,
}

#[derive(Debug, thiserror::Error)]
pub enum PasswordResetError {
    #[error(transparent)]
    Request(#[from] PasswordResetRequestError),
    #[error(transparent)]
    Api(#[from] ApiFailure),
}

/// Request a reset token for an account. The backend mails the token; some
/// deployments also return it in the response body.
pub struct ForgotPasswordUseCase<G: AuthGateway> {
    gateway: G,
}

impl<G: AuthGateway> ForgotPasswordUseCase<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, email: &str) -> Result<PasswordResetTicket, PasswordResetError> {
        let email = normalize_email(email)?;
        Ok(self.gateway.forgot_password(&email).await?)
    }
}

/// Redeem a reset token for a new password.
pub struct ResetPasswordUseCase<G: AuthGateway> {
    gateway: G,
}

impl<G: AuthGateway> ResetPasswordUseCase<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, token: &str, new_password: &str) -> Result<(), PasswordResetError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(PasswordResetRequestError::EmptyToken.into());
        }
        if new_password.trim().is_empty() {
            return Err(PasswordResetRequestError::EmptyPassword.into());
        }
        Ok(self.gateway.reset_password(token, new_password).await?)
    }
}

fn normalize_email(email: &str) -> Result<String, PasswordResetRequestError> {
    let email = email.trim();
    if email.is_empty() || !EmailAddress::is_valid(email) {
        return Err(PasswordResetRequestError::InvalidEmail);
    }
    Ok(email.to_lowercase())
}
