use async_trait::async_trait;

use crate::modules::session::domain::entities::SessionUser;
use crate::shared::http::ApiFailure;

/// What a successful login hands back: the server's message, the bearer
/// token, and the profile with the token already stripped out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub message: String,
    pub token: String,
    pub user: SessionUser,
}

/// Acknowledgement of a forgot-password request. The reset token is only
/// present when the backend chooses to return it instead of emailing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordResetTicket {
    pub message: String,
    pub reset_token: Option<String>,
}

/// Authentication endpoints. Token issuance is entirely the backend's; this
/// port only consumes what it returns.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, ApiFailure>;

    async fn logout(&self, token: &str) -> Result<(), ApiFailure>;

    async fn forgot_password(&self, email: &str) -> Result<PasswordResetTicket, ApiFailure>;

    async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), ApiFailure>;

    async fn change_password(&self, email: &str, new_password: &str) -> Result<(), ApiFailure>;
}
