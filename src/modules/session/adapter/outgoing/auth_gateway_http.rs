use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::modules::session::application::ports::outgoing::{
    AuthGateway, LoginOutcome, PasswordResetTicket,
};
use crate::modules::session::domain::entities::SessionUser;
use crate::shared::http::{ApiClient, ApiFailure};

/// REST adapter for the `/users/*` authentication endpoints.
pub struct AuthGatewayHttp {
    api: ApiClient,
}

impl AuthGatewayHttp {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

// Login responds with `{message, userUpdated: {token, ...profile}}`; the
// profile fields sit beside the token rather than under a nested key.
#[derive(Debug, Deserialize)]
struct LoginResponseDto {
    #[serde(default)]
    message: String,
    #[serde(rename = "userUpdated")]
    user_updated: LoginUserDto,
}

#[derive(Debug, Deserialize)]
struct LoginUserDto {
    token: String,
    #[serde(flatten)]
    profile: SessionUser,
}

#[derive(Debug, Deserialize)]
struct ForgotPasswordResponseDto {
    #[serde(default)]
    message: String,
    #[serde(rename = "resetToken", default)]
    reset_token: Option<String>,
}

#[async_trait]
impl AuthGateway for AuthGatewayHttp {
    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, ApiFailure> {
        let body = json!({ "email": email, "password": password });
        let response = self.api.send(self.api.post("/users/login").json(&body)).await?;
        let dto: LoginResponseDto = response.json().await?;

        Ok(LoginOutcome {
            message: dto.message,
            token: dto.user_updated.token,
            user: dto.user_updated.profile,
        })
    }

    async fn logout(&self, token: &str) -> Result<(), ApiFailure> {
        let body = json!({ "token": token });
        self.api.send(self.api.post("/users/logout").json(&body)).await?;
        Ok(())
    }

    async fn forgot_password(&self, email: &str) -> Result<PasswordResetTicket, ApiFailure> {
        let body = json!({ "email": email });
        let response = self
            .api
            .send(self.api.post("/users/forget-password").json(&body))
            .await?;
        let dto: ForgotPasswordResponseDto = response.json().await?;

        Ok(PasswordResetTicket {
            message: dto.message,
            reset_token: dto.reset_token,
        })
    }

    async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), ApiFailure> {
        let body = json!({ "newPassword": new_password });
        self.api
            .send(self.api.post(&format!("/users/reset/{token}")).json(&body))
            .await?;
        Ok(())
    }

    async fn change_password(&self, email: &str, new_password: &str) -> Result<(), ApiFailure> {
        let body = json!({ "email": email, "newPassword": new_password });
        self.api
            .send(self.api.post("/users/change_password").json(&body))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_splits_token_from_profile() {
        let json = r#"{
            "message": "Login successful",
            "userUpdated": {
                "token": "jwt-token-value",
                "_id": "u1",
                "userName": "site.admin",
                "email": "admin@macc.example",
                "role": "admin",
                "isActive": true
            }
        }"#;

        let dto: LoginResponseDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.message, "Login successful");
        assert_eq!(dto.user_updated.token, "jwt-token-value");
        assert_eq!(dto.user_updated.profile.user_name, "site.admin");
        assert_eq!(dto.user_updated.profile.role, "admin");
    }

    #[test]
    fn test_forgot_password_reset_token_is_optional() {
        let with_token: ForgotPasswordResponseDto =
            serde_json::from_str(r#"{"message":"sent","resetToken":"abc"}"#).unwrap();
        assert_eq!(with_token.reset_token.as_deref(), Some("abc"));

        let without: ForgotPasswordResponseDto =
            serde_json::from_str(r#"{"message":"sent"}"#).unwrap();
        assert!(without.reset_token.is_none());
    }
}
