use tracing::warn;

use crate::modules::session::application::ports::outgoing::{
    AuthGateway, SessionStore, SessionStoreError,
};

/// Sign out. The backend call is best-effort: local session state is dropped
/// even when the logout endpoint fails, so the operator is never stuck
/// signed-in because the backend was unreachable.
pub struct LogoutUseCase<G, S>
where
    G: AuthGateway,
    S: SessionStore,
{
    gateway: G,
    store: S,
}

impl<G, S> LogoutUseCase<G, S>
where
    G: AuthGateway,
    S: SessionStore,
{
    pub fn new(gateway: G, store: S) -> Self {
        Self { gateway, store }
    }

    pub async fn execute(&self) -> Result<(), SessionStoreError> {
        if let Some(token) = self.store.token() {
            if let Err(failure) = self.gateway.logout(&token).await {
                warn!(error = %failure, "logout call failed; clearing local session anyway");
            }
        }
        self.store.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::Mutex;

    use crate::modules::session::application::ports::outgoing::{
        LoginOutcome, PasswordResetTicket,
    };
    use crate::modules::session::domain::entities::{Session, SessionUser};
    use crate::shared::domain::EntityId;
    use crate::shared::http::{ApiFailure, TokenSource};

    struct MockAuthGateway {
        fail_logout: bool,
        logged_out: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl AuthGateway for MockAuthGateway {
        async fn login(&self, _email: &str, _password: &str) -> Result<LoginOutcome, ApiFailure> {
            unimplemented!("not used in logout tests")
        }

        async fn logout(&self, token: &str) -> Result<(), ApiFailure> {
            self.logged_out.lock().unwrap().push(token.to_string());
            if self.fail_logout {
                return Err(ApiFailure::Status {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: String::new(),
                });
            }
            Ok(())
        }

        async fn forgot_password(&self, _email: &str) -> Result<PasswordResetTicket, ApiFailure> {
            unimplemented!("not used in logout tests")
        }

        async fn reset_password(&self, _token: &str, _new: &str) -> Result<(), ApiFailure> {
            unimplemented!("not used in logout tests")
        }

        async fn change_password(&self, _email: &str, _new: &str) -> Result<(), ApiFailure> {
            unimplemented!("not used in logout tests")
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        session: Mutex<Option<Session>>,
    }

    impl crate::shared::http::TokenSource for MemoryStore {
        fn token(&self) -> Option<String> {
            self.session
                .lock()
                .unwrap()
                .as_ref()
                .map(|session| session.token.clone())
        }
    }

    impl SessionStore for MemoryStore {
        fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
            *self.session.lock().unwrap() = Some(session.clone());
            Ok(())
        }

        fn user(&self) -> Option<SessionUser> {
            self.session
                .lock()
                .unwrap()
                .as_ref()
                .map(|session| session.user.clone())
        }

        fn cookie_present(&self) -> bool {
            self.session.lock().unwrap().is_some()
        }

        fn clear(&self) -> Result<(), SessionStoreError> {
            *self.session.lock().unwrap() = None;
            Ok(())
        }
    }

    fn signed_in_store() -> MemoryStore {
        let store = MemoryStore::default();
        store
            .save(&Session {
                token: "jwt-token".to_string(),
                user: SessionUser {
                    id: EntityId::from("u1"),
                    user_name: "site.admin".to_string(),
                    email: "admin@macc.example".to_string(),
                    role: "admin".to_string(),
                    image: None,
                },
            })
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_logout_calls_backend_with_stored_token_and_clears() {
        let use_case = LogoutUseCase::new(
            MockAuthGateway {
                fail_logout: false,
                logged_out: Mutex::new(Vec::new()),
            },
            signed_in_store(),
        );

        use_case.execute().await.unwrap();

        assert_eq!(
            use_case.gateway.logged_out.lock().unwrap().as_slice(),
            ["jwt-token"]
        );
        assert!(use_case.store.token().is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_even_when_backend_fails() {
        let use_case = LogoutUseCase::new(
            MockAuthGateway {
                fail_logout: true,
                logged_out: Mutex::new(Vec::new()),
            },
            signed_in_store(),
        );

        use_case.execute().await.unwrap();
        assert!(use_case.store.token().is_none());
    }

    #[tokio::test]
    async fn test_logout_without_session_skips_backend_call() {
        let use_case = LogoutUseCase::new(
            MockAuthGateway {
                fail_logout: false,
                logged_out: Mutex::new(Vec::new()),
            },
            MemoryStore::default(),
        );

        use_case.execute().await.unwrap();
        assert!(use_case.gateway.logged_out.lock().unwrap().is_empty());
    }
}
