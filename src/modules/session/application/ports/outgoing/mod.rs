pub mod auth_gateway;
pub mod session_store;

pub use auth_gateway::{AuthGateway, LoginOutcome, PasswordResetTicket};
pub use session_store::{SessionStore, SessionStoreError};
