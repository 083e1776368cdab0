use crate::modules::session::domain::entities::{Session, SessionUser};
use crate::shared::http::TokenSource;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session storage error: {0}")]
    Storage(String),
}

/// Single source of truth for the persisted session. Every component that
/// needs the token or profile reads it through this port instead of poking at
/// storage directly; `TokenSource` is the read path the HTTP client uses.
///
/// Implementations keep two representations: the primary token/profile
/// entries, and a cookie-format mirror kept only so an external
/// middleware-style reader can see the token. `clear` must expire the mirror
/// too, not just drop the primary entries.
pub trait SessionStore: TokenSource {
    fn save(&self, session: &Session) -> Result<(), SessionStoreError>;

    fn user(&self) -> Option<SessionUser>;

    /// Whether the cookie mirror currently carries a token.
    fn cookie_present(&self) -> bool;

    fn clear(&self) -> Result<(), SessionStoreError>;
}
