use std::sync::Arc;

use crate::modules::session::application::ports::outgoing::SessionStore;

/// What a protected page should do before rendering anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    RedirectToLogin,
}

/// Client-side gate in front of every dashboard page. A token in the primary
/// store or in the cookie mirror counts as signed-in; this is a convenience
/// gate, not a security boundary; the backend still rejects bad tokens per
/// request.
pub struct SessionGuard<S: SessionStore> {
    store: Arc<S>,
}

impl<S: SessionStore> SessionGuard<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn check(&self) -> GuardDecision {
        if self.store.token().is_some() || self.store.cookie_present() {
            GuardDecision::Proceed
        } else {
            GuardDecision::RedirectToLogin
        }
    }

    /// Login-page counterpart: an already signed-in visitor skips the form.
    pub fn already_signed_in(&self) -> bool {
        self.check() == GuardDecision::Proceed
    }
}
