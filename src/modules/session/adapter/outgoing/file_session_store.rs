use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::modules::session::application::ports::outgoing::{SessionStore, SessionStoreError};
use crate::modules::session::domain::entities::{Session, SessionUser};
use crate::shared::http::TokenSource;

const TOKEN_FILE: &str = "token";
const USER_FILE: &str = "user.json";
const COOKIE_FILE: &str = "cookie";

/// Seven days, matching the backend's token lifetime.
const COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 7;

/// Disk-backed session store. Layout inside the session directory:
///
/// - `token`: the raw bearer token
/// - `user.json`: the serialized profile, token excluded
/// - `cookie`: `token=<value>; path=/; max-age=604800; SameSite=Lax`,
///   a mirror kept only for external readers that expect cookie syntax
///
/// Clearing writes an expired cookie (`max-age=0`) rather than deleting the
/// file, the same way the dashboard header expires it on sign-out.
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    fn read_trimmed(&self, file: &str) -> Option<String> {
        let content = fs::read_to_string(self.path(file)).ok()?;
        let trimmed = content.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    fn write(&self, file: &str, content: &str) -> Result<(), SessionStoreError> {
        fs::create_dir_all(&self.dir).map_err(storage_error)?;
        fs::write(self.path(file), content).map_err(storage_error)
    }

    fn remove(&self, file: &str) -> Result<(), SessionStoreError> {
        match fs::remove_file(self.path(file)) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(storage_error(error)),
        }
    }

    fn live_cookie(token: &str) -> String {
        format!("token={token}; path=/; max-age={COOKIE_MAX_AGE_SECS}; SameSite=Lax")
    }

    fn expired_cookie() -> String {
        "token=; path=/; max-age=0".to_string()
    }
}

impl TokenSource for FileSessionStore {
    fn token(&self) -> Option<String> {
        self.read_trimmed(TOKEN_FILE)
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let profile = serde_json::to_string_pretty(&session.user)
            .map_err(|error| SessionStoreError::Storage(error.to_string()))?;

        self.write(TOKEN_FILE, &session.token)?;
        self.write(USER_FILE, &profile)?;
        self.write(COOKIE_FILE, &Self::live_cookie(&session.token))
    }

    fn user(&self) -> Option<SessionUser> {
        let raw = self.read_trimmed(USER_FILE)?;
        serde_json::from_str(&raw).ok()
    }

    fn cookie_present(&self) -> bool {
        let Some(cookie) = self.read_trimmed(COOKIE_FILE) else {
            return false;
        };
        cookie_token_value(&cookie).is_some_and(|value| !value.is_empty())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        self.remove(TOKEN_FILE)?;
        self.remove(USER_FILE)?;
        self.write(COOKIE_FILE, &Self::expired_cookie())
    }
}

fn cookie_token_value(cookie: &str) -> Option<&str> {
    cookie.split(';').map(str::trim).find_map(|attribute| {
        attribute
            .strip_prefix("token=")
            .map(|value| value.trim())
    })
}

fn storage_error(error: std::io::Error) -> SessionStoreError {
    SessionStoreError::Storage(error.to_string())
}
