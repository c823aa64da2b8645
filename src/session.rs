//! Session-scoped credentials shared by every client call.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use anyhow::Result;

pub use crate::model::Session;
use crate::store::{persist_session, read_state_file};

/// Where the resource client reads its bearer token from.
pub trait TokenSource: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// A fixed token; handy for scripts and tests.
#[derive(Clone, Debug, Default)]
pub struct StaticToken(pub Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }
}

impl TokenSource for StaticToken {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// The logged-in operator's token and username.
///
/// Set on login or registration, cleared on logout. When backed by a state
/// file every change is written through so the next process starts logged in.
#[derive(Debug, Default)]
pub struct SessionStore {
    current: RwLock<Option<Session>>,
    path: Option<PathBuf>,
}

impl SessionStore {
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let st = read_state_file(path)?;
        Ok(Self {
            current: RwLock::new(st.session),
            path: Some(path.to_path_buf()),
        })
    }

    pub fn current(&self) -> Option<Session> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn username(&self) -> Option<String> {
        self.current().map(|s| s.username)
    }

    pub fn is_logged_in(&self) -> bool {
        self.current().is_some()
    }

    pub fn set(&self, session: Session) -> Result<()> {
        if let Some(path) = &self.path {
            persist_session(path, Some(&session))?;
        }
        log::info!("session started for {}", session.username);
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = Some(session);
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        if let Some(path) = &self.path {
            persist_session(path, None)?;
        }
        log::info!("session cleared");
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}

impl TokenSource for SessionStore {
    fn token(&self) -> Option<String> {
        self.current().map(|s| s.token)
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
