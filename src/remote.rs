use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::model::ConsoleConfig;
use crate::session::TokenSource;

mod error;
pub use self::error::{ApiError, ErrorKind, FieldErrors, GENERAL as GENERAL_FIELD};

mod http_client;

mod types;
use self::types::*;

mod auth_session;
mod company;
mod leases;
mod resources;

/// Base URL plus the three path prefixes the backend mounts its APIs under.
#[derive(Clone, Debug)]
pub struct Endpoints {
    pub base_url: String,
    pub crm_prefix: String,
    pub accounts_prefix: String,
    pub auth_prefix: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        Self::from_config(&ConsoleConfig {
            base_url: base_url.to_string(),
            ..ConsoleConfig::default()
        })
    }

    pub fn from_config(cfg: &ConsoleConfig) -> Self {
        Self {
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            crm_prefix: cfg.crm_prefix.trim_end_matches('/').to_string(),
            accounts_prefix: cfg.accounts_prefix.trim_end_matches('/').to_string(),
            auth_prefix: cfg.auth_prefix.trim_end_matches('/').to_string(),
        }
    }
}

/// Authenticated client for the CRM backend.
///
/// The client never retries; a failed call surfaces its [`ApiError`] and the
/// caller's in-memory state is left for it to decide about.
pub struct RemoteClient {
    endpoints: Endpoints,
    tokens: Arc<dyn TokenSource>,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(endpoints: Endpoints, tokens: Arc<dyn TokenSource>) -> Result<Self> {
        Self::with_timeout(endpoints, tokens, Duration::from_secs(30))
    }

    pub fn with_timeout(
        endpoints: Endpoints,
        tokens: Arc<dyn TokenSource>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("crm-console")
            .timeout(timeout)
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            endpoints,
            tokens,
            client,
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}
