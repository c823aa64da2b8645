use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_PAGE_SIZE: u32 = 10;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_crm_prefix() -> String {
    "/crm/api".to_string()
}

fn default_accounts_prefix() -> String {
    "/accounts/api".to_string()
}

fn default_auth_prefix() -> String {
    "/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    pub version: u32,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Rows requested per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    #[serde(default = "default_crm_prefix")]
    pub crm_prefix: String,

    #[serde(default = "default_accounts_prefix")]
    pub accounts_prefix: String,

    /// Prefix of the login and registration endpoints.
    #[serde(default = "default_auth_prefix")]
    pub auth_prefix: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            version: 1,
            base_url: default_base_url(),
            page_size: default_page_size(),
            crm_prefix: default_crm_prefix(),
            accounts_prefix: default_accounts_prefix(),
            auth_prefix: default_auth_prefix(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ConsoleState {
    pub version: u32,

    #[serde(default)]
    pub session: Option<Session>,
}
