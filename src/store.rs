//! On-disk config and session state, one directory per operator.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::model::{ConsoleConfig, ConsoleState, Session};

const APP_DIR: &str = "crm-console";
const HOME_ENV: &str = "CRM_CONSOLE_HOME";

#[derive(Clone, Debug)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// `explicit`, else `$CRM_CONSOLE_HOME`, else the XDG config dir.
    pub fn resolve_dir(explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(p) = explicit {
            return Ok(p.to_path_buf());
        }
        if let Some(p) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(p));
        }
        if let Some(p) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(p).join(APP_DIR));
        }
        let home = std::env::var_os("HOME")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| anyhow!("cannot locate config dir (set --config-dir or {})", HOME_ENV))?;
        Ok(PathBuf::from(home).join(".config").join(APP_DIR))
    }

    pub fn open(root: &Path) -> Result<Self> {
        fs::create_dir_all(root)
            .with_context(|| format!("create config dir {}", root.display()))?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn state_path(&self) -> PathBuf {
        self.root.join("state.json")
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.join("console.log")
    }

    pub fn read_config(&self) -> Result<ConsoleConfig> {
        let path = self.root.join("config.json");
        if !path.exists() {
            return Ok(ConsoleConfig::default());
        }
        let bytes = fs::read(&path).context("read config.json")?;
        let cfg: ConsoleConfig = serde_json::from_slice(&bytes).context("parse config.json")?;
        if cfg.version != 1 {
            anyhow::bail!("unsupported config version {}", cfg.version);
        }
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &ConsoleConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.root.join("config.json"), &bytes).context("write config.json")?;
        Ok(())
    }

    pub fn read_state(&self) -> Result<ConsoleState> {
        read_state_file(&self.state_path())
    }

    pub fn write_state(&self, st: &ConsoleState) -> Result<()> {
        write_state_file(&self.state_path(), st)
    }
}

pub(crate) fn read_state_file(path: &Path) -> Result<ConsoleState> {
    if !path.exists() {
        return Ok(ConsoleState {
            version: 1,
            session: None,
        });
    }
    let bytes = fs::read(path).context("read state.json")?;
    let st: ConsoleState = serde_json::from_slice(&bytes).context("parse state.json")?;
    if st.version != 1 {
        anyhow::bail!("unsupported state version {}", st.version);
    }
    Ok(st)
}

pub(crate) fn write_state_file(path: &Path, st: &ConsoleState) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(st).context("serialize state")?;
    write_atomic(path, &bytes).context("write state.json")?;
    Ok(())
}

pub(crate) fn persist_session(path: &Path, session: Option<&Session>) -> Result<()> {
    let mut st = read_state_file(path)?;
    st.session = session.cloned();
    write_state_file(path, &st)
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
