//! Terminal console entry point.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use crate::model::ConsoleConfig;
use crate::session::SessionStore;

#[derive(Clone, Debug)]
pub struct TuiRunOptions {
    pub config: ConsoleConfig,
    pub session: Arc<SessionStore>,
    /// Where `log` output goes while the console owns the screen.
    pub log_file: Option<PathBuf>,
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run_with_options(opts)
}
