use std::io::{BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use crm_console::model::ConsoleConfig;
use crm_console::remote::{Endpoints, RemoteClient};
use crm_console::session::SessionStore;
use crm_console::store::LocalStore;

use crate::Commands;

const LOG_ENV: &str = "CRM_CONSOLE_LOG";

#[derive(Parser)]
#[command(name = "crm-console")]
#[command(about = "Dealership CRM admin console", long_about = None)]
pub(crate) struct Cli {
    /// Directory holding config.json and state.json
    #[arg(long, global = true, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Backend URL for this run (overrides config.json)
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Log file for the terminal console (defaults to <config dir>/console.log)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Everything a command needs: where files live, the effective config, and
/// the operator's session.
pub(crate) struct Console {
    pub(crate) store: LocalStore,
    pub(crate) config: ConsoleConfig,
    pub(crate) session: Arc<SessionStore>,
}

impl Console {
    fn open(root: &Path, base_url: Option<String>) -> Result<Self> {
        let store = LocalStore::open(root)?;
        let mut config = store.read_config()?;
        if let Some(url) = base_url {
            config.base_url = url;
        }
        let session = Arc::new(SessionStore::load(&store.state_path())?);
        Ok(Self {
            store,
            config,
            session,
        })
    }

    pub(crate) fn client(&self) -> Result<RemoteClient> {
        RemoteClient::with_timeout(
            Endpoints::from_config(&self.config),
            self.session.clone(),
            Duration::from_secs(self.config.timeout_secs),
        )
    }

    /// Fails early, with a hint, when no one is logged in.
    pub(crate) fn require_login(&self) -> Result<String> {
        self.session
            .username()
            .context("not logged in (run `crm-console login --username ...`)")
    }
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    let root = LocalStore::resolve_dir(cli.config_dir.as_deref())?;
    let console = Console::open(&root, cli.base_url)?;
    let implicit_tui = cli.command.is_none();

    match cli.command {
        None | Some(Commands::Tui) => {
            if implicit_tui && !std::io::stdout().is_terminal() {
                anyhow::bail!("no command given (see `crm-console --help`)");
            }
            let log_file = cli.log_file.unwrap_or_else(|| console.store.log_path());
            init_logging(Some(&log_file))?;
            crm_console::tui::run_with_options(crm_console::tui::TuiRunOptions {
                config: console.config.clone(),
                session: console.session.clone(),
                log_file: Some(log_file),
            })?;
        }
        Some(command) => {
            if cli.log_file.is_some() {
                anyhow::bail!("`--log-file` is only supported when running the terminal console");
            }
            init_logging(None)?;
            crate::cli_exec::handle_command(&console, command)?
        }
    }

    Ok(())
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV, "warn"));
    if let Some(path) = log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.try_init().context("initialize logging")?;
    Ok(())
}

/// Reads one line from stdin after printing `label`.
pub(crate) fn prompt_secret(label: &str) -> Result<String> {
    eprint!("{}: ", label);
    std::io::stderr().flush().context("flush prompt")?;
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Yes/no on stdin; anything but `y`/`yes` declines.
pub(crate) fn confirm(prompt: &str) -> Result<bool> {
    let answer = prompt_secret(&format!("{} [y/N]", prompt))?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
