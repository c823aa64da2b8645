mod cli_commands;
mod cli_exec;
mod cli_runtime;
mod cli_subcommands;

pub(crate) use cli_commands::Commands;
pub(crate) use cli_runtime::{Console, confirm, prompt_secret};
pub(crate) use cli_subcommands::{CompanyCommands, ConfigCommands, LeaseCommands, RecordCommands};

fn main() {
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
