use anyhow::{Context, Result};

use crm_console::remote::RemoteClient;

use crate::{
    Commands, CompanyCommands, ConfigCommands, Console, LeaseCommands, RecordCommands, confirm,
    prompt_secret,
};

mod account;
mod admin;
mod dispatch;
mod records;

pub(super) fn handle_command(console: &Console, command: Commands) -> Result<()> {
    dispatch::handle_command(console, command)
}
