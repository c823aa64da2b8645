use crm_console::model::{Car, Customer, Transaction};

use super::account::{
    handle_change_password_command, handle_login_command, handle_logout_command,
    handle_register_command, handle_whoami_command,
};
use super::admin::{handle_company_command, handle_config_command};
use super::records::{handle_lease_command, handle_records_command};
use super::*;

pub(super) fn handle_command(console: &Console, command: Commands) -> Result<()> {
    match command {
        Commands::Login(args) => handle_login_command(console, args.username, args.password)?,
        Commands::Register(args) => handle_register_command(console, args.username, args.email)?,
        Commands::Logout => handle_logout_command(console)?,
        Commands::Whoami(args) => handle_whoami_command(console, args.json)?,
        Commands::ChangePassword => handle_change_password_command(console)?,
        Commands::Company { command } => handle_company_command(console, command)?,
        Commands::Cars { command } => handle_records_command::<Car>(console, command)?,
        Commands::Customers { command } => handle_records_command::<Customer>(console, command)?,
        Commands::Leases { command } => handle_lease_command(console, command)?,
        Commands::Transactions { command } => {
            handle_records_command::<Transaction>(console, command)?
        }
        Commands::Config { command } => handle_config_command(console, command)?,
        Commands::Tui => anyhow::bail!("`tui` is handled before dispatch"),
    }
    Ok(())
}
