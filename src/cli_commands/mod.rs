use clap::Subcommand;

use crate::{CompanyCommands, ConfigCommands, LeaseCommands, RecordCommands};

pub(crate) mod account;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Log in and remember the session
    Login(account::LoginArgs),

    /// Create an account and log in
    Register(account::RegisterArgs),

    /// Forget the stored session
    Logout,

    /// Show the logged-in user's profile
    Whoami(account::WhoamiArgs),

    /// Change the logged-in user's password
    ChangePassword,

    /// Manage companies
    Company {
        #[command(subcommand)]
        command: CompanyCommands,
    },

    /// Cars in the inventory
    Cars {
        #[command(subcommand)]
        command: RecordCommands,
    },

    /// Customers
    Customers {
        #[command(subcommand)]
        command: RecordCommands,
    },

    /// Leases
    Leases {
        #[command(subcommand)]
        command: LeaseCommands,
    },

    /// Sales transactions
    Transactions {
        #[command(subcommand)]
        command: RecordCommands,
    },

    /// Show or change config.json
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Open the terminal console
    Tui,
}
