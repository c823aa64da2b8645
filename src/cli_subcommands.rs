use clap::{Args, Subcommand};

#[derive(Args)]
pub(crate) struct ListArgs {
    /// Page to fetch (1-based)
    #[arg(long, default_value_t = 1)]
    pub(crate) page: u32,
    /// Rows per page (defaults to config page_size)
    #[arg(long)]
    pub(crate) page_size: Option<u32>,
    /// Keep only rows containing this text (current page only)
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Subcommand)]
pub(crate) enum RecordCommands {
    /// List one page of records
    List(ListArgs),

    /// Create a record
    Add {
        /// field=value (repeatable)
        #[arg(long = "set", value_name = "FIELD=VALUE", required = true)]
        set: Vec<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Update fields of a record
    Update {
        id: i64,
        /// field=value (repeatable)
        #[arg(long = "set", value_name = "FIELD=VALUE", required = true)]
        set: Vec<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a record
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Delete several records, one request each
    BulkDelete {
        #[arg(required = true)]
        ids: Vec<i64>,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum LeaseCommands {
    #[command(flatten)]
    Records(RecordCommands),

    /// Mark a lease as returned
    Return { id: i64 },
}

#[derive(Subcommand)]
pub(crate) enum CompanyCommands {
    /// Create a company owned by the logged-in user
    Create {
        name: String,
        #[arg(long)]
        address: Option<String>,
    },

    /// List your companies
    List {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Show the effective configuration
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Change stored settings
    Set {
        /// New backend URL
        #[arg(long, value_name = "URL")]
        url: Option<String>,
        #[arg(long)]
        page_size: Option<u32>,
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}
