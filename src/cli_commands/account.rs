use clap::Args;

#[derive(Args)]
pub(crate) struct LoginArgs {
    #[arg(long)]
    pub(crate) username: String,
    /// Prompted on stdin when omitted
    #[arg(long)]
    pub(crate) password: Option<String>,
}

#[derive(Args)]
pub(crate) struct RegisterArgs {
    #[arg(long)]
    pub(crate) username: String,
    #[arg(long)]
    pub(crate) email: String,
}

#[derive(Args)]
pub(crate) struct WhoamiArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
