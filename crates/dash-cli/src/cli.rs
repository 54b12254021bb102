use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "dash")]
#[command(about = "Admin dashboard client: manage users and view analytics")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (overrides api.base_url and DASH_API_BASE_URL)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
