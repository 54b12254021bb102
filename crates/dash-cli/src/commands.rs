use dash_core::{DEFAULT_MONTHS_BACK, Region, Result as CoreErrorResult};

use clap::Subcommand;

/// Longest registration series the CLI will project.
const MAX_MONTHS_BACK: u32 = 120;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Forget the stored session token
    Logout,

    /// Register a new account
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Check whether the server is reachable
    Health,

    /// Fetch the user list from the server
    Refresh,

    /// Show users (cached unless --refresh or nothing is cached)
    Users {
        #[arg(long)]
        refresh: bool,
    },

    /// Create a user
    AddUser {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Region code: NA, SA, EU, AS, AF or OC
        #[arg(long)]
        region: String,
    },

    /// Edit a user; omitted fields keep their current value
    UpdateUser {
        /// User ID
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        region: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete a user
    DeleteUser {
        /// User ID
        id: String,
    },

    /// Show counts, monthly registrations and regional distribution
    Analytics {
        /// Number of trailing months in the registration series
        #[arg(
            long,
            default_value_t = DEFAULT_MONTHS_BACK,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_MONTHS_BACK))
        )]
        months: u32,
        #[arg(long)]
        refresh: bool,
    },
}

/// Blank input means "not chosen"; anything else must be a known code.
pub fn parse_region(input: &str) -> CoreErrorResult<Region> {
    if input.trim().is_empty() {
        return Ok(Region::Unset);
    }
    input.parse()
}
