//! dash-cli library
//!
//! Command definitions and the dispatcher behind the `dash` binary, exported
//! so integration tests can drive commands without spawning a process.

pub(crate) mod app;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub mod logger;


pub use app::App;
pub use cli::Cli;
pub use commands::{Commands, parse_region};
pub use error::{CliError, Result as CliResult};
