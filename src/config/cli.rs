//! Command-line options.
//!
//! Generated by `clap` from the field attributes. Global options mirror
//! [`Config`]; each subcommand maps onto exactly one store or fetch operation.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::constants::{
    DEFAULT_API_URL, DEFAULT_DB_PATH, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use crate::config::types::{Config, LogFormat, LogLevel};
use crate::models::Contact;

/// # Examples
///
/// ```bash
/// contact_manager add --first Ann --last Lee --city Paris
/// contact_manager search lyon
/// contact_manager --db-path ./work.db fetch --save
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "contact_manager",
    about = "Manages contacts stored in a local SQLite database."
)]
pub struct Cli {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Database path (SQLite file, created if missing)
    #[arg(long, global = true, env = "CONTACTS_DB_PATH", default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    /// Endpoint queried by `fetch`
    #[arg(long, global = true, env = "CONTACTS_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Timeout for the `fetch` request in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Print results as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// One core operation per invocation.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a contact and print its new id
    Add(ContactArgs),
    /// Show one contact
    Get {
        /// Contact id
        id: i64,
    },
    /// Replace every field of an existing contact
    Update {
        /// Contact id
        id: i64,
        #[command(flatten)]
        contact: ContactArgs,
    },
    /// Delete a contact
    Delete {
        /// Contact id
        id: i64,
    },
    /// List all contacts ordered by name
    List,
    /// List contacts where any text field contains TERM (case-insensitive)
    Search {
        /// Substring to look for; empty lists everything
        #[arg(default_value = "")]
        term: String,
    },
    /// Fetch one random contact from the web API
    Fetch {
        /// Store the fetched contact instead of only printing it
        #[arg(long)]
        save: bool,
    },
}

/// Contact fields accepted by `add` and `update`.
#[derive(Debug, Clone, Args)]
pub struct ContactArgs {
    /// First name (required)
    #[arg(long = "first")]
    pub first_name: String,

    /// Last name (required)
    #[arg(long = "last")]
    pub last_name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub city: String,

    #[arg(long, default_value = "")]
    pub country: String,
}

impl ContactArgs {
    /// Builds a not-yet-persisted contact, or one keyed by `id` for updates.
    pub fn into_contact(self, id: Option<i64>) -> Contact {
        Contact {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            city: self.city,
            country: self.country,
        }
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Config {
            db_path: cli.db_path.clone(),
            api_url: cli.api_url.clone(),
            timeout_seconds: cli.timeout_seconds,
            user_agent: cli.user_agent.clone(),
            log_level: cli.log_level.clone(),
            log_format: cli.log_format.clone(),
        }
    }
}
