//! Configuration constants.
//!
//! Defaults used by [`Config`](super::Config) and the CLI.

/// SQLite file the store opens when no path is configured.
pub const DEFAULT_DB_PATH: &str = "contacts.db";

/// Endpoint returning one randomly generated user per request.
pub const DEFAULT_API_URL: &str = "https://randomuser.me/api/?results=1";

/// Transport-level timeout for the random contact request, in seconds.
///
/// There is no retry; a request that exceeds this is reported as a network error.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent header for outbound requests.
pub const DEFAULT_USER_AGENT: &str = concat!("contact_manager/", env!("CARGO_PKG_VERSION"));

/// Capacity of the broadcast channels used for store and fetch notifications.
///
/// Slow subscribers that fall further behind than this observe a `Lagged` error
/// on their receiver; publishers are never blocked.
pub const EVENT_CHANNEL_CAPACITY: usize = 64;
