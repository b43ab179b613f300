use once_cell::sync::Lazy;
use std::env;

/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
/// Empty when neither is set; startup treats an empty token as fatal
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_else(|_| String::new())
});

/// Database name
/// Read from DB_NAME environment variable
/// Default: stashbot
pub static DB_NAME: Lazy<String> =
    Lazy::new(|| env::var("DB_NAME").unwrap_or_else(|_| "stashbot".to_string()));

/// Database user
/// Read from DB_USER environment variable
/// Default: postgres
pub static DB_USER: Lazy<String> =
    Lazy::new(|| env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()));

/// Database password
/// Read from DB_PASSWORD environment variable
/// Default: postgres
pub static DB_PASSWORD: Lazy<String> =
    Lazy::new(|| env::var("DB_PASSWORD").unwrap_or_else(|_| "postgres".to_string()));

/// Database host
/// Read from DB_HOST environment variable
/// Default: localhost
pub static DB_HOST: Lazy<String> =
    Lazy::new(|| env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()));

/// Database port
/// Read from DB_PORT environment variable
/// Values that don't parse as a port fall back to the default: 5432
pub static DB_PORT: Lazy<u16> = Lazy::new(|| {
    env::var("DB_PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(5432)
});

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: stashbot.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "stashbot.log".to_string()));

/// Database pool configuration
pub mod database {
    /// Maximum number of pooled connections
    pub const MAX_CONNECTIONS: u32 = 10;

    /// Maintenance database used for the create-if-missing bootstrap
    pub const ADMIN_DATABASE: &str = "postgres";
}
