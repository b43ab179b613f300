//! Stashbot - Telegram bot for storing and managing saved messages
//!
//! This library provides all the core functionality for Stashbot,
//! including message persistence, the conversation state machine, and
//! Telegram bot integration.
//!
//! # Module Structure
//!
//! - `config`: Environment-driven configuration
//! - `errors`: Application error types
//! - `logging`: Console and file logging setup
//! - `storage`: Message persistence (PostgreSQL and in-memory)
//! - `telegram`: Telegram bot integration and handlers

pub mod config;
pub mod errors;
pub mod logging;
pub mod storage;
pub mod telegram;

// Re-export commonly used types for convenience
pub use errors::{AppError, AppResult};
pub use logging::init_logger;
pub use storage::{MemoryStore, MessageStore, PgStore, StorageError, StoredMessage};
pub use telegram::{ChatState, HandlerDeps, create_bot, schema};
