//! Telegram bot integration and handlers

pub mod bot;
pub mod handlers;
pub mod menu;
pub mod state;

// Re-exports for convenience
pub use bot::{Command, create_bot, setup_bot_commands};
pub use handlers::{ChatDialogue, HandlerDeps, HandlerError, schema};
pub use state::ChatState;
