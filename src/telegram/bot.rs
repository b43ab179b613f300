//! Bot initialization
//!
//! Command enum definition, bot instance creation, and command menu
//! registration.

use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::config;
use crate::errors::{AppError, AppResult};

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "I can:")]
pub enum Command {
    #[command(description = "start the bot and show the menu")]
    Start,
    #[command(description = "show help")]
    Help,
    #[command(description = "view your saved messages")]
    MyMessages,
    #[command(description = "delete all your saved messages")]
    Clear,
}

/// Creates a Bot instance from the configured token
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(AppError::Config)` - No token in the environment
pub fn create_bot() -> AppResult<Bot> {
    let token = config::BOT_TOKEN.clone();
    if token.is_empty() {
        return Err(AppError::Config(
            "BOT_TOKEN environment variable is not set".to_string(),
        ));
    }
    Ok(Bot::new(token))
}

/// Registers the command menu in the Telegram UI
///
/// # Arguments
/// * `bot` - Bot instance to configure
///
/// # Returns
/// * `Ok(())` - Commands set successfully
/// * `Err(RequestError)` - Failed to set commands
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    use teloxide::types::BotCommand;

    bot.set_my_commands(vec![
        BotCommand::new("start", "start the bot and show the menu"),
        BotCommand::new("help", "show help"),
        BotCommand::new("mymessages", "view your saved messages"),
        BotCommand::new("clear", "delete all your saved messages"),
    ])
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_menu_lists_every_command() {
        let commands = Command::descriptions();
        let command_list = format!("{}", commands);

        assert!(command_list.contains("I can:"));
        assert!(command_list.contains("start"));
        assert!(command_list.contains("help"));
        assert!(command_list.contains("mymessages"));
        assert!(command_list.contains("clear"));
    }
}
