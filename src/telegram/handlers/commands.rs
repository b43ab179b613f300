//! Informational handlers (/start, /help and the Help/About buttons)

use teloxide::prelude::*;
use teloxide::types::Message;

use super::types::{ChatDialogue, HandlerError};
use crate::telegram::menu::main_keyboard;
use crate::telegram::state::ChatState;

const WELCOME_TEXT: &str = "👋 Welcome to Stashbot!\n\n\
    I can help you store and manage your messages. \
    Use the buttons below to interact with me.";

const HELP_TEXT: &str = "📚 Available Commands:\n\n\
    /start - Start the bot\n\
    /help - Show this help message\n\
    /mymessages - View your saved messages\n\
    /clear - Delete all your messages\n\n\
    To delete a specific message:\n\
    1. View your messages\n\
    2. Type the number of the message you want to delete\n\
    3. Confirm the deletion";

/// Handle /start: greet and show the main menu
pub(super) async fn handle_start_command(
    bot: &Bot,
    msg: &Message,
    dialogue: &ChatDialogue,
) -> Result<(), HandlerError> {
    dialogue.update(ChatState::Menu).await?;
    bot.send_message(msg.chat.id, WELCOME_TEXT)
        .reply_markup(main_keyboard())
        .await?;
    Ok(())
}

/// Handle /help and the Help button
pub(super) async fn handle_help_command(
    bot: &Bot,
    msg: &Message,
    dialogue: &ChatDialogue,
) -> Result<(), HandlerError> {
    dialogue.update(ChatState::Menu).await?;
    bot.send_message(msg.chat.id, HELP_TEXT)
        .reply_markup(main_keyboard())
        .await?;
    Ok(())
}

/// Handle the About button
pub(super) async fn handle_about_command(
    bot: &Bot,
    msg: &Message,
    dialogue: &ChatDialogue,
) -> Result<(), HandlerError> {
    let about_text = format!(
        "🤖 About Stashbot\n\n\
         Version: {}\n\
         This bot helps you store and manage your messages in a secure database.\n\n\
         Features:\n\
         • Save unlimited messages\n\
         • View message history\n\
         • Delete specific messages\n\
         • Delete all messages\n\
         • Easy-to-use interface",
        env!("CARGO_PKG_VERSION"),
    );

    dialogue.update(ChatState::Menu).await?;
    bot.send_message(msg.chat.id, about_text)
        .reply_markup(main_keyboard())
        .await?;
    Ok(())
}
