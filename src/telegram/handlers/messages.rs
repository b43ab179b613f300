//! Message storage handlers: save, list, select-to-delete, clear
//!
//! Storage failures never leave these functions as errors. Each call site
//! matches on the result, logs the failure, and answers with a friendly
//! text; only a failed Telegram send propagates.

use teloxide::prelude::*;
use teloxide::types::Message;

use super::types::{ChatDialogue, HandlerDeps, HandlerError, sender_id};
use crate::telegram::menu::{main_keyboard, messages_keyboard};
use crate::telegram::state::{ChatState, MessageSnapshot, Selection, parse_selection};

/// Handle free text at the main menu: store it as a new message
pub(super) async fn handle_save_message(
    bot: &Bot,
    msg: &Message,
    deps: &HandlerDeps,
) -> Result<(), HandlerError> {
    let (Some(owner_id), Some(text)) = (sender_id(msg), msg.text()) else {
        log::debug!("Ignoring message without sender or text in chat {}", msg.chat.id);
        return Ok(());
    };

    let reply = match deps.store.save_message(owner_id, text).await {
        Ok(id) => {
            log::info!("Saved message {} for user {}", id, owner_id);
            "✅ Message saved successfully!"
        }
        Err(e) => {
            log::error!("Failed to save message for user {}: {}", owner_id, e);
            "❌ Sorry, I couldn't save your message. Please try again later."
        }
    };

    bot.send_message(msg.chat.id, reply)
        .reply_markup(main_keyboard())
        .await?;
    Ok(())
}

/// List the sender's messages and wait for a number to delete
///
/// An empty or unloadable listing keeps the session at the menu. Otherwise
/// the display order is captured as the snapshot that later resolves the
/// user's numeric choice.
pub(super) async fn show_messages(
    bot: &Bot,
    msg: &Message,
    deps: &HandlerDeps,
    dialogue: &ChatDialogue,
) -> Result<(), HandlerError> {
    let Some(owner_id) = sender_id(msg) else {
        log::debug!("Ignoring listing request without sender in chat {}", msg.chat.id);
        return Ok(());
    };

    let messages = match deps.store.messages_for_owner(owner_id).await {
        Ok(messages) => messages,
        Err(e) => {
            log::error!("Failed to load messages for user {}: {}", owner_id, e);
            dialogue.update(ChatState::Menu).await?;
            bot.send_message(
                msg.chat.id,
                "❌ Failed to load your messages. Please try again later.",
            )
            .reply_markup(main_keyboard())
            .await?;
            return Ok(());
        }
    };

    if messages.is_empty() {
        dialogue.update(ChatState::Menu).await?;
        bot.send_message(
            msg.chat.id,
            "📭 You don't have any saved messages yet.\nSend me any message to save it!",
        )
        .reply_markup(main_keyboard())
        .await?;
        return Ok(());
    }

    let mut response = String::from("📜 Your saved messages:\n\n");
    for (position, message) in messages.iter().enumerate() {
        response.push_str(&format!(
            "{}. {} (at {})\n",
            position + 1,
            message.text,
            message.created_at.format("%Y-%m-%d %H:%M"),
        ));
    }
    response.push_str("\nTo delete a message, type its number (e.g., '1' for the first message)\n");
    response.push_str("Or click '🔙 Back to Menu' to return to the main menu");

    let snapshot = MessageSnapshot::new(&messages);
    dialogue
        .update(ChatState::AwaitingIndex { snapshot })
        .await?;
    bot.send_message(msg.chat.id, response)
        .reply_markup(messages_keyboard())
        .await?;
    Ok(())
}

/// Handle the reply to a listing: a display position to delete
///
/// Whatever the outcome, the session returns to the menu; a fresh listing
/// is required before the next deletion.
pub(super) async fn handle_message_selection(
    bot: &Bot,
    msg: &Message,
    deps: &HandlerDeps,
    dialogue: &ChatDialogue,
    snapshot: &MessageSnapshot,
) -> Result<(), HandlerError> {
    let Some(owner_id) = sender_id(msg) else {
        log::debug!("Ignoring selection without sender in chat {}", msg.chat.id);
        return Ok(());
    };
    let Some(text) = msg.text() else {
        log::debug!(
            "Ignoring non-text message while a selection is pending in chat {}",
            msg.chat.id
        );
        return Ok(());
    };

    let reply = match parse_selection(text, snapshot) {
        Selection::Message(message_id) => {
            match deps.store.delete_message(owner_id, message_id).await {
                Ok(true) => {
                    log::info!("Deleted message {} for user {}", message_id, owner_id);
                    "✅ Message deleted successfully!".to_string()
                }
                Ok(false) => {
                    log::warn!(
                        "Delete of message {} for user {} removed nothing",
                        message_id,
                        owner_id
                    );
                    "❌ Failed to delete message. Please try again later.".to_string()
                }
                Err(e) => {
                    log::error!(
                        "Failed to delete message {} for user {}: {}",
                        message_id,
                        owner_id,
                        e
                    );
                    "❌ Failed to delete message. Please try again later.".to_string()
                }
            }
        }
        Selection::OutOfRange { len } => {
            format!("❌ Please enter a valid message number (1-{len}).")
        }
        Selection::NotANumber => "❌ Please enter a valid number.".to_string(),
    };

    dialogue.update(ChatState::Menu).await?;
    bot.send_message(msg.chat.id, reply)
        .reply_markup(main_keyboard())
        .await?;
    Ok(())
}

/// Delete every stored message of the sender, from any state
pub(super) async fn handle_clear_messages(
    bot: &Bot,
    msg: &Message,
    deps: &HandlerDeps,
    dialogue: &ChatDialogue,
) -> Result<(), HandlerError> {
    let Some(owner_id) = sender_id(msg) else {
        log::debug!("Ignoring clear request without sender in chat {}", msg.chat.id);
        return Ok(());
    };

    let reply = match deps.store.delete_all_messages(owner_id).await {
        Ok(count) => {
            log::info!("Cleared {} messages for user {}", count, owner_id);
            "✅ All your messages have been successfully deleted!"
        }
        Err(e) => {
            log::error!("Failed to clear messages for user {}: {}", owner_id, e);
            "❌ Failed to delete messages. Please try again later."
        }
    };

    dialogue.update(ChatState::Menu).await?;
    bot.send_message(msg.chat.id, reply)
        .reply_markup(main_keyboard())
        .await?;
    Ok(())
}

/// Leave a pending listing and return to the main menu
pub(super) async fn handle_back_to_menu(
    bot: &Bot,
    msg: &Message,
    dialogue: &ChatDialogue,
) -> Result<(), HandlerError> {
    dialogue.update(ChatState::Menu).await?;
    bot.send_message(msg.chat.id, "🏠 Returning to main menu...")
        .reply_markup(main_keyboard())
        .await?;
    Ok(())
}
