//! Dispatcher schema and handler chain builders

use teloxide::dispatching::dialogue::{self, InMemStorage};
use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::commands::{handle_about_command, handle_help_command, handle_start_command};
use super::messages::{
    handle_back_to_menu, handle_clear_messages, handle_message_selection, handle_save_message,
    show_messages,
};
use super::types::{ChatDialogue, HandlerDeps, HandlerError};
use crate::telegram::bot::Command;
use crate::telegram::menu::buttons;
use crate::telegram::state::{ChatState, MessageSnapshot};

/// Creates the main dispatcher schema for the Telegram bot.
///
/// This function returns a handler tree that can be used with teloxide's
/// Dispatcher. The same schema is used in production and in the dispatch
/// tests.
///
/// Branch order is the routing contract: commands win over everything,
/// menu buttons win over the conversation phase, and only then does the
/// phase decide what plain text means.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_commands = deps.clone();
    let deps_view = deps.clone();
    let deps_clear = deps.clone();
    let deps_selection = deps.clone();
    let deps_save = deps;

    dialogue::enter::<Update, InMemStorage<ChatState>, ChatState, _>()
        // Commands always reach their handler, whatever the chat was doing
        .branch(command_handler(deps_commands))
        // Menu buttons, matched on their exact labels
        .branch(view_button_handler(deps_view))
        .branch(clear_button_handler(deps_clear))
        .branch(back_button_handler())
        .branch(help_button_handler())
        .branch(about_button_handler())
        // A pending listing turns plain text into a deletion choice
        .branch(selection_handler(deps_selection))
        // Anything else at the menu is stored
        .branch(save_handler(deps_save))
}

/// Handler for bot commands (/start, /help, /mymessages, /clear)
fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |bot: Bot, msg: Message, dialogue: ChatDialogue, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("🎯 Received command: {:?} from chat {}", cmd, msg.chat.id);

                match cmd {
                    Command::Start => {
                        handle_start_command(&bot, &msg, &dialogue).await?;
                    }
                    Command::Help => {
                        handle_help_command(&bot, &msg, &dialogue).await?;
                    }
                    Command::MyMessages => {
                        show_messages(&bot, &msg, &deps, &dialogue).await?;
                    }
                    Command::Clear => {
                        handle_clear_messages(&bot, &msg, &deps, &dialogue).await?;
                    }
                }
                Ok(())
            }
        },
    ))
}

/// Handler for the "view my messages" menu button
fn view_button_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| {
            msg.text()
                .map(|text| text == buttons::VIEW_MESSAGES)
                .unwrap_or(false)
        })
        .endpoint(move |bot: Bot, msg: Message, dialogue: ChatDialogue| {
            let deps = deps.clone();
            async move {
                log::info!("🎯 View messages button pressed in chat {}", msg.chat.id);
                show_messages(&bot, &msg, &deps, &dialogue).await?;
                Ok(())
            }
        })
}

/// Handler for the "clear messages" menu button
fn clear_button_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| {
            msg.text()
                .map(|text| text == buttons::CLEAR_MESSAGES)
                .unwrap_or(false)
        })
        .endpoint(move |bot: Bot, msg: Message, dialogue: ChatDialogue| {
            let deps = deps.clone();
            async move {
                log::info!("🎯 Clear messages button pressed in chat {}", msg.chat.id);
                handle_clear_messages(&bot, &msg, &deps, &dialogue).await?;
                Ok(())
            }
        })
}

/// Handler for the "back to menu" button shown under a listing
fn back_button_handler() -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| {
            msg.text()
                .map(|text| text == buttons::BACK_TO_MENU)
                .unwrap_or(false)
        })
        .endpoint(
            move |bot: Bot, msg: Message, dialogue: ChatDialogue| async move {
                handle_back_to_menu(&bot, &msg, &dialogue).await?;
                Ok(())
            },
        )
}

/// Handler for the help menu button
fn help_button_handler() -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.text().map(|text| text == buttons::HELP).unwrap_or(false))
        .endpoint(
            move |bot: Bot, msg: Message, dialogue: ChatDialogue| async move {
                handle_help_command(&bot, &msg, &dialogue).await?;
                Ok(())
            },
        )
}

/// Handler for the about menu button
fn about_button_handler() -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.text().map(|text| text == buttons::ABOUT).unwrap_or(false))
        .endpoint(
            move |bot: Bot, msg: Message, dialogue: ChatDialogue| async move {
                handle_about_command(&bot, &msg, &dialogue).await?;
                Ok(())
            },
        )
}

/// Handler for replies while a listing is waiting for a number
fn selection_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::case![ChatState::AwaitingIndex { snapshot }].endpoint(
        move |bot: Bot, msg: Message, dialogue: ChatDialogue, snapshot: MessageSnapshot| {
            let deps = deps.clone();
            async move {
                handle_message_selection(&bot, &msg, &deps, &dialogue, &snapshot).await?;
                Ok(())
            }
        },
    ))
}

/// Handler for free text at the main menu
fn save_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::case![ChatState::Menu].endpoint(
        move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                handle_save_message(&bot, &msg, &deps).await?;
                Ok(())
            }
        },
    ))
}
