//! Stashbot entry point: wires configuration, storage and the dispatcher.

use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;

use stashbot::config;
use stashbot::logging::init_logger;
use stashbot::storage::{PgStore, connect_options, ensure_database_exists};
use stashbot::telegram::{ChatState, HandlerDeps, create_bot, schema, setup_bot_commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env before any configuration is read
    let _ = dotenv();

    // Initialize logger (console + file)
    init_logger(&config::LOG_FILE_PATH)?;

    // Set up global panic handler to catch panics in dispatcher
    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("Panic caught: {:?}", panic_info);
        if let Some(location) = panic_info.location() {
            log::error!(
                "Panic at {}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            );
        }
    }));

    run_bot().await
}

async fn run_bot() -> Result<()> {
    log::info!("Starting bot...");

    let bot = create_bot()?;

    // Create the database on first run; an existing database is left untouched
    ensure_database_exists().await;

    let store = PgStore::connect(connect_options())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to database: {}", e))?;
    store.init_schema().await?;

    // Register the command menu with Telegram
    setup_bot_commands(&bot).await?;

    let deps = HandlerDeps::new(Arc::new(store));
    let handler = schema(deps);

    log::info!("================================================");
    log::info!("🎉 Bot initialization complete");
    log::info!("📡 Ready to receive updates!");
    log::info!("================================================");

    // Create polling listener that drops pending updates on start
    let listener = Polling::builder(bot.clone()).drop_pending_updates().build();

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![InMemStorage::<ChatState>::new()])
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    Ok(())
}
