//! Handler types and dependencies

use std::sync::Arc;

use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};
use teloxide::types::Message;

use crate::storage::MessageStore;
use crate::telegram::state::ChatState;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Per-chat dialogue handle, backed by the in-memory session store
pub type ChatDialogue = Dialogue<ChatState, InMemStorage<ChatState>>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub store: Arc<dyn MessageStore>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }
}

/// Owner identity of the message sender
///
/// Messages without a sender (channel posts, service messages) have no
/// owner and take no part in the state machine.
pub fn sender_id(msg: &Message) -> Option<i64> {
    msg.from
        .as_ref()
        .and_then(|user| i64::try_from(user.id.0).ok())
}
