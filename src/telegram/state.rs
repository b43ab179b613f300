//! Conversation state
//!
//! Each chat is either at the main menu or waiting for the user to pick a
//! listed message by its display position. `AwaitingIndex` carries the
//! snapshot taken at listing time, so selection happens against the numbers
//! the user actually saw even if storage has changed since.

use crate::storage::StoredMessage;

/// Per-chat dialogue state
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ChatState {
    /// At the main menu; free text is saved as a new message
    #[default]
    Menu,
    /// A numbered listing was just shown; the next text picks an entry
    AwaitingIndex { snapshot: MessageSnapshot },
}

/// Display positions captured at listing time, 1-based
///
/// Position `n` maps to the id shown as entry `n`. The snapshot is never
/// refreshed; ownership is re-checked by the store when deleting.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageSnapshot {
    ids: Vec<i64>,
}

impl MessageSnapshot {
    /// Capture the display order of a freshly listed set of messages.
    pub fn new(messages: &[StoredMessage]) -> Self {
        Self {
            ids: messages.iter().map(|message| message.id).collect(),
        }
    }

    /// Number of listed entries.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Resolve a 1-based display position to its stored id.
    pub fn resolve(&self, position: usize) -> Option<i64> {
        position
            .checked_sub(1)
            .and_then(|index| self.ids.get(index).copied())
    }
}

/// Outcome of interpreting a reply while a listing is pending
#[derive(Debug, PartialEq)]
pub enum Selection {
    /// In-range position, resolved to a stored id
    Message(i64),
    /// Parsed as a number but outside `1..=len`
    OutOfRange { len: usize },
    /// Not a number at all
    NotANumber,
}

/// Interpret `text` as a selection against `snapshot`.
pub fn parse_selection(text: &str, snapshot: &MessageSnapshot) -> Selection {
    let Ok(position) = text.trim().parse::<i64>() else {
        return Selection::NotANumber;
    };
    let resolved = usize::try_from(position)
        .ok()
        .and_then(|position| snapshot.resolve(position));
    match resolved {
        Some(id) => Selection::Message(id),
        None => Selection::OutOfRange {
            len: snapshot.len(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;

    fn snapshot_of(ids: &[i64]) -> MessageSnapshot {
        let messages: Vec<StoredMessage> = ids
            .iter()
            .map(|&id| StoredMessage {
                id,
                text: format!("message {id}"),
                created_at: Utc::now(),
            })
            .collect();
        MessageSnapshot::new(&messages)
    }

    #[test]
    fn positions_are_one_based() {
        let snapshot = snapshot_of(&[30, 20, 10]);

        assert_eq!(snapshot.resolve(1), Some(30));
        assert_eq!(snapshot.resolve(3), Some(10));
        assert_eq!(snapshot.resolve(0), None);
        assert_eq!(snapshot.resolve(4), None);
    }

    #[test]
    fn selects_by_displayed_number() {
        let snapshot = snapshot_of(&[30, 20, 10]);

        assert_eq!(parse_selection("2", &snapshot), Selection::Message(20));
        assert_eq!(parse_selection("  1 ", &snapshot), Selection::Message(30));
    }

    #[test]
    fn numbers_outside_the_listing_are_out_of_range() {
        let snapshot = snapshot_of(&[30, 20, 10]);

        assert_eq!(
            parse_selection("5", &snapshot),
            Selection::OutOfRange { len: 3 }
        );
        assert_eq!(
            parse_selection("0", &snapshot),
            Selection::OutOfRange { len: 3 }
        );
        assert_eq!(
            parse_selection("-1", &snapshot),
            Selection::OutOfRange { len: 3 }
        );
    }

    #[test]
    fn non_numeric_input_is_rejected() {
        let snapshot = snapshot_of(&[30]);

        assert_eq!(parse_selection("abc", &snapshot), Selection::NotANumber);
        assert_eq!(parse_selection("1.5", &snapshot), Selection::NotANumber);
        assert_eq!(parse_selection("", &snapshot), Selection::NotANumber);
    }

    #[test]
    fn empty_snapshot_has_no_valid_positions() {
        let snapshot = snapshot_of(&[]);

        assert!(snapshot.is_empty());
        assert_eq!(
            parse_selection("1", &snapshot),
            Selection::OutOfRange { len: 0 }
        );
    }
}
