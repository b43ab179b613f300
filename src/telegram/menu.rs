//! Reply keyboard menus
//!
//! Two fixed button sets: the main menu shown between actions and the
//! back-only keyboard shown with a message listing. The dispatcher matches
//! incoming text against these labels, so they live here as constants.

use teloxide::types::{KeyboardButton, KeyboardMarkup};

/// Button labels, shared by keyboard construction and exact-match routing
pub mod buttons {
    pub const VIEW_MESSAGES: &str = "📝 View My Messages";
    pub const CLEAR_MESSAGES: &str = "🗑️ Clear Messages";
    pub const HELP: &str = "ℹ️ Help";
    pub const ABOUT: &str = "❓ About";
    pub const BACK_TO_MENU: &str = "🔙 Back to Menu";
}

/// Main menu keyboard, two rows of two buttons
pub fn main_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![
        vec![
            KeyboardButton::new(buttons::VIEW_MESSAGES),
            KeyboardButton::new(buttons::CLEAR_MESSAGES),
        ],
        vec![
            KeyboardButton::new(buttons::HELP),
            KeyboardButton::new(buttons::ABOUT),
        ],
    ])
    .resize_keyboard()
}

/// Keyboard shown alongside a message listing
pub fn messages_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![vec![KeyboardButton::new(buttons::BACK_TO_MENU)]])
        .resize_keyboard()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_keyboard_is_two_by_two() {
        let keyboard = main_keyboard();

        assert_eq!(keyboard.keyboard.len(), 2);
        assert_eq!(keyboard.keyboard[0].len(), 2);
        assert_eq!(keyboard.keyboard[1].len(), 2);
        assert_eq!(keyboard.keyboard[0][0].text, buttons::VIEW_MESSAGES);
        assert_eq!(keyboard.keyboard[0][1].text, buttons::CLEAR_MESSAGES);
        assert_eq!(keyboard.keyboard[1][0].text, buttons::HELP);
        assert_eq!(keyboard.keyboard[1][1].text, buttons::ABOUT);
    }

    #[test]
    fn messages_keyboard_is_a_single_back_button() {
        let keyboard = messages_keyboard();

        assert_eq!(keyboard.keyboard.len(), 1);
        assert_eq!(keyboard.keyboard[0].len(), 1);
        assert_eq!(keyboard.keyboard[0][0].text, buttons::BACK_TO_MENU);
    }

    #[test]
    fn keyboards_resize_for_small_screens() {
        assert!(main_keyboard().resize_keyboard);
        assert!(messages_keyboard().resize_keyboard);
    }
}
