//! Reply keyboards rendered for the engine's [`KeyboardHint`]s.

use teloxide::types::{KeyboardButton, KeyboardMarkup};

/// The persistent three-row command keyboard shown with menu-like responses.
pub fn main_menu_markup() -> KeyboardMarkup {
    let rows = vec![
        vec![
            KeyboardButton::new("/red"),
            KeyboardButton::new("/white"),
            KeyboardButton::new("/rose"),
            KeyboardButton::new("/dessert"),
        ],
        vec![
            KeyboardButton::new("/wines"),
            KeyboardButton::new("/dishes"),
            KeyboardButton::new("/pair"),
        ],
        vec![
            KeyboardButton::new("/rate"),
            KeyboardButton::new("/favorites"),
            KeyboardButton::new("/help"),
        ],
    ];
    KeyboardMarkup::new(rows).resize_keyboard()
}

/// One-time yes/no keyboard shown with the rating confirmation prompt.
pub fn yes_no_markup() -> KeyboardMarkup {
    let rows = vec![vec![KeyboardButton::new("yes"), KeyboardButton::new("no")]];
    KeyboardMarkup::new(rows)
        .resize_keyboard()
        .one_time_keyboard()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_menu_rows() {
        let markup = main_menu_markup();
        assert_eq!(markup.keyboard.len(), 3);
        assert_eq!(markup.keyboard[0].len(), 4);
        assert!(markup.resize_keyboard);
        assert!(!markup.one_time_keyboard);
    }

    #[test]
    fn test_yes_no_is_one_time() {
        let markup = yes_no_markup();
        assert_eq!(markup.keyboard.len(), 1);
        assert_eq!(markup.keyboard[0].len(), 2);
        assert!(markup.one_time_keyboard);
    }
}
