//! Abstract input key event, independent of terminal library.
//!
//! The terminal front-end converts crossterm key events into `InputKey` at
//! its boundary, so kiosk-app never depends on crossterm and the headless
//! host bridge can drive the same engine.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
}

impl InputKey {
    /// Digit value for `'0'..='9'`
    pub fn digit(&self) -> Option<u8> {
        match self {
            InputKey::Char(c) => c.to_digit(10).map(|d| d as u8),
            _ => None,
        }
    }
}
