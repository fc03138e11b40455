#![forbid(unsafe_code)]

//! Canonical key identity for shortcut bindings.
//!
//! [`Key`] and [`Modifiers`] are this crate's own types rather than
//! re-exports of any terminal backend's event structs; the host maps its
//! backend events into them once, at the edge.

use bitflags::bitflags;

bitflags! {
    /// Modifier keys held alongside a [`Key`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const ALT = 1 << 0;
        const CONTROL = 1 << 1;
        const SHIFT = 1 << 2;
        const SUPER = 1 << 3;
    }
}

/// A key that can anchor a shortcut binding.
///
/// The numeric-pad variants form their own subset because modifier-less
/// shortcuts are only legal on the numeric pad (see
/// [`Menu::bind_shortcut`](crate::Menu::bind_shortcut)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character. Stored as typed; labels render uppercase.
    Char(char),
    /// Function key (`F(5)` is F5).
    F(u8),
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Insert,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
    /// Numeric-pad digit 0–9.
    Numpad(u8),
    NumpadEnter,
    NumpadAdd,
    NumpadSubtract,
    NumpadMultiply,
    NumpadDivide,
    NumpadDecimal,
}

impl Key {
    /// Whether this key belongs to the numeric-pad set.
    #[must_use]
    pub const fn is_numpad(self) -> bool {
        matches!(
            self,
            Self::Numpad(_)
                | Self::NumpadEnter
                | Self::NumpadAdd
                | Self::NumpadSubtract
                | Self::NumpadMultiply
                | Self::NumpadDivide
                | Self::NumpadDecimal
        )
    }

    /// Human-readable name used in gesture labels ("C", "F5", "Num 7").
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Char(' ') => "Space".to_string(),
            Self::Char(c) => c.to_uppercase().to_string(),
            Self::F(n) => format!("F{n}"),
            Self::Enter => "Enter".to_string(),
            Self::Escape => "Esc".to_string(),
            Self::Tab => "Tab".to_string(),
            Self::Backspace => "Backspace".to_string(),
            Self::Delete => "Del".to_string(),
            Self::Insert => "Ins".to_string(),
            Self::Home => "Home".to_string(),
            Self::End => "End".to_string(),
            Self::PageUp => "PgUp".to_string(),
            Self::PageDown => "PgDn".to_string(),
            Self::Up => "Up".to_string(),
            Self::Down => "Down".to_string(),
            Self::Left => "Left".to_string(),
            Self::Right => "Right".to_string(),
            Self::Numpad(n) => format!("Num {n}"),
            Self::NumpadEnter => "Num Enter".to_string(),
            Self::NumpadAdd => "Num +".to_string(),
            Self::NumpadSubtract => "Num -".to_string(),
            Self::NumpadMultiply => "Num *".to_string(),
            Self::NumpadDivide => "Num /".to_string(),
            Self::NumpadDecimal => "Num .".to_string(),
        }
    }
}
