#![forbid(unsafe_code)]

//! Keyboard-shortcut binding onto menu models.
//!
//! A [`Menu`] holds presentation items and the shortcut bindings attached
//! to them. Binding a shortcut does two things: it stamps the item with a
//! human-readable gesture label ("Ctrl + Shift + C"), and it registers a
//! [`Command`] the host fires by forwarding key events to
//! [`Menu::dispatch`].
//!
//! Modifier-less shortcuts are rejected unless the key belongs to the
//! numeric-pad set — a bare letter would shadow ordinary text input, while
//! the numeric pad is a deliberate press.

use crate::command::Command;
use crate::keys::{Key, Modifiers};

/// Errors from shortcut binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortcutError {
    /// The binding has no modifier and its key is not on the numeric pad.
    ModifierRequired {
        /// Label of the offending key.
        key: String,
    },
}

impl std::fmt::Display for ShortcutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ModifierRequired { key } => {
                write!(
                    f,
                    "shortcut key '{key}' needs a modifier unless it is a numeric-pad key"
                )
            }
        }
    }
}

impl std::error::Error for ShortcutError {}

/// Render the gesture label for a key/modifier combination.
///
/// Segment order is Alt, Ctrl, Shift, Win, then the key's own label:
/// `gesture_label(Key::Char('c'), CONTROL | SHIFT)` is `"Ctrl + Shift + C"`.
#[must_use]
pub fn gesture_label(key: Key, modifiers: Modifiers) -> String {
    let mut label = String::new();
    if modifiers.contains(Modifiers::ALT) {
        label.push_str("Alt + ");
    }
    if modifiers.contains(Modifiers::CONTROL) {
        label.push_str("Ctrl + ");
    }
    if modifiers.contains(Modifiers::SHIFT) {
        label.push_str("Shift + ");
    }
    if modifiers.contains(Modifiers::SUPER) {
        label.push_str("Win + ");
    }
    label.push_str(&key.label());
    label
}

/// A single entry in a menu, carrying its display label and the gesture
/// text of any shortcut bound to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    label: String,
    gesture_text: Option<String>,
}

impl MenuItem {
    /// Create an item with no shortcut.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            gesture_text: None,
        }
    }

    /// The item's display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The gesture text set by the last shortcut bound to this item.
    #[must_use]
    pub fn gesture_text(&self) -> Option<&str> {
        self.gesture_text.as_deref()
    }
}

struct ShortcutBinding {
    key: Key,
    modifiers: Modifiers,
    command: Command<()>,
}

/// A menu model: items plus the shortcut bindings attached to them.
pub struct Menu {
    items: Vec<MenuItem>,
    bindings: Vec<ShortcutBinding>,
}

impl Menu {
    /// Create an empty menu.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            bindings: Vec::new(),
        }
    }

    /// Append an item; returns its index for later binding.
    pub fn add_item(&mut self, label: impl Into<String>) -> usize {
        self.items.push(MenuItem::new(label));
        self.items.len() - 1
    }

    /// The menu's items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// The item at `index`, if any.
    #[must_use]
    pub fn item(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index)
    }

    /// Number of registered shortcut bindings.
    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Bind `action` to `key` + `modifiers` and stamp the item at `item`
    /// with the gesture label. An out-of-range `item` still registers the
    /// binding; there is just no item to stamp.
    ///
    /// # Errors
    ///
    /// [`ShortcutError::ModifierRequired`] when `modifiers` is empty and
    /// `key` is not a numeric-pad key. Nothing is registered on error.
    pub fn bind_shortcut(
        &mut self,
        item: usize,
        key: Key,
        modifiers: Modifiers,
        action: impl Fn() + 'static,
    ) -> Result<(), ShortcutError> {
        self.bind_command(item, key, modifiers, Command::new(move |_: &()| action()))
    }

    /// As [`bind_shortcut`](Self::bind_shortcut), but with a caller-built
    /// [`Command`] (e.g. one carrying an enablement predicate).
    ///
    /// # Errors
    ///
    /// [`ShortcutError::ModifierRequired`] under the same rule.
    pub fn bind_command(
        &mut self,
        item: usize,
        key: Key,
        modifiers: Modifiers,
        command: Command<()>,
    ) -> Result<(), ShortcutError> {
        if modifiers.is_empty() && !key.is_numpad() {
            return Err(ShortcutError::ModifierRequired { key: key.label() });
        }

        if let Some(entry) = self.items.get_mut(item) {
            entry.gesture_text = Some(gesture_label(key, modifiers));
        }
        self.bindings.push(ShortcutBinding {
            key,
            modifiers,
            command,
        });
        Ok(())
    }

    /// Forward a key event. Fires the first matching binding whose command
    /// can execute; returns whether anything ran.
    pub fn dispatch(&self, key: Key, modifiers: Modifiers) -> bool {
        for binding in &self.bindings {
            if binding.key == key
                && binding.modifiers == modifiers
                && binding.command.can_execute(&())
            {
                binding.command.execute(&());
                return true;
            }
        }
        false
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Menu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Menu")
            .field("items", &self.items)
            .field("binding_count", &self.bindings.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn gesture_label_orders_modifiers() {
        assert_eq!(
            gesture_label(Key::Char('c'), Modifiers::CONTROL | Modifiers::SHIFT),
            "Ctrl + Shift + C"
        );
        assert_eq!(
            gesture_label(Key::Char('x'), Modifiers::ALT | Modifiers::CONTROL),
            "Alt + Ctrl + X"
        );
        assert_eq!(
            gesture_label(Key::F(5), Modifiers::SUPER),
            "Win + F5"
        );
        assert_eq!(gesture_label(Key::Numpad(7), Modifiers::empty()), "Num 7");
    }

    #[test]
    fn binding_stamps_gesture_text() {
        let mut menu = Menu::new();
        let item = menu.add_item("Copy");

        menu.bind_shortcut(item, Key::Char('c'), Modifiers::CONTROL | Modifiers::SHIFT, || {})
            .unwrap();

        assert_eq!(
            menu.item(item).unwrap().gesture_text(),
            Some("Ctrl + Shift + C")
        );
    }

    #[test]
    fn modifierless_non_numpad_is_rejected() {
        let mut menu = Menu::new();
        let item = menu.add_item("Paste");

        let result = menu.bind_shortcut(item, Key::Char('v'), Modifiers::empty(), || {});

        assert_eq!(
            result,
            Err(ShortcutError::ModifierRequired {
                key: "V".to_string()
            })
        );
        assert_eq!(menu.binding_count(), 0);
        assert_eq!(menu.item(item).unwrap().gesture_text(), None);
    }

    #[test]
    fn modifierless_numpad_is_allowed() {
        let mut menu = Menu::new();
        let item = menu.add_item("Quick slot");

        menu.bind_shortcut(item, Key::Numpad(3), Modifiers::empty(), || {})
            .unwrap();

        assert_eq!(menu.item(item).unwrap().gesture_text(), Some("Num 3"));
        assert_eq!(menu.binding_count(), 1);
    }

    #[test]
    fn dispatch_fires_matching_binding() {
        let mut menu = Menu::new();
        let item = menu.add_item("Copy");
        let fired = Rc::new(Cell::new(0u32));
        let sink = Rc::clone(&fired);
        menu.bind_shortcut(item, Key::Char('c'), Modifiers::CONTROL, move || {
            sink.set(sink.get() + 1);
        })
        .unwrap();

        assert!(menu.dispatch(Key::Char('c'), Modifiers::CONTROL));
        assert_eq!(fired.get(), 1);

        // Wrong modifiers: no match.
        assert!(!menu.dispatch(Key::Char('c'), Modifiers::ALT));
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn dispatch_skips_disabled_command() {
        let mut menu = Menu::new();
        let item = menu.add_item("Delete");
        let command = Command::with_predicate(|_: &()| {}, |_| false);
        menu.bind_command(item, Key::Delete, Modifiers::CONTROL, command)
            .unwrap();

        assert!(!menu.dispatch(Key::Delete, Modifiers::CONTROL));
    }

    #[test]
    fn out_of_range_item_still_registers_binding() {
        let mut menu = Menu::new();
        menu.bind_shortcut(99, Key::Char('k'), Modifiers::CONTROL, || {})
            .unwrap();
        assert_eq!(menu.binding_count(), 1);
        assert!(menu.dispatch(Key::Char('k'), Modifiers::CONTROL));
    }

    #[test]
    fn error_display() {
        let err = ShortcutError::ModifierRequired {
            key: "V".to_string(),
        };
        assert!(err.to_string().contains("needs a modifier"));
    }
}
