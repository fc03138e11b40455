#![cfg(test)]

use proptest::prelude::*;

use crate::keys::{Key, Modifiers};
use crate::shortcut::{Menu, ShortcutError, gesture_label};

fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        proptest::char::range('a', 'z').prop_map(Key::Char),
        (1u8..=12).prop_map(Key::F),
        (0u8..=9).prop_map(Key::Numpad),
        Just(Key::Enter),
        Just(Key::Escape),
        Just(Key::Tab),
        Just(Key::Delete),
        Just(Key::Home),
        Just(Key::End),
        Just(Key::PageUp),
        Just(Key::PageDown),
        Just(Key::NumpadEnter),
        Just(Key::NumpadAdd),
        Just(Key::NumpadDecimal),
    ]
}

fn modifiers_strategy() -> impl Strategy<Value = Modifiers> {
    (0u8..16).prop_map(Modifiers::from_bits_truncate)
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn gesture_label_ends_with_key_label(key in key_strategy(), mods in modifiers_strategy()) {
        let label = gesture_label(key, mods);
        prop_assert!(label.ends_with(&key.label()));
        prop_assert!(!label.is_empty());
    }

    #[test]
    fn gesture_label_has_one_segment_per_modifier(
        key in key_strategy(),
        mods in modifiers_strategy(),
    ) {
        let label = gesture_label(key, mods);
        let separators = label.matches(" + ").count();
        // Key labels never contain the separator, so every occurrence is
        // one modifier segment.
        prop_assert_eq!(separators, mods.bits().count_ones() as usize);
    }

    #[test]
    fn modifierless_binding_legality_tracks_numpad_set(key in key_strategy()) {
        let mut menu = Menu::new();
        let item = menu.add_item("item");
        let result = menu.bind_shortcut(item, key, Modifiers::empty(), || {});

        if key.is_numpad() {
            prop_assert!(result.is_ok());
            prop_assert_eq!(menu.binding_count(), 1);
        } else {
            prop_assert_eq!(
                result,
                Err(ShortcutError::ModifierRequired { key: key.label() })
            );
            prop_assert_eq!(menu.binding_count(), 0);
        }
    }

    #[test]
    fn modified_binding_always_accepted_and_dispatchable(
        key in key_strategy(),
        mods in modifiers_strategy().prop_filter("needs a modifier", |m| !m.is_empty()),
    ) {
        let mut menu = Menu::new();
        let item = menu.add_item("item");
        menu.bind_shortcut(item, key, mods, || {}).unwrap();

        let expected_label = gesture_label(key, mods);
        prop_assert_eq!(
            menu.item(item).unwrap().gesture_text(),
            Some(expected_label.as_str())
        );
        prop_assert!(menu.dispatch(key, mods));
    }
}
