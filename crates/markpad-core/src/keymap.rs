//! Shortcut table mapping key combinations to format actions.

use std::collections::HashMap;

use crate::actions::{FormatAction, Key, KeyCombo};

/// Keybinding lookup for a formatter.
///
/// Modifiers match exactly: `Ctrl+Shift+I` never falls back to `Ctrl+I`.
/// Character keys match case-insensitively.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    bindings: HashMap<KeyCombo, FormatAction>,
}

impl KeybindingConfig {
    /// A table with no bindings.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// The standard shortcut table. `is_mac` picks Cmd over Ctrl as the
    /// primary modifier.
    pub fn default_for_platform(is_mac: bool) -> Self {
        let primary = |c: &str| KeyCombo::primary(Key::character(c), is_mac);
        let primary_shift = |c: &str| KeyCombo::primary_shift(Key::character(c), is_mac);

        let mut config = Self::empty();
        config.bind(primary("b"), FormatAction::Bold);
        config.bind(primary("i"), FormatAction::Italic);
        config.bind(primary("h"), FormatAction::Heading);
        config.bind(primary("e"), FormatAction::Center);
        config.bind(primary("l"), FormatAction::Link);
        config.bind(primary("r"), FormatAction::HorizontalRule);
        config.bind(primary_shift("c"), FormatAction::Code);
        config.bind(primary_shift("i"), FormatAction::Image);
        config.bind(primary_shift("b"), FormatAction::CodeBlock);
        config.bind(primary_shift("o"), FormatAction::OrderedList);
        config.bind(primary_shift("q"), FormatAction::Quote);
        config.bind(Self::bare_list_combo(), FormatAction::UnorderedList);
        config
    }

    /// The unmodified `U` binding for unordered lists.
    pub fn bare_list_combo() -> KeyCombo {
        KeyCombo::new(Key::character("u"))
    }

    /// Bind `combo`, returning the action it replaced.
    pub fn bind(&mut self, combo: KeyCombo, action: FormatAction) -> Option<FormatAction> {
        self.bindings.insert(combo.normalized(), action)
    }

    /// Remove a binding, returning the action it had.
    pub fn unbind(&mut self, combo: &KeyCombo) -> Option<FormatAction> {
        self.bindings.remove(&combo.normalized())
    }

    /// Action bound to `combo`, if any.
    pub fn lookup(&self, combo: &KeyCombo) -> Option<FormatAction> {
        self.bindings.get(&combo.normalized()).copied()
    }

    /// First combo bound to `action`.
    pub fn combo_for(&self, action: FormatAction) -> Option<&KeyCombo> {
        self.bindings
            .iter()
            .find(|(_, bound)| **bound == action)
            .map(|(combo, _)| combo)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::default_for_platform(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Modifiers;

    fn combo(c: &str, modifiers: Modifiers) -> KeyCombo {
        KeyCombo::with_modifiers(Key::character(c), modifiers)
    }

    #[test]
    fn test_default_table() {
        let config = KeybindingConfig::default();
        let cases = [
            (combo("b", Modifiers::CTRL), FormatAction::Bold),
            (combo("i", Modifiers::CTRL), FormatAction::Italic),
            (combo("h", Modifiers::CTRL), FormatAction::Heading),
            (combo("e", Modifiers::CTRL), FormatAction::Center),
            (combo("l", Modifiers::CTRL), FormatAction::Link),
            (combo("r", Modifiers::CTRL), FormatAction::HorizontalRule),
            (combo("C", Modifiers::CTRL_SHIFT), FormatAction::Code),
            (combo("I", Modifiers::CTRL_SHIFT), FormatAction::Image),
            (combo("B", Modifiers::CTRL_SHIFT), FormatAction::CodeBlock),
            (combo("O", Modifiers::CTRL_SHIFT), FormatAction::OrderedList),
            (combo("Q", Modifiers::CTRL_SHIFT), FormatAction::Quote),
            (combo("u", Modifiers::NONE), FormatAction::UnorderedList),
        ];
        assert_eq!(config.len(), cases.len());
        for (combo, action) in cases {
            assert_eq!(config.lookup(&combo), Some(action), "{combo}");
        }
    }

    #[test]
    fn test_shift_variants_are_exclusive() {
        let config = KeybindingConfig::default();
        assert_eq!(
            config.lookup(&combo("I", Modifiers::CTRL_SHIFT)),
            Some(FormatAction::Image)
        );
        assert_eq!(
            config.lookup(&combo("i", Modifiers::CTRL)),
            Some(FormatAction::Italic)
        );
    }

    #[test]
    fn test_unbound_combos_pass() {
        let config = KeybindingConfig::default();
        assert_eq!(config.lookup(&combo("c", Modifiers::CTRL)), None);
        assert_eq!(config.lookup(&combo("u", Modifiers::CTRL)), None);
        assert_eq!(config.lookup(&combo("U", Modifiers::SHIFT)), None);
        assert_eq!(config.lookup(&combo("x", Modifiers::NONE)), None);
        assert_eq!(config.lookup(&KeyCombo::new(Key::Enter)), None);
    }

    #[test]
    fn test_mac_uses_meta() {
        let config = KeybindingConfig::default_for_platform(true);
        assert_eq!(
            config.lookup(&combo("b", Modifiers::META)),
            Some(FormatAction::Bold)
        );
        assert_eq!(config.lookup(&combo("b", Modifiers::CTRL)), None);
        assert_eq!(
            config.lookup(&combo("o", Modifiers::META_SHIFT)),
            Some(FormatAction::OrderedList)
        );
    }

    #[test]
    fn test_unbind_bare_list() {
        let mut config = KeybindingConfig::default();
        let removed = config.unbind(&KeybindingConfig::bare_list_combo());
        assert_eq!(removed, Some(FormatAction::UnorderedList));
        assert_eq!(config.lookup(&combo("u", Modifiers::NONE)), None);
        assert_eq!(config.combo_for(FormatAction::UnorderedList), None);
    }

    #[test]
    fn test_combo_for() {
        let config = KeybindingConfig::default();
        let combo = config.combo_for(FormatAction::Quote).unwrap();
        assert_eq!(combo.to_string(), "Ctrl+Shift+Q");
    }
}
