//! Static toolbar configuration.

use crate::actions::FormatAction;

/// One toolbar button. Static; never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonDescriptor {
    pub label: &'static str,
    pub action: FormatAction,
    pub glyph: &'static str,
    pub shortcut: &'static str,
}

impl ButtonDescriptor {
    /// Tooltip text, e.g. `Bold (Ctrl+B)`.
    pub fn title(&self) -> String {
        format!("{} ({})", self.label, self.shortcut)
    }
}

/// Buttons in display order, one per `FormatAction`.
pub const TOOLBAR_BUTTONS: [ButtonDescriptor; 12] = [
    ButtonDescriptor {
        label: "Bold",
        action: FormatAction::Bold,
        glyph: "B",
        shortcut: "Ctrl+B",
    },
    ButtonDescriptor {
        label: "Italic",
        action: FormatAction::Italic,
        glyph: "I",
        shortcut: "Ctrl+I",
    },
    ButtonDescriptor {
        label: "Heading",
        action: FormatAction::Heading,
        glyph: "H1",
        shortcut: "Ctrl+H",
    },
    ButtonDescriptor {
        label: "Center",
        action: FormatAction::Center,
        glyph: "⊗",
        shortcut: "Ctrl+E",
    },
    ButtonDescriptor {
        label: "Link",
        action: FormatAction::Link,
        glyph: "🔗",
        shortcut: "Ctrl+L",
    },
    ButtonDescriptor {
        label: "Image",
        action: FormatAction::Image,
        glyph: "🖼️",
        shortcut: "Ctrl+Shift+I",
    },
    ButtonDescriptor {
        label: "Code",
        action: FormatAction::Code,
        glyph: "</>",
        shortcut: "Ctrl+Shift+C",
    },
    ButtonDescriptor {
        label: "Code Block",
        action: FormatAction::CodeBlock,
        glyph: "⌘",
        shortcut: "Ctrl+Shift+B",
    },
    ButtonDescriptor {
        label: "Quote",
        action: FormatAction::Quote,
        glyph: "❝",
        shortcut: "Ctrl+Shift+Q",
    },
    ButtonDescriptor {
        label: "Unordered List",
        action: FormatAction::UnorderedList,
        glyph: "•",
        shortcut: "U",
    },
    ButtonDescriptor {
        label: "Ordered List",
        action: FormatAction::OrderedList,
        glyph: "1.",
        shortcut: "Ctrl+Shift+O",
    },
    ButtonDescriptor {
        label: "Horizontal Rule",
        action: FormatAction::HorizontalRule,
        glyph: "—",
        shortcut: "Ctrl+R",
    },
];

/// Syntax cheat sheet shown under the field when help is enabled.
pub const HELP_SNIPPETS: [&str; 7] = [
    "**bold**",
    "*italic*",
    "# heading",
    "[link](url)",
    "![image](url)",
    "`code`",
    "> quote",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::KeybindingConfig;

    #[test]
    fn test_one_button_per_action() {
        let actions: Vec<_> = TOOLBAR_BUTTONS.iter().map(|b| b.action).collect();
        assert_eq!(actions, FormatAction::ALL.to_vec());
    }

    #[test]
    fn test_shortcut_labels_match_default_bindings() {
        let config = KeybindingConfig::default();
        for button in &TOOLBAR_BUTTONS {
            let combo = config.combo_for(button.action).unwrap();
            assert_eq!(combo.to_string(), button.shortcut, "{}", button.label);
        }
    }

    #[test]
    fn test_titles() {
        let titles: Vec<_> = TOOLBAR_BUTTONS.iter().map(|b| b.title()).collect();
        insta::assert_snapshot!(titles.join("\n"), @r"
        Bold (Ctrl+B)
        Italic (Ctrl+I)
        Heading (Ctrl+H)
        Center (Ctrl+E)
        Link (Ctrl+L)
        Image (Ctrl+Shift+I)
        Code (Ctrl+Shift+C)
        Code Block (Ctrl+Shift+B)
        Quote (Ctrl+Shift+Q)
        Unordered List (U)
        Ordered List (Ctrl+Shift+O)
        Horizontal Rule (Ctrl+R)
        ");
    }
}
