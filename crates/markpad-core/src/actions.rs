//! Formatting actions and key input types.
//!
//! Platform-agnostic definitions. `FormatAction` is the semantic operation a
//! toolbar button or shortcut triggers; `Key`, `Modifiers` and `KeyCombo`
//! describe the keyboard side, decoupled from any particular event source.

use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;

/// All formatting actions the toolbar offers.
///
/// Actions are stateless: nothing carries over between invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatAction {
    /// Wrap in `**`.
    Bold,
    /// Wrap in `*`.
    Italic,
    /// Level-one heading on its own line.
    Heading,
    /// Wrap in `<center>` tags.
    Center,
    /// `[text](url)`, asks for the URL.
    Link,
    /// `![alt](url)`, asks for the URL.
    Image,
    /// Wrap in single backticks.
    Code,
    /// Fenced code block.
    CodeBlock,
    /// Block quote.
    Quote,
    /// Prefix each non-empty line with `- `.
    UnorderedList,
    /// Prefix each non-empty line with its 1-based index.
    OrderedList,
    /// Thematic break. Discards the selection.
    HorizontalRule,
}

impl FormatAction {
    /// Every action, in toolbar order.
    pub const ALL: [FormatAction; 12] = [
        Self::Bold,
        Self::Italic,
        Self::Heading,
        Self::Center,
        Self::Link,
        Self::Image,
        Self::Code,
        Self::CodeBlock,
        Self::Quote,
        Self::UnorderedList,
        Self::OrderedList,
        Self::HorizontalRule,
    ];

    /// Stable identifier, as written to the `data-action` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Heading => "heading",
            Self::Center => "center",
            Self::Link => "link",
            Self::Image => "image",
            Self::Code => "code",
            Self::CodeBlock => "codeblock",
            Self::Quote => "quote",
            Self::UnorderedList => "ul",
            Self::OrderedList => "ol",
            Self::HorizontalRule => "hr",
        }
    }

    /// Text inserted in place of an empty selection.
    ///
    /// `None` for the horizontal rule, which never embeds text.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::Bold => Some("bold text"),
            Self::Italic => Some("italic text"),
            Self::Heading => Some("Heading"),
            Self::Center => Some("Centered text"),
            Self::Link => Some("link text"),
            Self::Image => Some("image"),
            Self::Code => Some("code"),
            Self::CodeBlock => Some("code block"),
            Self::Quote => Some("quote"),
            Self::UnorderedList | Self::OrderedList => Some("list item"),
            Self::HorizontalRule => None,
        }
    }

    /// Prompt message for actions that need a URL from the user.
    pub fn url_prompt(self) -> Option<&'static str> {
        match self {
            Self::Link => Some("Enter URL:"),
            Self::Image => Some("Enter image URL:"),
            _ => None,
        }
    }
}

impl fmt::Display for FormatAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An action identifier that doesn't name any `FormatAction`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown format action `{0}`")]
pub struct UnknownAction(pub String);

impl FromStr for FormatAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

/// Key values for keyboard input.
///
/// Platform-agnostic key representation. Platform-specific code converts
/// from native key events to this enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A character key.
    Character(SmolStr),

    /// Unknown/unidentified key.
    Unidentified,

    // === Whitespace / editing ===
    Backspace,
    Delete,
    Enter,
    Tab,
    Escape,

    // === Navigation ===
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,

    // === Modifiers ===
    Alt,
    Control,
    Meta,
    Shift,
}

impl Key {
    /// Create a character key.
    pub fn character(s: impl Into<SmolStr>) -> Self {
        Self::Character(s.into())
    }

    /// Lowercase character keys so Shift doesn't change the key identity.
    pub fn normalized(&self) -> Self {
        match self {
            Self::Character(s) if s.chars().any(char::is_uppercase) => {
                Self::Character(SmolStr::new(s.to_lowercase()))
            }
            other => other.clone(),
        }
    }
}

/// Modifier key state for a key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const SHIFT: Self = Self {
        ctrl: false,
        alt: false,
        shift: true,
        meta: false,
    };

    pub const META: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: true,
    };

    pub const CTRL_SHIFT: Self = Self {
        ctrl: true,
        alt: false,
        shift: true,
        meta: false,
    };

    pub const META_SHIFT: Self = Self {
        ctrl: false,
        alt: false,
        shift: true,
        meta: true,
    };

    /// Get the primary modifier for the platform (Cmd on Mac, Ctrl elsewhere).
    pub fn primary(is_mac: bool) -> Self {
        if is_mac { Self::META } else { Self::CTRL }
    }

    /// Get the primary modifier + Shift for the platform.
    pub fn primary_shift(is_mac: bool) -> Self {
        if is_mac {
            Self::META_SHIFT
        } else {
            Self::CTRL_SHIFT
        }
    }
}

/// A key combination for triggering an action.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyCombo {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn primary(key: Key, is_mac: bool) -> Self {
        Self {
            key,
            modifiers: Modifiers::primary(is_mac),
        }
    }

    pub fn primary_shift(key: Key, is_mac: bool) -> Self {
        Self {
            key,
            modifiers: Modifiers::primary_shift(is_mac),
        }
    }

    /// Same combo with the key normalized for table lookup.
    pub fn normalized(&self) -> Self {
        Self {
            key: self.key.normalized(),
            modifiers: self.modifiers,
        }
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.modifiers;
        if m.ctrl {
            f.write_str("Ctrl+")?;
        }
        if m.meta {
            f.write_str("Cmd+")?;
        }
        if m.alt {
            f.write_str("Alt+")?;
        }
        if m.shift {
            f.write_str("Shift+")?;
        }
        match &self.key {
            Key::Character(s) => f.write_str(&s.to_uppercase()),
            other => write!(f, "{other:?}"),
        }
    }
}

/// Result of handling a keydown event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeydownResult {
    /// Event was handled, prevent default.
    Handled,
    /// Not a shortcut for this field, let the platform handle it.
    PassThrough,
}
