//! markpad-core: Markdown formatting logic for plain text fields.
//!
//! This crate provides:
//! - `FormatAction` - the fixed set of toolbar/shortcut actions
//! - `TextBuffer` trait for text storage, with the ropey-backed `EditorRope`
//! - `apply_format` - the pure selection-to-markup transformer
//! - `KeybindingConfig` - shortcut table mapping key combos to actions
//! - `TOOLBAR_BUTTONS` - static toolbar descriptors
//! - `Formatter<F>` - binds all of the above to one host field
//!
//! Nothing here touches the DOM. Hosts implement `FieldPlatform` and
//! `ToolbarPlatform` to plug the logic into a concrete UI.

pub mod actions;
pub mod format;
pub mod formatter;
pub mod keymap;
pub mod platform;
pub mod text;
pub mod toolbar;
pub mod types;

pub use actions::{FormatAction, Key, KeyCombo, KeydownResult, Modifiers, UnknownAction};
pub use format::{FormatOutcome, NoPrompt, UrlPrompt, apply_format, format_replacement};
pub use formatter::Formatter;
pub use keymap::KeybindingConfig;
pub use platform::{FieldPlatform, PlatformError, ToolbarPlatform};
pub use smol_str::SmolStr;
pub use text::{EditorRope, TextBuffer};
pub use toolbar::{ButtonDescriptor, HELP_SNIPPETS, TOOLBAR_BUTTONS};
pub use types::Selection;
