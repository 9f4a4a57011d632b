//! Browser DOM layer for the markpad formatting toolbar.
//!
//! This crate renders the toolbar next to a `<textarea>` and wires clicks and
//! keyboard shortcuts to a `markpad_core::Formatter`. It assumes a
//! `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `field`: `FieldPlatform` over `HtmlTextAreaElement` (UTF-16 offset conversion)
//! - `prompt`: `window.prompt` as a `UrlPrompt`
//! - `events`: keyboard event to `KeyCombo` conversion, button click decoding
//! - `toolbar`: `ToolbarPlatform` implementation (DOM construction, listeners)
//! - `attach`: entry points the host calls once the document is ready
//! - `platform`: Browser/OS detection for the primary shortcut modifier
//!
//! # Re-exports
//!
//! This crate re-exports `markpad-core` for convenience, so consumers
//! only need to depend on `markpad-browser`.

// Re-export core crate
pub use markpad_core;
pub use markpad_core::*;

pub mod attach;
pub mod events;
pub mod field;
pub mod platform;
pub mod prompt;
pub mod toolbar;

pub use attach::{AttachedToolbar, DEFAULT_FIELD_ID, ToolbarOptions, attach, attach_all, attach_by_id};
pub use events::{keycombo_from_event, parse_key};
pub use field::BrowserField;
pub use platform::{Platform, platform};
pub use prompt::WindowPrompt;
pub use toolbar::{BrowserToolbar, ToolbarControls, ToolbarHandlers, wrap_field, wrap_field_with};

use wasm_bindgen::JsValue;

/// Convert a JS exception into a `PlatformError`.
pub(crate) fn dom_error(context: &str, err: JsValue) -> PlatformError {
    PlatformError::Dom(format!("{context}: {err:?}"))
}
