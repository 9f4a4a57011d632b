//! Browser event decoding.
//!
//! Turns `keydown` events into `KeyCombo`s and toolbar `click` events into
//! the action and target field they carry.

use markpad_core::{FormatAction, Key, KeyCombo, Modifiers};
use smol_str::SmolStr;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent};

/// CSS class carried by every toolbar button.
pub const BUTTON_CLASS: &str = "markdown-btn";

/// Parse a `KeyboardEvent.key` string to the core `Key` enum.
pub fn parse_key(key: &str) -> Key {
    match key {
        "Enter" => Key::Enter,
        "Backspace" => Key::Backspace,
        "Delete" => Key::Delete,
        "Tab" => Key::Tab,
        "Escape" => Key::Escape,
        "ArrowLeft" => Key::ArrowLeft,
        "ArrowRight" => Key::ArrowRight,
        "ArrowUp" => Key::ArrowUp,
        "ArrowDown" => Key::ArrowDown,
        "Home" => Key::Home,
        "End" => Key::End,
        "PageUp" => Key::PageUp,
        "PageDown" => Key::PageDown,
        "Alt" => Key::Alt,
        "Control" => Key::Control,
        "Meta" => Key::Meta,
        "Shift" => Key::Shift,
        s if s.chars().count() == 1 => Key::character(s),
        _ => Key::Unidentified,
    }
}

/// Letter for a physical `KeyA`..`KeyZ` code.
fn letter_from_code(code: &str) -> Option<SmolStr> {
    let letter = code.strip_prefix("Key")?;
    (letter.len() == 1 && letter.is_ascii()).then(|| SmolStr::new(letter.to_ascii_lowercase()))
}

/// Build the combo for a `keydown` event.
///
/// On non-Latin layouts `key` holds the layout's character, so shortcuts fall
/// back to the physical key in `code`.
pub fn keycombo_from_event(event: &KeyboardEvent) -> KeyCombo {
    let mut key = parse_key(&event.key());
    let non_ascii = matches!(&key, Key::Character(s) if !s.is_ascii());
    if non_ascii || key == Key::Unidentified {
        if let Some(letter) = letter_from_code(&event.code()) {
            key = Key::character(letter);
        }
    }

    let modifiers = Modifiers {
        ctrl: event.ctrl_key(),
        alt: event.alt_key(),
        shift: event.shift_key(),
        meta: event.meta_key(),
    };

    KeyCombo::with_modifiers(key, modifiers).normalized()
}

/// A click on a toolbar button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonClick {
    pub action: FormatAction,
    /// Id of the field the button was rendered for.
    pub target_id: String,
}

/// Decode a click event whose target is (or sits inside) a toolbar button.
///
/// Returns `None` for clicks elsewhere and for buttons with unknown or
/// missing attributes.
pub fn button_click_from_event(event: &Event) -> Option<ButtonClick> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let button = target.closest(&format!(".{BUTTON_CLASS}")).ok()??;

    let action = button.get_attribute("data-action")?;
    let action = match action.parse::<FormatAction>() {
        Ok(action) => action,
        Err(err) => {
            tracing::warn!(%err, "toolbar button with unknown action");
            return None;
        }
    };
    let target_id = button.get_attribute("data-target")?;

    Some(ButtonClick { action, target_id })
}
