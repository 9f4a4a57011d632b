//! Types exposed to JavaScript via wasm-bindgen.

use markpad_browser::{DEFAULT_FIELD_ID, ToolbarOptions};
use markpad_core::ButtonDescriptor;
use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

/// Toolbar options as passed from JavaScript. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct JsToolbarOptions {
    /// Field attached by `initMarkdownToolbars` besides opted-in textareas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcuts: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bare_list_shortcut: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_help: Option<bool>,
    /// Use Cmd instead of Ctrl. Detected when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac: Option<bool>,
}

impl From<JsToolbarOptions> for ToolbarOptions {
    fn from(js: JsToolbarOptions) -> Self {
        let defaults = ToolbarOptions::default();
        Self {
            field_id: js.field_id.unwrap_or_else(|| DEFAULT_FIELD_ID.to_string()),
            shortcuts: js.shortcuts.unwrap_or(defaults.shortcuts),
            bare_list_shortcut: js.bare_list_shortcut.unwrap_or(defaults.bare_list_shortcut),
            show_help: js.show_help.unwrap_or(defaults.show_help),
            mac: js.mac,
        }
    }
}

/// Read an optional options object. `undefined` and `null` give defaults.
pub(crate) fn parse_options(options: JsValue) -> Result<ToolbarOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        return Ok(ToolbarOptions::default());
    }
    let js: JsToolbarOptions = serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))?;
    Ok(js.into())
}

/// Result of `formatText`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct JsFormatResult {
    pub text: String,
    /// UTF-16 cursor offset, `null` when the action was cancelled.
    pub cursor: Option<u32>,
}

/// One toolbar button, for hosts rendering their own controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct JsButton {
    pub action: String,
    pub label: String,
    pub glyph: String,
    pub title: String,
}

impl From<&ButtonDescriptor> for JsButton {
    fn from(button: &ButtonDescriptor) -> Self {
        Self {
            action: button.action.as_str().to_string(),
            label: button.label.to_string(),
            glyph: button.glyph.to_string(),
            title: button.title(),
        }
    }
}
