//! MarkdownToolbar - the toolbar handle exposed to JavaScript.

use markpad_browser::{AttachedToolbar, attach, attach_all, attach_by_id};
use markpad_core::{
    EditorRope, FormatAction, FormatOutcome, Selection, TOOLBAR_BUTTONS, TextBuffer,
    UnknownAction, apply_format,
};
use wasm_bindgen::prelude::*;
use web_sys::HtmlTextAreaElement;

use crate::types::{JsButton, JsFormatResult, parse_options};

/// A formatting toolbar attached to one textarea.
///
/// The toolbar keeps working after this handle is garbage collected; call
/// `detach()` to remove it.
#[wasm_bindgen]
pub struct MarkdownToolbar {
    inner: Option<AttachedToolbar>,
}

impl MarkdownToolbar {
    fn attached(&self) -> Result<&AttachedToolbar, JsError> {
        self.inner
            .as_ref()
            .ok_or_else(|| JsError::new("Toolbar is detached"))
    }
}

impl From<AttachedToolbar> for MarkdownToolbar {
    fn from(mut toolbar: AttachedToolbar) -> Self {
        toolbar.persist();
        Self {
            inner: Some(toolbar),
        }
    }
}

#[wasm_bindgen]
impl MarkdownToolbar {
    /// Attach a toolbar to `field`.
    #[wasm_bindgen(constructor)]
    pub fn new(field: HtmlTextAreaElement, options: JsValue) -> Result<MarkdownToolbar, JsError> {
        let options = parse_options(options)?;
        let toolbar = attach(field, &options)
            .map_err(|e| JsError::new(&format!("Could not attach toolbar: {}", e)))?;
        Ok(toolbar.into())
    }

    /// Attach to the textarea with `id`. Returns `undefined` if there is none.
    #[wasm_bindgen(js_name = attachById)]
    pub fn attach_by_id(id: &str, options: JsValue) -> Result<Option<MarkdownToolbar>, JsError> {
        let options = parse_options(options)?;
        let toolbar = attach_by_id(id, &options)
            .map_err(|e| JsError::new(&format!("Could not attach toolbar: {}", e)))?;
        Ok(toolbar.map(MarkdownToolbar::from))
    }

    /// Apply a format action by name (`bold`, `link`, ...).
    ///
    /// Returns `false` when the action was cancelled at its URL prompt.
    #[wasm_bindgen(js_name = applyFormat)]
    pub fn apply_format(&self, action: &str) -> Result<bool, JsError> {
        let action: FormatAction = action
            .parse()
            .map_err(|e: UnknownAction| JsError::new(&e.to_string()))?;
        let outcome = self
            .attached()?
            .apply(action)
            .map_err(|e| JsError::new(&format!("Format failed: {}", e)))?;
        Ok(matches!(outcome, FormatOutcome::Applied { .. }))
    }

    /// Id of the field this toolbar formats.
    #[wasm_bindgen(js_name = fieldId)]
    pub fn field_id(&self) -> Option<String> {
        self.inner.as_ref().map(|t| t.field_id().to_string())
    }

    /// Remove the toolbar and its listeners. Calling twice is a no-op.
    pub fn detach(&mut self) -> Result<(), JsError> {
        if let Some(toolbar) = self.inner.take() {
            toolbar
                .detach()
                .map_err(|e| JsError::new(&format!("Could not detach toolbar: {}", e)))?;
        }
        Ok(())
    }
}

/// Attach toolbars to the primary field and every opted-in textarea.
#[wasm_bindgen(js_name = initMarkdownToolbars)]
pub fn init_markdown_toolbars(options: JsValue) -> Result<Vec<MarkdownToolbar>, JsError> {
    let options = parse_options(options)?;
    let toolbars = attach_all(&options)
        .map_err(|e| JsError::new(&format!("Could not attach toolbars: {}", e)))?;
    Ok(toolbars.into_iter().map(MarkdownToolbar::from).collect())
}

fn format_text_inner(
    text: &str,
    start: u32,
    end: u32,
    action: &str,
    url: Option<String>,
) -> Result<JsFormatResult, UnknownAction> {
    let action: FormatAction = action.parse()?;
    let mut buffer = EditorRope::from(text);
    let selection = Selection::new(
        buffer.utf16_to_char(start as usize),
        buffer.utf16_to_char(end as usize),
    );

    let mut prompt = |_: &str| url.clone();
    let cursor = match apply_format(&mut buffer, selection, action, &mut prompt) {
        FormatOutcome::Applied { cursor } => Some(buffer.char_to_utf16(cursor) as u32),
        FormatOutcome::Cancelled => None,
    };

    Ok(JsFormatResult {
        text: buffer.to_string(),
        cursor,
    })
}

/// Format a plain string without a DOM field.
///
/// Offsets are UTF-16, as in `textarea.selectionStart`. `url` answers the
/// link/image prompt.
#[wasm_bindgen(js_name = formatText)]
pub fn format_text(
    text: &str,
    start: u32,
    end: u32,
    action: &str,
    url: Option<String>,
) -> Result<JsFormatResult, JsError> {
    format_text_inner(text, start, end, action, url).map_err(|e| JsError::new(&e.to_string()))
}

/// The toolbar button table.
#[wasm_bindgen(js_name = toolbarButtons)]
pub fn toolbar_buttons() -> Result<JsValue, JsError> {
    let buttons: Vec<JsButton> = TOOLBAR_BUTTONS.iter().map(JsButton::from).collect();
    serde_wasm_bindgen::to_value(&buttons)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_text_bold() {
        let result = format_text_inner("Hello world", 6, 11, "bold", None).unwrap();
        assert_eq!(result.text, "Hello **world**");
        assert_eq!(result.cursor, Some(15));
    }

    #[test]
    fn test_format_text_utf16_offsets() {
        let result = format_text_inner("😀 hi", 3, 5, "italic", None).unwrap();
        assert_eq!(result.text, "😀 *hi*");
        assert_eq!(result.cursor, Some(7));
    }

    #[test]
    fn test_format_text_link_needs_url() {
        let result = format_text_inner("site", 0, 4, "link", None).unwrap();
        assert_eq!(result.text, "site");
        assert_eq!(result.cursor, None);

        let result =
            format_text_inner("site", 0, 4, "link", Some("https://example.com".into())).unwrap();
        assert_eq!(result.text, "[site](https://example.com)");
        assert_eq!(result.cursor, Some(27));
    }

    #[test]
    fn test_format_text_unknown_action() {
        let err = format_text_inner("x", 0, 1, "strike", None).unwrap_err();
        assert_eq!(err, UnknownAction("strike".into()));
    }
}
