//! `FieldPlatform` over a `<textarea>`.
//!
//! The DOM reports selection offsets in UTF-16 code units; the core works in
//! chars. Every crossing goes through `EditorRope`'s conversions.

use markpad_core::{EditorRope, FieldPlatform, PlatformError, Selection, TextBuffer};
use web_sys::{Event, EventInit, HtmlTextAreaElement, Node};

use crate::dom_error;

/// A textarea the toolbar formats.
#[derive(Debug, Clone)]
pub struct BrowserField {
    id: String,
    element: HtmlTextAreaElement,
}

impl BrowserField {
    /// Wrap a textarea. The id is captured once and used to scope clicks.
    pub fn new(element: HtmlTextAreaElement) -> Self {
        Self {
            id: element.id(),
            element,
        }
    }

    pub fn element(&self) -> &HtmlTextAreaElement {
        &self.element
    }

    /// Fire a bubbling `input` event so form listeners see the new value.
    fn notify_input(&self) -> Result<(), PlatformError> {
        let init = EventInit::new();
        init.set_bubbles(true);
        let event = Event::new_with_event_init_dict("input", &init)
            .map_err(|e| dom_error("create input event", e))?;
        self.element
            .dispatch_event(&event)
            .map_err(|e| dom_error("dispatch input event", e))?;
        Ok(())
    }
}

impl FieldPlatform for BrowserField {
    fn field_id(&self) -> &str {
        &self.id
    }

    fn value(&self) -> String {
        self.element.value()
    }

    fn selection(&self) -> Selection {
        let rope = EditorRope::from(self.element.value());
        let start = self.element.selection_start().ok().flatten().unwrap_or(0) as usize;
        let end = self
            .element
            .selection_end()
            .ok()
            .flatten()
            .map(|end| end as usize)
            .unwrap_or(start);

        let start = rope.utf16_to_char(start);
        let end = rope.utf16_to_char(end);

        let backward = self
            .element
            .selection_direction()
            .ok()
            .flatten()
            .is_some_and(|dir| dir == "backward");
        if backward {
            Selection::new(end, start)
        } else {
            Selection::new(start, end)
        }
    }

    fn set_value(&self, value: &str) -> Result<(), PlatformError> {
        self.element.set_value(value);
        Ok(())
    }

    fn set_selection(&self, selection: Selection) -> Result<(), PlatformError> {
        let rope = EditorRope::from(self.element.value());
        let selection = selection.clamp(rope.len_chars());
        let start = rope.char_to_utf16(selection.start()) as u32;
        let end = rope.char_to_utf16(selection.end()) as u32;
        self.element
            .set_selection_range(start, end)
            .map_err(|e| dom_error("set selection range", e))
    }

    fn focus(&self) -> Result<(), PlatformError> {
        self.element.focus().map_err(|e| dom_error("focus field", e))
    }

    fn has_focus(&self) -> bool {
        self.element
            .owner_document()
            .and_then(|doc| doc.active_element())
            .is_some_and(|active| {
                let node: &Node = self.element.as_ref();
                active.is_same_node(Some(node))
            })
    }

    fn changed(&self) {
        if let Err(err) = self.notify_input() {
            tracing::warn!(field_id = %self.id, %err, "could not notify input listeners");
        }
    }
}
