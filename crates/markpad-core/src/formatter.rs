//! Per-field formatter.
//!
//! A `Formatter` owns one field handle and the shortcut table for it. It has
//! no other state, so any number of formatters can coexist on a page without
//! seeing each other's events.

use std::rc::Rc;

use crate::actions::{FormatAction, KeyCombo, KeydownResult};
use crate::format::{FormatOutcome, UrlPrompt, apply_format};
use crate::keymap::KeybindingConfig;
use crate::platform::{FieldPlatform, PlatformError};
use crate::text::{EditorRope, TextBuffer};
use crate::types::Selection;

/// Formatting actions bound to a single host field.
#[derive(Debug)]
pub struct Formatter<F> {
    field: F,
    keybindings: Rc<KeybindingConfig>,
}

impl<F: Clone> Clone for Formatter<F> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            keybindings: Rc::clone(&self.keybindings),
        }
    }
}

impl<F: FieldPlatform> Formatter<F> {
    pub fn new(field: F, keybindings: KeybindingConfig) -> Self {
        Self {
            field,
            keybindings: Rc::new(keybindings),
        }
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn field_id(&self) -> &str {
        self.field.field_id()
    }

    pub fn keybindings(&self) -> &KeybindingConfig {
        &self.keybindings
    }

    /// Run `action` against the field's current value and selection.
    ///
    /// On success the field gets the new value, a collapsed cursor at the
    /// end of the inserted markup, and focus. A cancelled prompt writes
    /// nothing back.
    pub fn apply<P>(&self, action: FormatAction, prompt: &mut P) -> Result<FormatOutcome, PlatformError>
    where
        P: UrlPrompt + ?Sized,
    {
        let mut buffer = EditorRope::from(self.field.value());
        let selection = self.field.selection();

        let outcome = apply_format(&mut buffer, selection, action, prompt);
        if let FormatOutcome::Applied { cursor } = outcome {
            self.field.set_value(&buffer.to_string())?;
            self.field.set_selection(Selection::collapsed(cursor))?;
            self.field.focus()?;
            self.field.changed();
        }

        Ok(outcome)
    }

    /// Handle a toolbar click on a button tagged with `target_id`.
    ///
    /// Returns `Ok(None)` without touching the field when the button belongs
    /// to another field.
    pub fn handle_click<P>(
        &self,
        target_id: &str,
        action: FormatAction,
        prompt: &mut P,
    ) -> Result<Option<FormatOutcome>, PlatformError>
    where
        P: UrlPrompt + ?Sized,
    {
        if target_id != self.field_id() {
            tracing::trace!(
                target_id,
                field_id = self.field_id(),
                "ignoring click for another field"
            );
            return Ok(None);
        }
        self.apply(action, prompt).map(Some)
    }

    /// Handle a key combination pressed on the field.
    ///
    /// Only fires while the field has focus. A bound combo is `Handled` even
    /// when its URL prompt gets cancelled.
    pub fn handle_keydown<P>(&self, combo: &KeyCombo, prompt: &mut P) -> Result<KeydownResult, PlatformError>
    where
        P: UrlPrompt + ?Sized,
    {
        if !self.field.has_focus() {
            return Ok(KeydownResult::PassThrough);
        }

        let Some(action) = self.keybindings.lookup(combo) else {
            return Ok(KeydownResult::PassThrough);
        };

        tracing::debug!(%combo, %action, field_id = self.field_id(), "shortcut");
        self.apply(action, prompt)?;
        Ok(KeydownResult::Handled)
    }
}
