//! Entry points for attaching toolbars to textareas.
//!
//! Call these once the document has loaded. Each attached field gets its own
//! `Formatter`, its own controls, and its own listeners; the returned
//! `AttachedToolbar` owns all three.

use std::collections::HashSet;

use markpad_core::{
    FieldPlatform, FormatAction, FormatOutcome, Formatter, KeybindingConfig, PlatformError,
    TOOLBAR_BUTTONS, ToolbarPlatform,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlTextAreaElement};

use crate::dom_error;
use crate::field::BrowserField;
use crate::platform::platform;
use crate::prompt::WindowPrompt;
use crate::toolbar::{BrowserToolbar, CONTAINER_CLASS, ToolbarControls, ToolbarHandlers};

/// Field id attached by default, the blog post body.
pub const DEFAULT_FIELD_ID: &str = "id_content";

/// Textareas that opt in to a toolbar through markup.
pub const MARKDOWN_FIELD_SELECTOR: &str = r#"textarea[data-markdown-editor="true"]"#;

/// Attachment settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarOptions {
    /// Field looked up by `attach_all` in addition to the opt-in selector.
    pub field_id: String,
    /// Bind keyboard shortcuts on the field.
    pub shortcuts: bool,
    /// Bind the modifier-less `U` shortcut for unordered lists.
    pub bare_list_shortcut: bool,
    /// Render the syntax help block under the field.
    pub show_help: bool,
    /// Force Cmd (`true`) or Ctrl (`false`) as the primary modifier.
    /// `None` detects from the user agent.
    pub mac: Option<bool>,
}

impl Default for ToolbarOptions {
    fn default() -> Self {
        Self {
            field_id: DEFAULT_FIELD_ID.to_string(),
            shortcuts: true,
            bare_list_shortcut: true,
            show_help: false,
            mac: None,
        }
    }
}

impl ToolbarOptions {
    /// Shortcut table for these options on the current platform.
    pub fn keybindings(&self) -> KeybindingConfig {
        let is_mac = self.mac.unwrap_or_else(|| platform().primary_is_meta());
        let mut config = KeybindingConfig::default_for_platform(is_mac);
        if !self.bare_list_shortcut {
            config.unbind(&KeybindingConfig::bare_list_combo());
        }
        config
    }

    fn toolbar(&self) -> BrowserToolbar {
        BrowserToolbar {
            shortcuts: self.shortcuts,
            show_help: self.show_help,
        }
    }
}

/// A toolbar attached to one textarea.
///
/// Dropping it unbinds the listeners but leaves the DOM in place, unless
/// [`AttachedToolbar::persist`] was called. Use [`AttachedToolbar::detach`] to
/// also put the field back in its place.
#[derive(Debug)]
pub struct AttachedToolbar {
    formatter: Formatter<BrowserField>,
    controls: ToolbarControls,
    handlers: ToolbarHandlers,
}

impl AttachedToolbar {
    pub fn formatter(&self) -> &Formatter<BrowserField> {
        &self.formatter
    }

    pub fn field_id(&self) -> &str {
        self.formatter.field_id()
    }

    pub fn controls(&self) -> &ToolbarControls {
        &self.controls
    }

    /// Apply `action` as if its button had been clicked.
    pub fn apply(&self, action: FormatAction) -> Result<FormatOutcome, PlatformError> {
        self.formatter.apply(action, &mut WindowPrompt::new())
    }

    /// Keep the listeners bound for the life of the page, even after this
    /// handle is dropped.
    pub fn persist(&mut self) {
        self.handlers.forget();
    }

    /// Unbind the listeners and put the field back where it was.
    pub fn detach(self) -> Result<(), PlatformError> {
        let Self {
            formatter,
            controls,
            handlers,
        } = self;
        handlers.disable();
        drop(handlers);
        controls.remove(formatter.field())?;
        tracing::debug!(field_id = formatter.field_id(), "detached toolbar");
        Ok(())
    }
}

fn document() -> Result<Document, PlatformError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(PlatformError::MissingDocument)
}

fn has_toolbar(element: &HtmlTextAreaElement) -> bool {
    element
        .parent_element()
        .is_some_and(|parent| parent.class_list().contains(CONTAINER_CLASS))
}

/// Attach a toolbar to `element`.
pub fn attach(
    element: HtmlTextAreaElement,
    options: &ToolbarOptions,
) -> Result<AttachedToolbar, PlatformError> {
    let field = BrowserField::new(element);
    if field.field_id().is_empty() {
        return Err(PlatformError::MissingId);
    }
    if has_toolbar(field.element()) {
        return Err(PlatformError::AlreadyAttached(field.field_id().to_string()));
    }

    let toolbar = options.toolbar();
    let formatter = Formatter::new(field.clone(), options.keybindings());
    let controls = toolbar.render_controls(&field, &TOOLBAR_BUTTONS)?;
    let handlers = toolbar.bind_handlers(formatter.clone(), &controls)?;

    tracing::debug!(
        field_id = field.field_id(),
        shortcuts = options.shortcuts,
        "attached toolbar"
    );
    Ok(AttachedToolbar {
        formatter,
        controls,
        handlers,
    })
}

/// Attach a toolbar to the textarea with id `id`.
///
/// Returns `Ok(None)` when no such textarea exists; pages without the field
/// are not an error.
pub fn attach_by_id(
    id: &str,
    options: &ToolbarOptions,
) -> Result<Option<AttachedToolbar>, PlatformError> {
    let Some(element) = document()?.get_element_by_id(id) else {
        tracing::debug!(id, "no field to attach to");
        return Ok(None);
    };
    let Ok(element) = element.dyn_into::<HtmlTextAreaElement>() else {
        tracing::warn!(id, "element is not a textarea, skipping");
        return Ok(None);
    };
    attach(element, options).map(Some)
}

/// Attach toolbars to `options.field_id` and to every opted-in textarea.
///
/// Fields that fail to attach are logged and skipped.
pub fn attach_all(options: &ToolbarOptions) -> Result<Vec<AttachedToolbar>, PlatformError> {
    let document = document()?;
    let mut candidates = Vec::new();

    if let Some(element) = document.get_element_by_id(&options.field_id) {
        if let Ok(element) = element.dyn_into::<HtmlTextAreaElement>() {
            candidates.push(element);
        }
    }

    let marked = document
        .query_selector_all(MARKDOWN_FIELD_SELECTOR)
        .map_err(|e| dom_error("query markdown fields", e))?;
    for i in 0..marked.length() {
        if let Some(element) = marked
            .get(i)
            .and_then(|node| node.dyn_into::<HtmlTextAreaElement>().ok())
        {
            candidates.push(element);
        }
    }

    let mut seen = HashSet::new();
    let mut attached = Vec::new();
    for element in candidates {
        let id = element.id();
        if !id.is_empty() && !seen.insert(id.clone()) {
            continue;
        }
        match attach(element, options) {
            Ok(toolbar) => attached.push(toolbar),
            Err(PlatformError::AlreadyAttached(id)) => {
                tracing::debug!(%id, "field already has a toolbar");
            }
            Err(err) => tracing::warn!(%id, %err, "could not attach toolbar"),
        }
    }

    tracing::info!(count = attached.len(), "markdown toolbars attached");
    Ok(attached)
}
