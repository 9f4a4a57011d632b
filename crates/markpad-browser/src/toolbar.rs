//! DOM toolbar construction and listener wiring.
//!
//! Layout produced for a field with id `x`:
//!
//! ```text
//! div.markdown-toolbar-container#container-x
//! ├── div.markdown-toolbar#toolbar-x
//! │   └── button.markdown-btn[data-action][data-target="x"] × 12
//! ├── textarea#x
//! └── div.field-help            (only with `show_help`)
//! ```

use std::cell::Cell;
use std::rc::Rc;

use gloo_events::EventListener;
use markpad_core::{
    ButtonDescriptor, FieldPlatform, Formatter, HELP_SNIPPETS, KeydownResult, PlatformError,
    ToolbarPlatform,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, KeyboardEvent, Node};

use crate::dom_error;
use crate::events::{BUTTON_CLASS, button_click_from_event, keycombo_from_event};
use crate::field::BrowserField;
use crate::prompt::WindowPrompt;

pub const CONTAINER_CLASS: &str = "markdown-toolbar-container";
pub const TOOLBAR_CLASS: &str = "markdown-toolbar";
pub const HELP_CLASS: &str = "field-help";

/// Renders the toolbar for one textarea.
#[derive(Debug, Clone, Copy)]
pub struct BrowserToolbar {
    /// Bind the keyboard shortcut listener.
    pub shortcuts: bool,
    /// Render the syntax help block under the field.
    pub show_help: bool,
}

/// Elements created for one field.
#[derive(Debug, Clone)]
pub struct ToolbarControls {
    pub container: Element,
    pub toolbar: Element,
    pub help: Option<Element>,
}

impl ToolbarControls {
    /// Put the field back where the container sits and drop the container.
    pub fn remove(&self, field: &BrowserField) -> Result<(), PlatformError> {
        let element: &Node = field.element().as_ref();
        match self.container.parent_node() {
            Some(parent) => {
                parent
                    .replace_child(element, &self.container)
                    .map_err(|e| dom_error("restore field", e))?;
            }
            None => self.container.remove(),
        }
        Ok(())
    }
}

/// Live listeners for one toolbar.
///
/// Dropping this unbinds them unless [`ToolbarHandlers::forget`] was called.
#[derive(Debug)]
pub struct ToolbarHandlers {
    active: Rc<Cell<bool>>,
    click: Option<EventListener>,
    keydown: Option<EventListener>,
}

impl ToolbarHandlers {
    /// Keep the listeners bound for the rest of the page's life, even once
    /// this guard is dropped. [`ToolbarHandlers::disable`] still silences them.
    pub fn forget(&mut self) {
        for listener in [self.click.take(), self.keydown.take()].into_iter().flatten() {
            listener.forget();
        }
    }

    /// Turn the listeners into no-ops, bound or forgotten.
    pub fn disable(&self) {
        self.active.set(false);
    }
}

/// Put `container` where `field` sits under `parent`, then move `field`
/// inside it.
///
/// `replace` swaps `container` in for `field`. When it fails the container is
/// appended to `parent` instead.
pub fn wrap_field_with<R>(
    parent: &Node,
    container: &Element,
    field: &Node,
    replace: R,
) -> Result<(), PlatformError>
where
    R: FnOnce(&Node, &Node, &Node) -> Result<(), JsValue>,
{
    let node: &Node = container;
    if let Err(err) = replace(parent, node, field) {
        tracing::warn!(
            error = ?err,
            "could not replace field, appending toolbar to its parent"
        );
        append(parent, container)?;
    }
    append(container, field)
}

/// [`wrap_field_with`] using `Node.replaceChild`.
pub fn wrap_field(parent: &Node, container: &Element, field: &Node) -> Result<(), PlatformError> {
    wrap_field_with(parent, container, field, |parent, new, old| {
        parent.replace_child(new, old).map(|_| ())
    })
}

fn create_element(document: &Document, tag: &str, class: &str) -> Result<Element, PlatformError> {
    let element = document
        .create_element(tag)
        .map_err(|e| dom_error("create element", e))?;
    element.set_class_name(class);
    Ok(element)
}

fn append(parent: &Node, child: &Node) -> Result<(), PlatformError> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| dom_error("append child", e))
}

fn render_button(
    document: &Document,
    field_id: &str,
    descriptor: &ButtonDescriptor,
) -> Result<Element, PlatformError> {
    let button = create_element(document, "button", BUTTON_CLASS)?;
    let title = descriptor.title();
    let attrs = [
        ("type", "button"),
        ("data-action", descriptor.action.as_str()),
        ("data-target", field_id),
        ("title", title.as_str()),
    ];
    for (name, value) in attrs {
        button
            .set_attribute(name, value)
            .map_err(|e| dom_error("set button attribute", e))?;
    }
    button.set_text_content(Some(descriptor.glyph));
    Ok(button)
}

fn render_help(document: &Document) -> Result<Element, PlatformError> {
    let help = create_element(document, "div", HELP_CLASS)?;

    let heading = document
        .create_element("strong")
        .map_err(|e| dom_error("create help heading", e))?;
    heading.set_text_content(Some("Markdown Help:"));
    append(&help, &heading)?;
    append(&help, &document.create_text_node(" "))?;

    for (i, snippet) in HELP_SNIPPETS.iter().enumerate() {
        if i > 0 {
            append(&help, &document.create_text_node(" • "))?;
        }
        let code = document
            .create_element("code")
            .map_err(|e| dom_error("create help snippet", e))?;
        code.set_text_content(Some(snippet));
        append(&help, &code)?;
    }

    let hint = document
        .create_element("small")
        .map_err(|e| dom_error("create help hint", e))?;
    hint.set_text_content(Some(
        "Use toolbar buttons or keyboard shortcuts (Ctrl+B for bold, etc.)",
    ));
    let br = document.create_element("br").map_err(|e| dom_error("create br", e))?;
    append(&help, &br)?;
    append(&help, &hint)?;

    Ok(help)
}

impl ToolbarPlatform for BrowserToolbar {
    type Field = BrowserField;
    type Controls = ToolbarControls;
    type Handlers = ToolbarHandlers;

    fn render_controls(
        &self,
        field: &BrowserField,
        buttons: &[ButtonDescriptor],
    ) -> Result<ToolbarControls, PlatformError> {
        let field_id = field.field_id();
        let element: &Node = field.element().as_ref();
        let document = element
            .owner_document()
            .ok_or(PlatformError::MissingDocument)?;
        let parent = element
            .parent_node()
            .ok_or_else(|| PlatformError::Detached(field_id.to_string()))?;

        let container = create_element(&document, "div", CONTAINER_CLASS)?;
        container.set_id(&format!("container-{field_id}"));
        let toolbar = create_element(&document, "div", TOOLBAR_CLASS)?;
        toolbar.set_id(&format!("toolbar-{field_id}"));

        for descriptor in buttons {
            let button = render_button(&document, field_id, descriptor)?;
            append(&toolbar, &button)?;
        }
        append(&container, &toolbar)?;

        wrap_field(&parent, &container, element)?;

        let help = if self.show_help {
            let help = render_help(&document)?;
            append(&container, &help)?;
            Some(help)
        } else {
            None
        };

        tracing::debug!(field_id, buttons = buttons.len(), "rendered toolbar");
        Ok(ToolbarControls {
            container,
            toolbar,
            help,
        })
    }

    fn bind_handlers(
        &self,
        formatter: Formatter<BrowserField>,
        controls: &ToolbarControls,
    ) -> Result<ToolbarHandlers, PlatformError> {
        let active = Rc::new(Cell::new(true));

        let click = {
            let formatter = formatter.clone();
            let active = Rc::clone(&active);
            EventListener::new(&controls.toolbar, "click", move |event| {
                if !active.get() {
                    return;
                }
                let Some(click) = button_click_from_event(event) else {
                    return;
                };
                event.prevent_default();

                let result =
                    formatter.handle_click(&click.target_id, click.action, &mut WindowPrompt::new());
                if let Err(err) = result {
                    tracing::warn!(field_id = formatter.field_id(), %err, "toolbar action failed");
                }
            })
        };

        let keydown = self.shortcuts.then(|| {
            let element = formatter.field().element().clone();
            let active = Rc::clone(&active);
            EventListener::new(&element, "keydown", move |event| {
                if !active.get() {
                    return;
                }
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if event.is_composing() {
                    return;
                }

                let combo = keycombo_from_event(event);
                match formatter.handle_keydown(&combo, &mut WindowPrompt::new()) {
                    Ok(KeydownResult::Handled) => event.prevent_default(),
                    Ok(KeydownResult::PassThrough) => {}
                    Err(err) => {
                        event.prevent_default();
                        tracing::warn!(field_id = formatter.field_id(), %err, "shortcut failed");
                    }
                }
            })
        });

        Ok(ToolbarHandlers {
            active,
            click: Some(click),
            keydown,
        })
    }
}
