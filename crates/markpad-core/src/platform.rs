//! Platform abstraction traits for attaching a formatter to a UI.
//!
//! These traits define the interface between the formatting logic and
//! platform-specific implementations (browser DOM, tests, native UI). The
//! same `Formatter` works across all of them.

use crate::formatter::Formatter;
use crate::toolbar::ButtonDescriptor;
use crate::types::Selection;

/// Error type for platform operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    /// The field has no parent to host the toolbar.
    #[error("field `{0}` is not attached to a parent node")]
    Detached(String),
    /// The field has no id, so its toolbar can't be told apart from others.
    #[error("field has no id")]
    MissingId,
    /// The field already carries a toolbar.
    #[error("field `{0}` already has a toolbar")]
    AlreadyAttached(String),
    /// No window/document to work with.
    #[error("no document available")]
    MissingDocument,
    /// A host UI call failed.
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<&str> for PlatformError {
    fn from(s: &str) -> Self {
        PlatformError::Dom(s.to_string())
    }
}

impl From<String> for PlatformError {
    fn from(s: String) -> Self {
        PlatformError::Dom(s)
    }
}

/// A single editable text field on the host.
///
/// Offsets crossing this boundary are char offsets. Implementations convert
/// from whatever unit the platform uses (UTF-16 in browsers).
pub trait FieldPlatform {
    /// Stable identifier of the field, used to scope toolbar clicks.
    fn field_id(&self) -> &str;

    /// Current full text content.
    fn value(&self) -> String;

    /// Current selection in char offsets.
    fn selection(&self) -> Selection;

    /// Replace the full text content.
    fn set_value(&self, value: &str) -> Result<(), PlatformError>;

    /// Move the selection (char offsets into the current value).
    fn set_selection(&self, selection: Selection) -> Result<(), PlatformError>;

    /// Give the field input focus.
    fn focus(&self) -> Result<(), PlatformError>;

    /// Whether the field currently holds input focus.
    fn has_focus(&self) -> bool;

    /// Called once an applied action has finished updating the field.
    fn changed(&self) {}
}

/// Renders toolbar controls for a field and wires them to a formatter.
///
/// One implementation instance per field; nothing is shared between fields.
pub trait ToolbarPlatform {
    type Field: FieldPlatform;
    /// Handle to the rendered controls.
    type Controls;
    /// Guard that keeps event handlers alive. Dropping it unbinds them.
    type Handlers;

    /// Build the control surface next to the field.
    fn render_controls(
        &self,
        field: &Self::Field,
        buttons: &[ButtonDescriptor],
    ) -> Result<Self::Controls, PlatformError>;

    /// Connect click and shortcut handling to the formatter.
    fn bind_handlers(
        &self,
        formatter: Formatter<Self::Field>,
        controls: &Self::Controls,
    ) -> Result<Self::Handlers, PlatformError>;
}
