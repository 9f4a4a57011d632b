//! URL prompt backed by `window.prompt`.

use markpad_core::UrlPrompt;
use web_sys::Window;

/// Blocking `window.prompt` dialog.
#[derive(Debug, Clone)]
pub struct WindowPrompt {
    window: Option<Window>,
}

impl WindowPrompt {
    pub fn new() -> Self {
        Self {
            window: web_sys::window(),
        }
    }
}

impl Default for WindowPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlPrompt for WindowPrompt {
    fn prompt_url(&mut self, message: &str) -> Option<String> {
        let window = self.window.as_ref()?;
        match window.prompt_with_message(message) {
            Ok(answer) => answer,
            Err(err) => {
                tracing::warn!(error = ?err, "window.prompt failed");
                None
            }
        }
    }
}
