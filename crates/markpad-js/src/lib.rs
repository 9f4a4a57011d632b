//! WASM bindings for the markpad formatting toolbar.
//!
//! Host pages load the module and call `initMarkdownToolbars()` once the
//! document is ready, or attach to individual fields with
//! `new MarkdownToolbar(field, options)`.

mod logging;
mod toolbar;
mod types;

pub use logging::*;
pub use toolbar::*;
pub use types::*;

use wasm_bindgen::prelude::*;

/// Install the panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    logging::install();
}
