//! Console logging through `tracing-wasm`.

use std::str::FromStr;
use std::sync::OnceLock;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{Registry, reload};
use wasm_bindgen::prelude::*;

static LEVEL: OnceLock<reload::Handle<LevelFilter, Registry>> = OnceLock::new();

fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    }
}

/// Set the global subscriber. Later calls are no-ops.
pub(crate) fn install() {
    if LEVEL.get().is_some() {
        return;
    }

    let (filter, handle) = reload::Layer::new(default_level());
    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(tracing::Level::TRACE)
            .build(),
    );
    let reg = Registry::default().with(filter).with(wasm_layer);

    if tracing::subscriber::set_global_default(reg).is_ok() {
        let _ = LEVEL.set(handle);
    }
}

/// Change the console log level: `trace`, `debug`, `info`, `warn`, `error`
/// or `off`.
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> Result<(), JsError> {
    let level = LevelFilter::from_str(level)
        .map_err(|_| JsError::new(&format!("Invalid log level: {level}")))?;
    let handle = LEVEL
        .get()
        .ok_or_else(|| JsError::new("Logging is not initialized"))?;
    handle
        .reload(level)
        .map_err(|e| JsError::new(&format!("Could not set log level: {e}")))?;
    tracing::debug!(%level, "log level changed");
    Ok(())
}
