//! Platform detection for the primary shortcut modifier.
//!
//! Apple platforms use Cmd where everyone else uses Ctrl.

use std::sync::OnceLock;

/// Cached platform detection results.
#[derive(Debug, Clone, Default)]
pub struct Platform {
    pub ios: bool,
    pub mac: bool,
}

impl Platform {
    /// Whether Cmd (meta) is the primary shortcut modifier.
    pub fn primary_is_meta(&self) -> bool {
        self.mac || self.ios
    }
}

static PLATFORM: OnceLock<Platform> = OnceLock::new();

/// Get cached platform info. Detection runs once on first call.
pub fn platform() -> &'static Platform {
    PLATFORM.get_or_init(detect_platform)
}

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
fn detect_platform() -> Platform {
    let Some(window) = web_sys::window() else {
        return Platform::default();
    };

    let navigator = window.navigator();
    let user_agent = navigator.user_agent().unwrap_or_default().to_lowercase();
    let platform_str = navigator.platform().unwrap_or_default().to_lowercase();

    // iPadOS reports a Mac platform, so check for touch too.
    let ios = user_agent.contains("iphone")
        || user_agent.contains("ipad")
        || user_agent.contains("ipod")
        || (platform_str.contains("mac") && navigator.max_touch_points() > 0);

    let mac = platform_str.contains("mac") && !ios;

    tracing::debug!(mac, ios, "detected platform");
    Platform { ios, mac }
}

#[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
fn detect_platform() -> Platform {
    Platform::default()
}
