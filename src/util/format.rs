//! Display formatting helpers and the clipboard bridge.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Mask a license key for display. Alphanumerics become `*`; separators
/// stay visible so the key's shape is still recognizable.
pub fn mask_key(key: &str) -> String {
    key.chars()
        .map(|c| if c.is_ascii_alphanumeric() { '*' } else { c })
        .collect()
}

/// Date portion of an RFC 3339 timestamp, for compact display.
pub fn display_date(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

/// Copy text to the system clipboard. Fire-and-forget; clipboard access
/// requires a browser environment.
pub fn copy_to_clipboard(text: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().clipboard().write_text(text);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
    }
}
