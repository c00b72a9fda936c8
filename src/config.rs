/// Compile-time settings for the Text Selector popup

/// Maximum number of past selections kept in history
pub const HISTORY_LIMIT: usize = 10;

/// Characters shown for a history entry before it is cut with "..."
pub const PREVIEW_CHARS: usize = 60;

/// How long the "Copied!" label stays up after a copy, in milliseconds
pub const COPIED_FEEDBACK_MS: i32 = 2000;

/// Console log level used by the popup
pub const LOG_LEVEL: log::Level = log::Level::Info;

pub const APP_NAME: &str = "Text Selector";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Footer line, e.g. "Text Selector v0.1.0"
pub fn version_label() -> String {
    format!("{} v{}", APP_NAME, APP_VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_label() {
        let label = version_label();
        assert!(label.starts_with("Text Selector v"));
        assert!(label.ends_with(APP_VERSION));
    }
}
