use thiserror::Error;

/// Failure reported by a browser host call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct HostError(pub String);

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        HostError(message.into())
    }
}

impl From<wasm_bindgen::JsValue> for HostError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        HostError(format!("{:?}", value))
    }
}

/// Why the popup could not read the page selection
///
/// Display gives the status line shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Not running in extension context")]
    NotExtensionContext,

    #[error("No active tab found")]
    NoActiveTab,

    #[error("Cannot access this page")]
    InjectionDenied(String),

    #[error("Failed to get selected text")]
    GenericFetchFailure(String),
}

impl FetchError {
    /// Extra explanation shown under the status line, if any
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            FetchError::NotExtensionContext => Some(
                "This app needs to run as a Chrome extension. Please load it in Chrome using the 'Load unpacked' option.",
            ),
            _ => None,
        }
    }

    /// Underlying host message, for logging
    pub fn detail(&self) -> Option<&str> {
        match self {
            FetchError::InjectionDenied(detail) | FetchError::GenericFetchFailure(detail) => {
                Some(detail)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("Failed to copy to clipboard: {0}")]
    WriteFailed(#[from] HostError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_status_lines() {
        assert_eq!(
            FetchError::NotExtensionContext.to_string(),
            "Not running in extension context"
        );
        assert_eq!(FetchError::NoActiveTab.to_string(), "No active tab found");
        assert_eq!(
            FetchError::InjectionDenied("chrome:// URL".to_string()).to_string(),
            "Cannot access this page"
        );
        assert_eq!(
            FetchError::GenericFetchFailure("boom".to_string()).to_string(),
            "Failed to get selected text"
        );
    }

    #[test]
    fn test_only_extension_context_has_hint() {
        let hint = FetchError::NotExtensionContext.hint();
        assert!(hint.is_some_and(|h| h.contains("Load unpacked")));

        assert_eq!(FetchError::NoActiveTab.hint(), None);
        assert_eq!(FetchError::InjectionDenied(String::new()).hint(), None);
        assert_eq!(FetchError::GenericFetchFailure(String::new()).hint(), None);
    }

    #[test]
    fn test_detail_carries_host_message() {
        let err = FetchError::InjectionDenied("Cannot access a chrome:// URL".to_string());
        assert_eq!(err.detail(), Some("Cannot access a chrome:// URL"));
        assert_eq!(FetchError::NoActiveTab.detail(), None);
    }

    #[test]
    fn test_clipboard_error_from_host_error() {
        let err = ClipboardError::from(HostError::new("Document is not focused"));
        let msg = err.to_string();
        assert!(msg.contains("Failed to copy"));
        assert!(msg.contains("Document is not focused"));
    }
}
