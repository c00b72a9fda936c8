/// One-shot read of the active tab's text selection

use crate::error::FetchError;
use crate::host::BrowserHost;
use crate::selection::TextAction;

/// Result of a successful fetch
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The page had a selection that is non-empty after trimming
    Captured(String),
    /// Nothing (or only whitespace) was selected
    Empty,
}

impl FetchOutcome {
    /// Store action for this outcome; an empty fetch leaves the store alone
    pub fn into_action(self) -> Option<TextAction> {
        match self {
            FetchOutcome::Captured(text) => Some(TextAction::SetSelectedText(text)),
            FetchOutcome::Empty => None,
        }
    }
}

/// Read the selection from the active tab
///
/// Steps:
/// 1. Check the extension APIs exist
/// 2. Query the active tab of the current window (must have an id)
/// 3. Inject the read-only selection function into it
///
/// Every failure is mapped into `FetchError`; nothing is retried.
pub async fn fetch_selection<H>(host: &H) -> Result<FetchOutcome, FetchError>
where
    H: BrowserHost + ?Sized,
{
    if !host.is_extension_context() {
        log::warn!("Extension APIs unavailable, cannot read selection");
        return Err(FetchError::NotExtensionContext);
    }

    let tab = match host.query_active_tab().await {
        Ok(Some(tab)) if tab.target_id().is_some() => tab,
        Ok(_) => {
            log::warn!("No active tab with an id");
            return Err(FetchError::NoActiveTab);
        }
        Err(e) => {
            log::error!("Error fetching selected text: {}", e);
            return Err(FetchError::GenericFetchFailure(e.0));
        }
    };

    let text = host.read_selection(&tab).await.map_err(|e| {
        log::error!("Script execution error: {}", e);
        FetchError::InjectionDenied(e.0)
    })?;

    if text.trim().is_empty() {
        log::debug!("No text selected in {}", tab.label());
        Ok(FetchOutcome::Empty)
    } else {
        log::debug!(
            "Captured {} characters from {}",
            text.chars().count(),
            tab.label()
        );
        Ok(FetchOutcome::Captured(text))
    }
}
