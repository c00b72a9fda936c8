/// Copying the captured selection to the system clipboard

use crate::error::ClipboardError;
use crate::host::BrowserHost;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// Nothing captured, the clipboard was not touched
    Skipped,
}

pub async fn copy_selection<H>(host: &H, text: &str) -> Result<CopyOutcome, ClipboardError>
where
    H: BrowserHost + ?Sized,
{
    if text.is_empty() {
        return Ok(CopyOutcome::Skipped);
    }

    host.write_clipboard(text).await?;
    log::debug!("Copied {} characters to clipboard", text.chars().count());
    Ok(CopyOutcome::Copied)
}
