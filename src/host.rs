/// Browser host capabilities used by the popup

use async_trait::async_trait;
use wasm_bindgen::prelude::*;

use crate::error::HostError;
use crate::tab_data::ActiveTab;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    fn hasExtensionApis() -> bool;

    #[wasm_bindgen(catch)]
    async fn queryActiveTab() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn readSelection(tab_id: i32) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn writeClipboard(text: &str) -> Result<(), JsValue>;
}

/// What the popup needs from the browser: the active tab, a read-only
/// evaluation inside it, and the system clipboard
#[async_trait(?Send)]
pub trait BrowserHost {
    /// Whether the extension APIs exist at all
    fn is_extension_context(&self) -> bool;

    async fn query_active_tab(&self) -> Result<Option<ActiveTab>, HostError>;

    /// Run `window.getSelection().toString()` in the tab
    async fn read_selection(&self, tab: &ActiveTab) -> Result<String, HostError>;

    async fn write_clipboard(&self, text: &str) -> Result<(), HostError>;
}

/// `chrome.tabs` / `chrome.scripting` / `navigator.clipboard` through popup.js
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChromeHost;

#[async_trait(?Send)]
impl BrowserHost for ChromeHost {
    fn is_extension_context(&self) -> bool {
        hasExtensionApis()
    }

    async fn query_active_tab(&self) -> Result<Option<ActiveTab>, HostError> {
        let tab_js = queryActiveTab().await?;
        if tab_js.is_null() || tab_js.is_undefined() {
            return Ok(None);
        }

        let tab: ActiveTab = serde_wasm_bindgen::from_value(tab_js)
            .map_err(|e| HostError(format!("Failed to parse tab: {:?}", e)))?;
        Ok(Some(tab))
    }

    async fn read_selection(&self, tab: &ActiveTab) -> Result<String, HostError> {
        let tab_id = tab
            .target_id()
            .ok_or_else(|| HostError::new("Tab has no id"))?;

        let result = readSelection(tab_id).await?;
        Ok(result.as_string().unwrap_or_default())
    }

    async fn write_clipboard(&self, text: &str) -> Result<(), HostError> {
        writeClipboard(text).await?;
        Ok(())
    }
}
