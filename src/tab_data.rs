/// Data structures for browser tabs as seen by the popup
use serde::Deserialize;

/// The active tab returned by `chrome.tabs.query`
///
/// Only the fields the popup reads are kept; anything else on the host
/// object is ignored during deserialization.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ActiveTab {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl ActiveTab {
    pub fn new(id: i32) -> ActiveTab {
        ActiveTab {
            id: Some(id),
            ..ActiveTab::default()
        }
    }

    /// Tab id usable as a script-injection target
    pub fn target_id(&self) -> Option<i32> {
        self.id
    }

    /// Short name for log lines: title, then url, then a placeholder
    pub fn label(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .or(self.url.as_deref())
            .unwrap_or("active tab")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_tab_creation() {
        let tab = ActiveTab::new(7);

        assert_eq!(tab.target_id(), Some(7));
        assert_eq!(tab.url, None);
        assert_eq!(tab.title, None);
        assert_eq!(tab.label(), "active tab");
    }

    #[test]
    fn test_deserialize_chrome_tab() {
        let json = r#"{
            "id": 42,
            "index": 3,
            "url": "https://example.com/article",
            "title": "Example",
            "pinned": false,
            "active": true
        }"#;

        let tab: ActiveTab = serde_json::from_str(json).unwrap();

        assert_eq!(tab.target_id(), Some(42));
        assert_eq!(tab.url.as_deref(), Some("https://example.com/article"));
        assert_eq!(tab.title.as_deref(), Some("Example"));
        assert_eq!(tab.label(), "Example");
    }

    #[test]
    fn test_deserialize_tab_without_id() {
        let tab: ActiveTab = serde_json::from_str(r#"{"url": "devtools://devtools"}"#).unwrap();

        assert_eq!(tab.target_id(), None);
        assert_eq!(tab.url.as_deref(), Some("devtools://devtools"));
        assert_eq!(tab.title, None);
        assert_eq!(tab.label(), "devtools://devtools");
    }
}
