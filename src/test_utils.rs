/// In-memory browser host for tests

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::error::HostError;
use crate::host::BrowserHost;
use crate::tab_data::ActiveTab;

pub struct FakeHost {
    pub extension: bool,
    pub tab: Result<Option<ActiveTab>, HostError>,
    pub selection: Result<String, HostError>,
    pub clipboard_error: Option<HostError>,
    pub copied: RefCell<Vec<String>>,
    pub tab_queries: Cell<usize>,
}

impl FakeHost {
    /// Extension context with an active tab (id 1) whose page has `text` selected
    pub fn with_selection(text: &str) -> Self {
        FakeHost {
            extension: true,
            tab: Ok(Some(ActiveTab::new(1))),
            selection: Ok(text.to_string()),
            clipboard_error: None,
            copied: RefCell::new(Vec::new()),
            tab_queries: Cell::new(0),
        }
    }
}

#[async_trait(?Send)]
impl BrowserHost for FakeHost {
    fn is_extension_context(&self) -> bool {
        self.extension
    }

    async fn query_active_tab(&self) -> Result<Option<ActiveTab>, HostError> {
        self.tab_queries.set(self.tab_queries.get() + 1);
        self.tab.clone()
    }

    async fn read_selection(&self, _tab: &ActiveTab) -> Result<String, HostError> {
        self.selection.clone()
    }

    async fn write_clipboard(&self, text: &str) -> Result<(), HostError> {
        if let Some(err) = &self.clipboard_error {
            return Err(err.clone());
        }
        self.copied.borrow_mut().push(text.to_string());
        Ok(())
    }
}
