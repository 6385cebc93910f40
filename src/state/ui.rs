//! Layout chrome state: sidebar collapse and the header's page title.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub sidebar_collapsed: bool,
    pub page_title: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_collapsed: false,
            page_title: "Dashboard".to_owned(),
        }
    }
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }
}
