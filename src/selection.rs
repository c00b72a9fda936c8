/// Selection state and its reducer
use std::collections::VecDeque;
use std::rc::Rc;

use yew::Reducible;

use crate::config::{HISTORY_LIMIT, PREVIEW_CHARS};

/// Actions accepted by the selection reducer
#[derive(Debug, Clone, PartialEq)]
pub enum TextAction {
    /// Capture a new selection and record it in history
    SetSelectedText(String),
    ClearSelectedText,
    ClearHistory,
    /// Show a history entry again without touching the history order
    RecallHistory(usize),
}

/// Current selection plus a bounded history of past selections (most recent last)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub selected_text: String,
    pub history: VecDeque<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action in place, returning whether anything changed
    pub fn apply(&mut self, action: TextAction) -> bool {
        match action {
            TextAction::SetSelectedText(text) => self.set_selected_text(text),
            TextAction::ClearSelectedText => {
                if self.selected_text.is_empty() {
                    return false;
                }
                self.selected_text.clear();
                true
            }
            TextAction::ClearHistory => {
                if self.history.is_empty() {
                    return false;
                }
                self.history.clear();
                true
            }
            TextAction::RecallHistory(index) => match self.history.get(index) {
                Some(entry) if *entry != self.selected_text => {
                    self.selected_text = entry.clone();
                    true
                }
                _ => false,
            },
        }
    }

    fn set_selected_text(&mut self, text: String) -> bool {
        if text.trim().is_empty() {
            return false;
        }

        let changed_text = self.selected_text != text;

        if self.history.back() == Some(&text) {
            self.selected_text = text;
            return changed_text;
        }

        self.selected_text = text.clone();
        self.history.push_back(text);
        while self.history.len() > HISTORY_LIMIT {
            self.history.pop_front();
        }
        true
    }

    /// History entries paired with their index, most recent first
    pub fn history_newest_first(&self) -> impl Iterator<Item = (usize, &String)> {
        self.history.iter().enumerate().rev()
    }
}

impl Reducible for SelectionState {
    type Action = TextAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Label for a history entry: long texts are cut to PREVIEW_CHARS characters plus "..."
pub fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
