//! Item Edit State
//!
//! Per-row view/edit toggle. The draft only exists while editing and reaches
//! the store solely through [`ItemEditState::save`].

use crate::models::{is_valid_title, TodoRecord};

/// Working copy of a record's editable fields
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditDraft {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ItemEditState {
    #[default]
    Viewing,
    Editing(EditDraft),
}

impl ItemEditState {
    pub fn is_editing(&self) -> bool {
        matches!(self, ItemEditState::Editing(_))
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        match self {
            ItemEditState::Editing(draft) => Some(draft),
            ItemEditState::Viewing => None,
        }
    }

    /// Enter edit mode with a draft seeded from `record`
    pub fn begin_edit(&mut self, record: &TodoRecord) {
        *self = ItemEditState::Editing(EditDraft {
            title: record.title.clone(),
            description: record.description_text().to_string(),
        });
    }

    /// No-op while viewing
    pub fn set_title(&mut self, title: String) {
        if let ItemEditState::Editing(draft) = self {
            draft.title = title;
        }
    }

    /// No-op while viewing
    pub fn set_description(&mut self, description: String) {
        if let ItemEditState::Editing(draft) = self {
            draft.description = description;
        }
    }

    /// Merge the draft into a copy of `record` and go back to viewing.
    ///
    /// Returns the record to hand to `TodoStore::update`. `None` when not
    /// editing, or when the draft title is empty (the draft is kept).
    pub fn save(&mut self, record: &TodoRecord) -> Option<TodoRecord> {
        let draft = self.draft()?;
        if !is_valid_title(&draft.title) {
            return None;
        }
        let merged = TodoRecord {
            title: draft.title.clone(),
            description: Some(draft.description.clone()),
            ..record.clone()
        };
        *self = ItemEditState::Viewing;
        Some(merged)
    }

    /// Discard the draft
    pub fn cancel(&mut self) {
        *self = ItemEditState::Viewing;
    }
}

/// Copy of `record` with completion flipped; bypasses any draft
pub fn toggled(record: &TodoRecord) -> TodoRecord {
    TodoRecord {
        completed: !record.completed,
        ..record.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> TodoRecord {
        TodoRecord {
            id: 4,
            title: "Buy milk".to_string(),
            description: None,
            completed: true,
            due_date: Some("2023-12-31T23:59:59Z".to_string()),
            created_at: Some("2023-01-01T00:00:00Z".to_string()),
        }
    }

    #[test]
    fn test_begin_edit_seeds_draft() {
        let mut state = ItemEditState::default();
        assert!(!state.is_editing());

        state.begin_edit(&record());

        assert_eq!(
            state.draft(),
            Some(&EditDraft {
                title: "Buy milk".to_string(),
                description: String::new(),
            })
        );
    }

    #[test]
    fn test_save_merges_draft_and_keeps_server_fields() {
        let original = record();
        let mut state = ItemEditState::default();
        state.begin_edit(&original);
        state.set_title("Buy oat milk".to_string());
        state.set_description("2 litres".to_string());

        let merged = state.save(&original).unwrap();

        assert_eq!(state, ItemEditState::Viewing);
        assert_eq!(merged.title, "Buy oat milk");
        assert_eq!(merged.description.as_deref(), Some("2 litres"));
        assert_eq!(merged.id, original.id);
        assert_eq!(merged.completed, original.completed);
        assert_eq!(merged.due_date, original.due_date);
        assert_eq!(merged.created_at, original.created_at);
    }

    #[test]
    fn test_cancel_discards_draft() {
        let original = record();
        let mut state = ItemEditState::default();
        state.begin_edit(&original);
        state.set_title("something else".to_string());

        state.cancel();

        assert_eq!(state, ItemEditState::Viewing);
        assert_eq!(state.save(&original), None);
        assert_eq!(original, record());
    }

    #[test]
    fn test_save_refuses_empty_title() {
        let mut state = ItemEditState::default();
        state.begin_edit(&record());
        state.set_title("  ".to_string());

        assert_eq!(state.save(&record()), None);
        assert!(state.is_editing());
    }

    #[test]
    fn test_setters_ignored_while_viewing() {
        let mut state = ItemEditState::Viewing;
        state.set_title("x".to_string());
        state.set_description("y".to_string());
        assert_eq!(state, ItemEditState::Viewing);
    }

    #[test]
    fn test_toggled_only_flips_completion() {
        let original = record();
        let flipped = toggled(&original);
        assert!(!flipped.completed);
        assert_eq!(TodoRecord { completed: true, ..flipped }, original);
    }
}
