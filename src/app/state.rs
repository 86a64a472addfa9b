//! In-place editor state

use crate::types::{ColumnId, TaskId};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EditTarget {
    ColumnTitle(ColumnId),
    TaskContent(TaskId),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EditState {
    pub target: EditTarget,
    pub buffer: String,
}

impl EditState {
    pub fn new(target: EditTarget, initial: impl Into<String>) -> Self {
        Self {
            target,
            buffer: initial.into(),
        }
    }

    pub fn is_editing_column(&self, id: ColumnId) -> bool {
        self.target == EditTarget::ColumnTitle(id)
    }

    pub fn is_editing_task(&self, id: TaskId) -> bool {
        self.target == EditTarget::TaskContent(id)
    }

    /// Task content is multi-line; titles are not.
    pub fn accepts_newlines(&self) -> bool {
        matches!(self.target, EditTarget::TaskContent(_))
    }
}
