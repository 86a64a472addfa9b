use crate::types::{ColumnId, TaskId};

/// Hands out session-unique identifiers. Counters only move forward, so an
/// id is never handed out twice even after its entity is deleted.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last_column: u64,
    last_task: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_column_id(&mut self) -> ColumnId {
        self.last_column += 1;
        ColumnId::new(self.last_column)
    }

    pub fn next_task_id(&mut self) -> TaskId {
        self.last_task += 1;
        TaskId::new(self.last_task)
    }
}
