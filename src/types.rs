use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(u64);

impl ColumnId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "col-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task-{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub column_id: ColumnId,
    pub content: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Column,
    Task,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Column => "column",
            EntityKind::Task => "task",
        }
    }
}

/// Identifies a draggable or droppable entity by kind and id.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Hash)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum EntityRef {
    Column(ColumnId),
    Task(TaskId),
}

impl EntityRef {
    pub fn kind(self) -> EntityKind {
        match self {
            EntityRef::Column(_) => EntityKind::Column,
            EntityRef::Task(_) => EntityKind::Task,
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityRef::Column(id) => id.fmt(f),
            EntityRef::Task(id) => id.fmt(f),
        }
    }
}

/// By-value copy of a column or task, detached from the board.
#[derive(Debug, Clone, Serialize, Eq, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entity {
    Column(Column),
    Task(Task),
}

impl Entity {
    pub fn entity_ref(&self) -> EntityRef {
        match self {
            Entity::Column(column) => EntityRef::Column(column.id),
            Entity::Task(task) => EntityRef::Task(task.id),
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.entity_ref().kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_display_with_kind_prefix() {
        assert_eq!(ColumnId::new(3).to_string(), "col-3");
        assert_eq!(TaskId::new(12).to_string(), "task-12");
        assert_eq!(EntityRef::Task(TaskId::new(4)).to_string(), "task-4");
    }

    #[test]
    fn test_entity_ref_kind() {
        assert_eq!(EntityRef::Column(ColumnId::new(1)).kind(), EntityKind::Column);
        assert_eq!(EntityRef::Task(TaskId::new(1)).kind(), EntityKind::Task);
        assert_eq!(EntityKind::Column.as_str(), "column");
    }

    #[test]
    fn test_entity_ref_serde_shape() {
        let value = serde_json::to_value(EntityRef::Task(TaskId::new(7)))
            .expect("entity ref should serialize");
        assert_eq!(value, serde_json::json!({ "kind": "task", "id": 7 }));

        let parsed: EntityRef = serde_json::from_str(r#"{"kind":"column","id":2}"#)
            .expect("entity ref should deserialize");
        assert_eq!(parsed, EntityRef::Column(ColumnId::new(2)));
    }

    #[test]
    fn test_entity_snapshot_reference() {
        let task = Task {
            id: TaskId::new(5),
            column_id: ColumnId::new(1),
            content: "Write docs".to_string(),
        };
        let entity = Entity::Task(task);
        assert_eq!(entity.entity_ref(), EntityRef::Task(TaskId::new(5)));
        assert_eq!(entity.kind(), EntityKind::Task);
    }
}
