use crate::board::Board;
use crate::types::{Column, Entity, EntityKind, EntityRef, Task};

/// What, if anything, is being dragged right now.
///
/// The active entity is a copy taken at drag start. It feeds the floating
/// overlay only; placement decisions always go back to the board by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragSession {
    #[default]
    Idle,
    DraggingColumn {
        active: Column,
    },
    DraggingTask {
        active: Task,
    },
}

impl DragSession {
    /// Starts a session for `source`, or stays idle when it no longer exists.
    pub fn start(board: &Board, source: EntityRef) -> Self {
        match source {
            EntityRef::Column(id) => board
                .column(id)
                .cloned()
                .map_or(Self::Idle, |active| Self::DraggingColumn { active }),
            EntityRef::Task(id) => board
                .task(id)
                .cloned()
                .map_or(Self::Idle, |active| Self::DraggingTask { active }),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn active(&self) -> Option<EntityRef> {
        match self {
            Self::Idle => None,
            Self::DraggingColumn { active } => Some(EntityRef::Column(active.id)),
            Self::DraggingTask { active } => Some(EntityRef::Task(active.id)),
        }
    }

    pub fn active_kind(&self) -> Option<EntityKind> {
        self.active().map(EntityRef::kind)
    }

    pub fn snapshot(&self) -> Option<Entity> {
        match self {
            Self::Idle => None,
            Self::DraggingColumn { active } => Some(Entity::Column(active.clone())),
            Self::DraggingTask { active } => Some(Entity::Task(active.clone())),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::Idle;
    }
}
