//! Single entry point for every board mutation.

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::board::Board;
use crate::drag::{DragSession, reconcile};
use crate::projection::{BoardView, project};
use crate::types::{ColumnId, EntityRef, TaskId};

/// Everything the presentation layer can ask the engine to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Intent {
    AddColumn,
    DeleteColumn {
        id: ColumnId,
    },
    RenameColumn {
        id: ColumnId,
        title: String,
    },
    AddTask {
        column: ColumnId,
    },
    DeleteTask {
        id: TaskId,
    },
    EditTask {
        id: TaskId,
        content: String,
    },
    DragStart {
        source: EntityRef,
    },
    DragOver {
        #[serde(default)]
        target: Option<EntityRef>,
    },
    DragEnd {
        #[serde(default)]
        target: Option<EntityRef>,
    },
    DragCancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created(EntityRef),
    Changed,
    Unchanged,
}

impl Outcome {
    fn from_changed(changed: bool) -> Self {
        if changed {
            Self::Changed
        } else {
            Self::Unchanged
        }
    }

    pub fn is_visible(self) -> bool {
        self != Self::Unchanged
    }
}

#[derive(Debug, Default, Clone)]
pub struct Engine {
    board: Board,
    session: DragSession,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn view(&self) -> BoardView<'_> {
        project(&self.board, &self.session)
    }

    pub fn dispatch(&mut self, intent: Intent) -> Outcome {
        match intent {
            Intent::AddColumn => Outcome::Created(EntityRef::Column(self.board.create_column())),
            Intent::DeleteColumn { id } => Outcome::from_changed(self.board.delete_column(id)),
            Intent::RenameColumn { id, title } => {
                Outcome::from_changed(self.board.rename_column(id, title))
            }
            Intent::AddTask { column } => match self.board.create_task(column) {
                Ok(id) => Outcome::Created(EntityRef::Task(id)),
                Err(err) => {
                    error!(error = %err, "task creation requested for a column that is not shown");
                    if cfg!(debug_assertions) {
                        panic!("{err}");
                    }
                    Outcome::Unchanged
                }
            },
            Intent::DeleteTask { id } => Outcome::from_changed(self.board.delete_task(id)),
            Intent::EditTask { id, content } => {
                Outcome::from_changed(self.board.edit_task_content(id, content))
            }
            Intent::DragStart { source } => self.drag_start(source),
            Intent::DragOver { target } => self.drag_over(target),
            Intent::DragEnd { target } => self.drag_end(target),
            Intent::DragCancel => self.drag_cancel(),
        }
    }

    fn drag_start(&mut self, source: EntityRef) -> Outcome {
        if let Some(previous) = self.session.active() {
            debug!(previous = %previous, "drag start replaces an unfinished drag");
        }
        self.session = DragSession::start(&self.board, source);
        if self.session.is_idle() {
            debug!(source = %source, "drag start ignored for unknown entity");
            return Outcome::Unchanged;
        }
        debug!(source = %source, kind = source.kind().as_str(), "drag started");
        Outcome::Changed
    }

    fn drag_over(&mut self, target: Option<EntityRef>) -> Outcome {
        let Some(active) = self.session.active() else {
            return Outcome::Unchanged;
        };
        match reconcile(&mut self.board, active, target) {
            Some(change) => {
                debug!(active = %active, ?target, ?change, "drag reconciled");
                Outcome::Changed
            }
            None => Outcome::Unchanged,
        }
    }

    fn drag_end(&mut self, target: Option<EntityRef>) -> Outcome {
        let Some(active) = self.session.active() else {
            return Outcome::Unchanged;
        };
        if let Some(change) = reconcile(&mut self.board, active, target) {
            debug!(active = %active, ?target, ?change, "drop reconciled");
        }
        self.session.clear();
        debug!(active = %active, "drag ended");
        Outcome::Changed
    }

    fn drag_cancel(&mut self) -> Outcome {
        let Some(active) = self.session.active() else {
            return Outcome::Unchanged;
        };
        self.session.clear();
        debug!(active = %active, "drag cancelled");
        Outcome::Changed
    }
}
