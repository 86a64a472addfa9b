//! Read-only render model derived from the board and the drag session.

use std::collections::HashMap;

use crate::board::Board;
use crate::drag::DragSession;
use crate::types::{Column, ColumnId, Task, TaskId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView<'a> {
    pub columns: Vec<ColumnView<'a>>,
    pub overlay: Option<Overlay<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView<'a> {
    pub column: &'a Column,
    pub tasks: Vec<TaskSlot<'a>>,
    /// The column is being dragged; render a ghost in its slot.
    pub placeholder: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSlot<'a> {
    pub task: &'a Task,
    pub placeholder: bool,
}

/// Full-fidelity copy of the dragged entity that follows the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay<'a> {
    Column {
        column: &'a Column,
        tasks: Vec<&'a Task>,
    },
    Task(&'a Task),
}

pub fn project<'a>(board: &'a Board, session: &'a DragSession) -> BoardView<'a> {
    let (ghost_column, ghost_task) = match session {
        DragSession::Idle => (None, None),
        DragSession::DraggingColumn { active } => (Some(active.id), None),
        DragSession::DraggingTask { active } => (None, Some(active.id)),
    };

    let mut by_column: HashMap<ColumnId, Vec<TaskSlot<'a>>> = HashMap::new();
    for task in board.tasks() {
        by_column.entry(task.column_id).or_default().push(TaskSlot {
            task,
            placeholder: ghost_task == Some(task.id),
        });
    }

    let columns = board
        .columns()
        .iter()
        .map(|column| ColumnView {
            column,
            tasks: by_column.remove(&column.id).unwrap_or_default(),
            placeholder: ghost_column == Some(column.id),
        })
        .collect();

    let overlay = match session {
        DragSession::Idle => None,
        DragSession::DraggingColumn { active } => Some(Overlay::Column {
            column: active,
            tasks: board.tasks_in(active.id).collect(),
        }),
        DragSession::DraggingTask { active } => Some(Overlay::Task(active)),
    };

    BoardView { columns, overlay }
}

impl<'a> BoardView<'a> {
    pub fn column(&self, id: ColumnId) -> Option<&ColumnView<'a>> {
        self.columns.iter().find(|view| view.column.id == id)
    }

    pub fn task_ids(&self, id: ColumnId) -> Vec<TaskId> {
        self.column(id)
            .map(|view| view.tasks.iter().map(|slot| slot.task.id).collect())
            .unwrap_or_default()
    }

    pub fn is_dragging(&self) -> bool {
        self.overlay.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntityRef;

    #[test]
    fn test_projection_groups_tasks_by_column_in_backing_order() {
        let mut board = Board::new();
        let a = board.create_column();
        let b = board.create_column();
        let t1 = board.create_task(a).expect("column exists");
        let t2 = board.create_task(b).expect("column exists");
        let t3 = board.create_task(a).expect("column exists");
        let session = DragSession::Idle;

        let view = project(&board, &session);

        assert_eq!(view.columns.len(), 2);
        assert_eq!(view.task_ids(a), vec![t1, t3]);
        assert_eq!(view.task_ids(b), vec![t2]);
        assert!(view.overlay.is_none());
        assert!(!view.is_dragging());
    }

    #[test]
    fn test_dragged_task_is_ghosted_and_overlaid() {
        let mut board = Board::new();
        let a = board.create_column();
        let t1 = board.create_task(a).expect("column exists");
        let t2 = board.create_task(a).expect("column exists");
        let session = DragSession::start(&board, EntityRef::Task(t2));

        let view = project(&board, &session);
        let column = view.column(a).expect("column is projected");

        assert!(!column.tasks[0].placeholder);
        assert!(column.tasks[1].placeholder);
        assert_eq!(column.tasks[0].task.id, t1);
        assert!(matches!(view.overlay, Some(Overlay::Task(task)) if task.id == t2));
    }

    #[test]
    fn test_dragged_column_overlay_carries_its_tasks() {
        let mut board = Board::new();
        let a = board.create_column();
        let b = board.create_column();
        let task = board.create_task(a).expect("column exists");
        let session = DragSession::start(&board, EntityRef::Column(a));

        let view = project(&board, &session);

        assert!(view.column(a).is_some_and(|column| column.placeholder));
        assert!(view.column(b).is_some_and(|column| !column.placeholder));
        match view.overlay {
            Some(Overlay::Column { column, tasks }) => {
                assert_eq!(column.id, a);
                assert_eq!(tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![task]);
            }
            other => panic!("unexpected overlay: {other:?}"),
        }
    }

    #[test]
    fn test_clearing_session_removes_overlay() {
        let mut board = Board::new();
        let a = board.create_column();
        let mut session = DragSession::start(&board, EntityRef::Column(a));
        session.clear();

        let view = project(&board, &session);

        assert!(view.overlay.is_none());
        assert!(view.columns.iter().all(|column| !column.placeholder));
    }
}
