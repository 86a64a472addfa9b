//! Decides how the board changes while an entity hovers over another.

use crate::board::Board;
use crate::types::{ColumnId, EntityRef, TaskId};

/// One arrangement change. Target column and index are fixed before the
/// board is touched, so applying it is a single store call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    MoveColumn {
        from: usize,
        to: usize,
    },
    PlaceTask {
        task: TaskId,
        column: ColumnId,
        index: usize,
    },
}

impl Reconciliation {
    pub fn apply(self, board: &mut Board) -> bool {
        match self {
            Self::MoveColumn { from, to } => board.reorder_columns(from, to),
            Self::PlaceTask {
                task,
                column,
                index,
            } => board.reparent_and_reorder_task(task, column, index),
        }
    }
}

/// Computes the change for `active` hovering over `over`.
///
/// | dragged | hovering | result |
/// |---|---|---|
/// | column | another column | move to the hovered column's index |
/// | column | task / nothing | none |
/// | task | task | hovered task's column, at the hovered task's index |
/// | task | column it is not in | that column, at the end |
/// | task | its own column | none |
///
/// Hovering over itself or over ids the board no longer knows yields none.
pub fn plan(board: &Board, active: EntityRef, over: Option<EntityRef>) -> Option<Reconciliation> {
    let over = over?;
    if over == active {
        return None;
    }

    match (active, over) {
        (EntityRef::Column(dragged), EntityRef::Column(hovered)) => {
            let from = board.column_index(dragged)?;
            let to = board.column_index(hovered)?;
            Some(Reconciliation::MoveColumn { from, to })
        }
        (EntityRef::Column(_), EntityRef::Task(_)) => None,
        (EntityRef::Task(dragged), EntityRef::Task(hovered)) => {
            board.task(dragged)?;
            let (column, index) = board.task_slot(hovered)?;
            Some(Reconciliation::PlaceTask {
                task: dragged,
                column,
                index,
            })
        }
        (EntityRef::Task(dragged), EntityRef::Column(hovered)) => {
            let task = board.task(dragged)?;
            board.column(hovered)?;
            if task.column_id == hovered {
                return None;
            }
            Some(Reconciliation::PlaceTask {
                task: dragged,
                column: hovered,
                index: board.task_count_in(hovered),
            })
        }
    }
}

/// Plans and applies in one step. Returns the applied change, if the board
/// actually moved.
pub fn reconcile(
    board: &mut Board,
    active: EntityRef,
    over: Option<EntityRef>,
) -> Option<Reconciliation> {
    let change = plan(board, active, over)?;
    change.apply(board).then_some(change)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Task;

    fn ids(tasks: impl Iterator<Item = TaskId>) -> Vec<TaskId> {
        tasks.collect()
    }

    fn column_tasks(board: &Board, column: ColumnId) -> Vec<TaskId> {
        ids(board.tasks_in(column).map(|task| task.id))
    }

    #[test]
    fn column_over_column_moves_to_hovered_index() {
        let mut board = Board::new();
        let a = board.create_column();
        let b = board.create_column();
        let c = board.create_column();

        let change = reconcile(&mut board, EntityRef::Column(a), Some(EntityRef::Column(c)));

        assert_eq!(change, Some(Reconciliation::MoveColumn { from: 0, to: 2 }));
        let order: Vec<_> = board.columns().iter().map(|column| column.id).collect();
        assert_eq!(order, vec![b, c, a]);
    }

    #[test]
    fn column_over_task_or_nothing_is_noop() {
        let mut board = Board::new();
        let a = board.create_column();
        let b = board.create_column();
        let task = board.create_task(b).expect("column exists");

        assert_eq!(plan(&board, EntityRef::Column(a), Some(EntityRef::Task(task))), None);
        assert_eq!(plan(&board, EntityRef::Column(a), None), None);
    }

    #[test]
    fn task_over_task_in_same_column_reorders() {
        let mut board = Board::new();
        let column = board.create_column();
        let t: Vec<_> = (0..4)
            .map(|_| board.create_task(column).expect("column exists"))
            .collect();

        reconcile(&mut board, EntityRef::Task(t[2]), Some(EntityRef::Task(t[0])));

        assert_eq!(column_tasks(&board, column), vec![t[2], t[0], t[1], t[3]]);
    }

    #[test]
    fn task_dragged_down_lands_after_hovered_task() {
        let mut board = Board::new();
        let column = board.create_column();
        let t: Vec<_> = (0..3)
            .map(|_| board.create_task(column).expect("column exists"))
            .collect();

        reconcile(&mut board, EntityRef::Task(t[0]), Some(EntityRef::Task(t[1])));

        assert_eq!(column_tasks(&board, column), vec![t[1], t[0], t[2]]);
    }

    #[test]
    fn task_over_task_in_other_column_reparents_at_its_index() {
        let mut board = Board::new();
        let a = board.create_column();
        let b = board.create_column();
        let t1 = board.create_task(a).expect("column exists");
        let t2 = board.create_task(a).expect("column exists");
        let t3 = board.create_task(b).expect("column exists");

        let change = reconcile(&mut board, EntityRef::Task(t1), Some(EntityRef::Task(t3)));

        assert_eq!(
            change,
            Some(Reconciliation::PlaceTask {
                task: t1,
                column: b,
                index: 0
            })
        );
        assert_eq!(column_tasks(&board, a), vec![t2]);
        assert_eq!(column_tasks(&board, b), vec![t1, t3]);
    }

    #[test]
    fn task_over_empty_column_appends() {
        let mut board = Board::new();
        let a = board.create_column();
        let b = board.create_column();
        let task = board.create_task(a).expect("column exists");

        reconcile(&mut board, EntityRef::Task(task), Some(EntityRef::Column(b)));

        assert_eq!(column_tasks(&board, a), Vec::<TaskId>::new());
        assert_eq!(column_tasks(&board, b), vec![task]);
    }

    #[test]
    fn task_over_populated_column_goes_to_end() {
        let mut board = Board::new();
        let a = board.create_column();
        let b = board.create_column();
        let moving = board.create_task(a).expect("column exists");
        let first = board.create_task(b).expect("column exists");
        let second = board.create_task(b).expect("column exists");

        reconcile(&mut board, EntityRef::Task(moving), Some(EntityRef::Column(b)));

        assert_eq!(column_tasks(&board, b), vec![first, second, moving]);
    }

    #[test]
    fn task_over_its_own_column_is_noop() {
        let mut board = Board::new();
        let a = board.create_column();
        let first = board.create_task(a).expect("column exists");
        board.create_task(a).expect("column exists");

        assert_eq!(plan(&board, EntityRef::Task(first), Some(EntityRef::Column(a))), None);
    }

    #[test]
    fn hovering_itself_or_stale_ids_is_noop() {
        let mut board = Board::new();
        let a = board.create_column();
        let task = board.create_task(a).expect("column exists");
        let before: Vec<Task> = board.tasks().to_vec();

        assert_eq!(
            reconcile(&mut board, EntityRef::Task(task), Some(EntityRef::Task(task))),
            None
        );
        assert_eq!(
            reconcile(&mut board, EntityRef::Column(a), Some(EntityRef::Column(a))),
            None
        );
        assert_eq!(
            reconcile(&mut board, EntityRef::Task(TaskId::new(40)), Some(EntityRef::Column(a))),
            None
        );
        assert_eq!(
            reconcile(&mut board, EntityRef::Task(task), Some(EntityRef::Task(TaskId::new(40)))),
            None
        );
        assert_eq!(board.tasks(), before.as_slice());
    }
}
