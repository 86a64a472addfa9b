//! Ordered column and task collections

pub mod error;
pub mod sequence;

use tracing::debug;

use crate::ids::IdGenerator;
use crate::types::{Column, ColumnId, Task, TaskId};

pub use self::error::{BoardError, Result};
use self::sequence::move_item;

/// Owns the column sequence and the task sequence.
///
/// Display order is the vector order. A task's order within its column is
/// its relative position among the tasks sharing its `column_id`.
#[derive(Debug, Default, Clone)]
pub struct Board {
    columns: Vec<Column>,
    tasks: Vec<Task>,
    ids: IdGenerator,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == id)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn column_index(&self, id: ColumnId) -> Option<usize> {
        self.columns.iter().position(|column| column.id == id)
    }

    fn task_index(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    pub fn tasks_in(&self, column_id: ColumnId) -> impl Iterator<Item = &Task> + '_ {
        self.tasks
            .iter()
            .filter(move |task| task.column_id == column_id)
    }

    pub fn task_count_in(&self, column_id: ColumnId) -> usize {
        self.tasks_in(column_id).count()
    }

    /// Column and index within that column of the given task.
    pub fn task_slot(&self, id: TaskId) -> Option<(ColumnId, usize)> {
        let global = self.task_index(id)?;
        let column_id = self.tasks[global].column_id;
        let index = self.tasks[..global]
            .iter()
            .filter(|task| task.column_id == column_id)
            .count();
        Some((column_id, index))
    }

    pub fn create_column(&mut self) -> ColumnId {
        let id = self.ids.next_column_id();
        let title = format!("Column {}", self.columns.len() + 1);
        debug!(column = %id, title = %title, "column created");
        self.columns.push(Column { id, title });
        id
    }

    /// Removes the column together with every task it owns.
    pub fn delete_column(&mut self, id: ColumnId) -> bool {
        let Some(index) = self.column_index(id) else {
            debug!(column = %id, "delete ignored for unknown column");
            return false;
        };
        self.columns.remove(index);
        let before = self.tasks.len();
        self.tasks.retain(|task| task.column_id != id);
        debug!(
            column = %id,
            removed_tasks = before - self.tasks.len(),
            "column deleted"
        );
        true
    }

    pub fn rename_column(&mut self, id: ColumnId, title: impl Into<String>) -> bool {
        let Some(column) = self.columns.iter_mut().find(|column| column.id == id) else {
            debug!(column = %id, "rename ignored for unknown column");
            return false;
        };
        column.title = title.into();
        true
    }

    pub fn create_task(&mut self, column_id: ColumnId) -> Result<TaskId> {
        if self.column(column_id).is_none() {
            return Err(BoardError::MissingParent { column: column_id });
        }
        let id = self.ids.next_task_id();
        let content = format!("Task {}", self.tasks.len() + 1);
        debug!(task = %id, column = %column_id, "task created");
        self.tasks.push(Task {
            id,
            column_id,
            content,
        });
        Ok(id)
    }

    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let Some(index) = self.task_index(id) else {
            debug!(task = %id, "delete ignored for unknown task");
            return false;
        };
        self.tasks.remove(index);
        debug!(task = %id, "task deleted");
        true
    }

    pub fn edit_task_content(&mut self, id: TaskId, content: impl Into<String>) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!(task = %id, "edit ignored for unknown task");
            return false;
        };
        task.content = content.into();
        true
    }

    pub fn reorder_columns(&mut self, from: usize, to: usize) -> bool {
        let moved = move_item(&mut self.columns, from, to);
        if moved {
            debug!(from, to, "columns reordered");
        }
        moved
    }

    /// Moves a task into `column_id` at `index` of that column's task list,
    /// measured after the task itself has been taken out. Column membership
    /// and position change in the same call.
    pub fn reparent_and_reorder_task(
        &mut self,
        task_id: TaskId,
        column_id: ColumnId,
        index: usize,
    ) -> bool {
        if self.column(column_id).is_none() {
            debug!(task = %task_id, column = %column_id, "reparent ignored for unknown column");
            return false;
        }
        let Some((current_column, current_index)) = self.task_slot(task_id) else {
            debug!(task = %task_id, "reparent ignored for unknown task");
            return false;
        };
        if current_column == column_id {
            let last = self.task_count_in(column_id).saturating_sub(1);
            if index.min(last) == current_index {
                return false;
            }
        }

        let Some(from) = self.task_index(task_id) else {
            return false;
        };
        let mut task = self.tasks.remove(from);
        task.column_id = column_id;
        let to = self.insertion_point(column_id, index);
        self.tasks.insert(to, task);

        debug!(
            task = %task_id,
            from_column = %current_column,
            to_column = %column_id,
            index,
            "task placed"
        );
        true
    }

    /// Global position in front of the `index`-th task of `column_id`, or just
    /// past its last task when `index` runs off the end. An empty column
    /// places at the end of the sequence.
    fn insertion_point(&self, column_id: ColumnId, index: usize) -> usize {
        let mut seen = 0;
        let mut after_last = None;
        for (position, task) in self.tasks.iter().enumerate() {
            if task.column_id != column_id {
                continue;
            }
            if seen == index {
                return position;
            }
            seen += 1;
            after_last = Some(position + 1);
        }
        after_last.unwrap_or(self.tasks.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_tasks(board: &Board, column: ColumnId) -> Vec<TaskId> {
        board.tasks_in(column).map(|task| task.id).collect()
    }

    fn board_with_tasks(per_column: &[usize]) -> (Board, Vec<ColumnId>, Vec<Vec<TaskId>>) {
        let mut board = Board::new();
        let mut columns = Vec::new();
        let mut tasks = Vec::new();
        for &count in per_column {
            let column = board.create_column();
            let ids = (0..count)
                .map(|_| board.create_task(column).expect("column exists"))
                .collect();
            columns.push(column);
            tasks.push(ids);
        }
        (board, columns, tasks)
    }

    #[test]
    fn test_create_column_appends_with_numbered_title() {
        let mut board = Board::new();
        let first = board.create_column();
        let second = board.create_column();

        assert_eq!(board.columns().len(), 2);
        assert_eq!(board.columns()[0].id, first);
        assert_eq!(board.columns()[1].id, second);
        assert_eq!(board.columns()[0].title, "Column 1");
        assert_eq!(board.columns()[1].title, "Column 2");
    }

    #[test]
    fn test_create_task_appends_within_column() {
        let (board, columns, tasks) = board_with_tasks(&[2, 1]);
        assert_eq!(column_tasks(&board, columns[0]), tasks[0]);
        assert_eq!(column_tasks(&board, columns[1]), tasks[1]);
        assert_eq!(board.tasks()[2].content, "Task 3");
    }

    #[test]
    fn test_create_task_under_missing_column_fails() {
        let mut board = Board::new();
        let column = board.create_column();
        board.delete_column(column);

        let err = board.create_task(column).expect_err("parent is gone");
        assert_eq!(err, BoardError::MissingParent { column });
        assert!(err.to_string().contains("missing parent"));
        assert!(board.tasks().is_empty());
    }

    #[test]
    fn test_delete_column_cascades_only_its_tasks() {
        let (mut board, columns, tasks) = board_with_tasks(&[2, 0, 3]);

        assert!(board.delete_column(columns[0]));

        assert_eq!(board.columns().len(), 2);
        assert_eq!(board.tasks().len(), 3);
        assert_eq!(column_tasks(&board, columns[2]), tasks[2]);
        assert!(
            board
                .tasks()
                .iter()
                .all(|task| board.column(task.column_id).is_some())
        );
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut board = Board::new();
        let first = board.create_column();
        board.delete_column(first);
        let second = board.create_column();
        assert_ne!(first, second);
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let (mut board, columns, tasks) = board_with_tasks(&[1]);
        let before_columns = board.columns().to_vec();
        let before_tasks = board.tasks().to_vec();

        assert!(!board.delete_column(ColumnId::new(99)));
        assert!(!board.rename_column(ColumnId::new(99), "nope"));
        assert!(!board.delete_task(TaskId::new(99)));
        assert!(!board.edit_task_content(TaskId::new(99), "nope"));
        assert!(!board.reparent_and_reorder_task(TaskId::new(99), columns[0], 0));
        assert!(!board.reparent_and_reorder_task(tasks[0][0], ColumnId::new(99), 0));

        assert_eq!(board.columns(), before_columns.as_slice());
        assert_eq!(board.tasks(), before_tasks.as_slice());
    }

    #[test]
    fn test_rename_and_edit_keep_position() {
        let (mut board, columns, tasks) = board_with_tasks(&[2, 0]);

        assert!(board.rename_column(columns[1], "Done"));
        assert!(board.edit_task_content(tasks[0][0], "Ship it"));

        assert_eq!(board.columns()[1].title, "Done");
        assert_eq!(board.columns()[1].id, columns[1]);
        assert_eq!(board.tasks()[0].content, "Ship it");
        assert_eq!(board.tasks()[0].id, tasks[0][0]);
    }

    #[test]
    fn test_reorder_columns_splice_move() {
        let (mut board, columns, _) = board_with_tasks(&[0, 0, 0]);

        assert!(board.reorder_columns(0, 2));
        let order: Vec<_> = board.columns().iter().map(|column| column.id).collect();
        assert_eq!(order, vec![columns[1], columns[2], columns[0]]);

        assert!(!board.reorder_columns(7, 0));
        assert!(!board.reorder_columns(2, 99));

        assert!(board.reorder_columns(0, 99));
        let order: Vec<_> = board.columns().iter().map(|column| column.id).collect();
        assert_eq!(order, vec![columns[2], columns[0], columns[1]]);
    }

    #[test]
    fn test_same_column_move_is_pure_move() {
        let (mut board, columns, tasks) = board_with_tasks(&[4]);
        let t = &tasks[0];

        assert!(board.reparent_and_reorder_task(t[2], columns[0], 0));

        assert_eq!(column_tasks(&board, columns[0]), vec![t[2], t[0], t[1], t[3]]);
    }

    #[test]
    fn test_cross_column_move_inserts_at_index() {
        let (mut board, columns, tasks) = board_with_tasks(&[2, 1]);
        let (t1, t2, t3) = (tasks[0][0], tasks[0][1], tasks[1][0]);

        assert!(board.reparent_and_reorder_task(t1, columns[1], 0));

        assert_eq!(column_tasks(&board, columns[0]), vec![t2]);
        assert_eq!(column_tasks(&board, columns[1]), vec![t1, t3]);
        assert_eq!(board.task(t1).map(|task| task.column_id), Some(columns[1]));
    }

    #[test]
    fn test_reparent_into_empty_column_and_clamped_index() {
        let (mut board, columns, tasks) = board_with_tasks(&[2, 0, 1]);

        assert!(board.reparent_and_reorder_task(tasks[0][0], columns[1], 5));
        assert_eq!(column_tasks(&board, columns[1]), vec![tasks[0][0]]);

        assert!(board.reparent_and_reorder_task(tasks[0][1], columns[2], 99));
        assert_eq!(column_tasks(&board, columns[2]), vec![tasks[2][0], tasks[0][1]]);
        assert_eq!(board.task_count_in(columns[0]), 0);
    }

    #[test]
    fn test_reparent_to_current_slot_leaves_sequence_untouched() {
        let mut board = Board::new();
        let a = board.create_column();
        let b = board.create_column();
        let first = board.create_task(a).expect("column exists");
        board.create_task(b).expect("column exists");
        let second = board.create_task(a).expect("column exists");
        let before = board.tasks().to_vec();

        assert!(!board.reparent_and_reorder_task(first, a, 0));
        assert!(!board.reparent_and_reorder_task(second, a, 1));
        assert!(!board.reparent_and_reorder_task(second, a, 42));

        assert_eq!(board.tasks(), before.as_slice());
    }

    #[test]
    fn test_task_slot_reports_column_relative_index() {
        let mut board = Board::new();
        let a = board.create_column();
        let b = board.create_column();
        board.create_task(a).expect("column exists");
        let in_b = board.create_task(b).expect("column exists");
        let second_in_a = board.create_task(a).expect("column exists");

        assert_eq!(board.task_slot(in_b), Some((b, 0)));
        assert_eq!(board.task_slot(second_in_a), Some((a, 1)));
        assert_eq!(board.task_slot(TaskId::new(42)), None);
    }

    #[test]
    fn test_untouched_tasks_keep_relative_order() {
        let (mut board, columns, tasks) = board_with_tasks(&[3, 3]);

        board.delete_task(tasks[0][1]);
        board.edit_task_content(tasks[1][0], "edited");
        board.create_task(columns[0]).expect("column exists");
        board.delete_column(ColumnId::new(77));

        let order: Vec<_> = column_tasks(&board, columns[0])
            .into_iter()
            .take(2)
            .collect();
        assert_eq!(order, vec![tasks[0][0], tasks[0][2]]);
        assert_eq!(column_tasks(&board, columns[1]), tasks[1]);
    }
}
