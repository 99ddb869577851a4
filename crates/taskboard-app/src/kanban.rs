/*
[INPUT]:  Task collection and active view filter
[OUTPUT]: Three ordered status columns with presentation emphasis
[POS]:    View derivation - pure categorization, no network access
[UPDATE]: When column rules or offered status moves change
*/

use taskboard_client::{StatusFilter, Task, TaskStatus};

/// One status column of the board
#[derive(Debug, Clone, PartialEq)]
pub struct KanbanColumn {
    pub status: TaskStatus,
    pub tasks: Vec<Task>,
    /// Presentation emphasis only: a dimmed column still shows its tasks
    pub dimmed: bool,
}

/// The categorized board: todo, in_progress, done, in that order
#[derive(Debug, Clone, PartialEq)]
pub struct KanbanBoard {
    pub todo: KanbanColumn,
    pub in_progress: KanbanColumn,
    pub done: KanbanColumn,
}

impl KanbanBoard {
    /// Columns in display order
    pub fn columns(&self) -> [&KanbanColumn; 3] {
        [&self.todo, &self.in_progress, &self.done]
    }

    /// Total task count across all columns
    pub fn total(&self) -> usize {
        self.todo.tasks.len() + self.in_progress.tasks.len() + self.done.tasks.len()
    }
}

/// Partition tasks into status columns, preserving server order.
///
/// The filter never removes a task from its column; a non-matching column
/// is only marked dimmed, so total counts stay visible under any filter.
pub fn categorize(tasks: &[Task], filter: StatusFilter) -> KanbanBoard {
    let column = |status: TaskStatus| KanbanColumn {
        status,
        tasks: tasks
            .iter()
            .filter(|task| task.status == status)
            .cloned()
            .collect(),
        dimmed: filter != StatusFilter::All && !filter.matches(status),
    };

    KanbanBoard {
        todo: column(TaskStatus::Todo),
        in_progress: column(TaskStatus::InProgress),
        done: column(TaskStatus::Done),
    }
}

/// Status moves the board offers for a task in the given column.
///
/// View-layer policy: the mutation coordinator itself accepts any status.
pub fn offered_transitions(status: TaskStatus) -> &'static [TaskStatus] {
    match status {
        TaskStatus::Todo => &[TaskStatus::InProgress],
        TaskStatus::InProgress => &[TaskStatus::Done, TaskStatus::Todo],
        TaskStatus::Done => &[TaskStatus::InProgress],
    }
}
