//! Canonical sample data used by the demos and tests

use crate::domain::entities::{Task, TaskHandle, TaskList};
use crate::domain::value_objects::{Priority, TaskStatus};

/// Build the standard five-task sample list (ids 1..=5)
///
/// Creation timestamps are left unset so rendered output is deterministic.
pub fn sample_tasks() -> TaskList {
    [
        (1, "Code Review", TaskStatus::InProgress, Priority::medium()),
        (2, "Write Tests", TaskStatus::Pending, Priority::high()),
        (3, "Deploy", TaskStatus::Completed, Priority::low()),
        (4, "Bug Fix", TaskStatus::InProgress, Priority::high()),
        (5, "Documentation", TaskStatus::Pending, Priority::medium()),
    ]
    .into_iter()
    .map(|(id, title, status, priority)| {
        TaskHandle::new(
            Task::new(id)
                .with_title(title)
                .with_status(status)
                .with_priority(priority),
        )
    })
    .collect()
}
