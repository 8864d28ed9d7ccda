//! Ordered task collection with two equivalent traversal styles
//!
//! `TaskList` keeps handles in insertion order and offers both traversal
//! patterns over that order:
//!
//! - [`TaskList::iter`] - sequential traversal, no positions exposed
//! - [`TaskList::indexed`] - positional traversal; the iterator is double
//!   ended and exact sized, so reverse order, `skip`, `step_by`, and early
//!   termination all come for free
//!
//! Both visit the same handles in the same order for any list.

use serde::{Deserialize, Serialize};

use super::task::TaskHandle;

/// An ordered sequence of task handles
///
/// Insertion order is meaningful and is the order every traversal follows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskList {
    tasks: Vec<TaskHandle>,
}

impl TaskList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handle at the end
    pub fn push(&mut self, task: TaskHandle) {
        self.tasks.push(task);
    }

    /// Number of tasks in the list
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// True if the list holds no tasks
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Positional access; `None` past the end
    pub fn get(&self, index: usize) -> Option<&TaskHandle> {
        self.tasks.get(index)
    }

    /// Sequential traversal in insertion order, without positions
    pub fn iter(&self) -> std::slice::Iter<'_, TaskHandle> {
        self.tasks.iter()
    }

    /// Positional traversal in insertion order
    ///
    /// Positions are zero based and match insertion order. The iterator
    /// supports reverse traversal (`rev`), skipping (`skip`), custom step
    /// sizes (`step_by`), and early termination (`take`, or `break` in a
    /// `for` loop).
    pub fn indexed(
        &self,
    ) -> impl DoubleEndedIterator<Item = (usize, &TaskHandle)> + ExactSizeIterator + '_ {
        self.tasks.iter().enumerate()
    }
}

impl std::ops::Index<usize> for TaskList {
    type Output = TaskHandle;

    fn index(&self, index: usize) -> &TaskHandle {
        &self.tasks[index]
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a TaskHandle;
    type IntoIter = std::slice::Iter<'a, TaskHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<TaskHandle> for TaskList {
    fn from_iter<I: IntoIterator<Item = TaskHandle>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}
