//! Task entity - a mutable record behind a shared-ownership handle
//!
//! This is the core domain entity. It comes in two shapes:
//!
//! - [`Task`] is the plain record. Cloning it duplicates the data.
//! - [`TaskHandle`] is a heap-allocated record behind `Rc<RefCell<_>>`.
//!   Cloning the handle copies the *handle only* - both handles keep
//!   addressing the same record, and a mutation through either one is
//!   visible through both.
//!
//! The identity field is fixed at construction: [`Task`] exposes no setter
//! for `id`, so "id never changes" holds by construction.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Priority, TaskId, TaskStatus};

/// A task record
///
/// Only `id` is required at construction; the remaining fields are optional
/// and settable afterwards. Setters perform no validation and emit no events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned once
    id: TaskId,
    /// Short description of the work
    title: Option<String>,
    /// Progress state
    status: TaskStatus,
    /// Embedded priority value (composition - each task owns its own copy)
    priority: Option<Priority>,
    /// Creation timestamp, if known
    created_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a new task with the given identity and all optional fields unset
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            status: TaskStatus::default(),
            priority: None,
            created_at: None,
        }
    }

    /// Builder: set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder: set the status
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Builder: set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Builder: set the creation timestamp
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Unique identifier
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Title, if set
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Progress state
    pub fn status(&self) -> TaskStatus {
        self.status
    }

    /// Embedded priority, if set
    pub fn priority(&self) -> Option<&Priority> {
        self.priority.as_ref()
    }

    /// Creation timestamp, if set
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Replace the title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Replace the status (any transition is legal)
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Replace the embedded priority
    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = Some(priority);
    }

    /// One-line summary for display
    pub fn summary(&self) -> String {
        format!(
            "#{} {} [{}]",
            self.id,
            self.title.as_deref().unwrap_or("(untitled)"),
            self.status
        )
    }
}

/// Shared-ownership handle to a heap-allocated [`Task`]
///
/// `clone()` aliases: the clone and the source address the same record.
/// Use [`TaskHandle::detach`] when an independent copy is actually wanted.
///
/// The handle is single-threaded by design (`Rc`, not `Arc`); interior
/// mutability goes through `RefCell`, so the usual borrow rules apply at
/// run time: do not hold a value returned by an accessor across a setter
/// call on the same record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskHandle {
    // Serialization flattens sharing: each serialized handle carries its own
    // copy of the record, and deserializing never reconstitutes aliases.
    record: Rc<RefCell<Task>>,
}

impl TaskHandle {
    /// Move a record onto the heap and hand back the first handle to it
    pub fn new(task: Task) -> Self {
        Self {
            record: Rc::new(RefCell::new(task)),
        }
    }

    /// Unique identifier
    pub fn id(&self) -> TaskId {
        self.record.borrow().id()
    }

    /// Title, if set (cloned out of the shared record)
    pub fn title(&self) -> Option<String> {
        self.record.borrow().title().map(str::to_owned)
    }

    /// Progress state
    pub fn status(&self) -> TaskStatus {
        self.record.borrow().status()
    }

    /// Embedded priority, if set (cloned out of the shared record)
    pub fn priority(&self) -> Option<Priority> {
        self.record.borrow().priority().cloned()
    }

    /// Creation timestamp, if set
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.record.borrow().created_at()
    }

    /// Replace the title; visible through every alias of this record
    pub fn set_title(&self, title: impl Into<String>) {
        self.record.borrow_mut().set_title(title);
    }

    /// Replace the status; visible through every alias of this record
    pub fn set_status(&self, status: TaskStatus) {
        self.record.borrow_mut().set_status(status);
    }

    /// Replace the priority; visible through every alias of this record
    pub fn set_priority(&self, priority: Priority) {
        self.record.borrow_mut().set_priority(priority);
    }

    /// One-line summary for display
    pub fn summary(&self) -> String {
        self.record.borrow().summary()
    }

    /// True if both handles address the same underlying record
    pub fn same_record(&self, other: &TaskHandle) -> bool {
        Rc::ptr_eq(&self.record, &other.record)
    }

    /// Detach an independent copy of the record
    ///
    /// The returned [`Task`] has value semantics: mutating it never affects
    /// the record this handle addresses, and vice versa.
    pub fn detach(&self) -> Task {
        self.record.borrow().clone()
    }
}

impl From<Task> for TaskHandle {
    fn from(task: Task) -> Self {
        Self::new(task)
    }
}

impl std::fmt::Display for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.summary())
    }
}
