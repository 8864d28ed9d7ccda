//! Parameter-passing modes and their observable effects
//!
//! A routine receives an argument in one of three modes, and each mode has a
//! distinct, testable effect on the caller's storage:
//!
//! | Mode              | Signature shape   | Caller observes callee mutation? |
//! |-------------------|-------------------|----------------------------------|
//! | By value          | `fn f(x: T)`      | No - callee owns a copy          |
//! | By mutable borrow | `fn f(x: &mut T)` | Yes                              |
//! | By shared borrow  | `fn f(x: &T)`     | Mutation does not compile        |
//!
//! The modes apply uniformly to value objects and entity handles, with one
//! classic pitfall: passing a [`TaskHandle`] *by value* copies the handle,
//! never the record it addresses. The callee still aliases the caller's
//! record, so field mutations leak back - see [`rename`].
//!
//! Mutation through a shared borrow is rejected at compile time:
//!
//! ```compile_fail
//! use taskmodel::Priority;
//!
//! fn try_mutate(priority: &Priority) {
//!     *priority = Priority::low(); // cannot assign through `&`
//! }
//! ```
//!
//! And a [`Priority`] offers no mutation API at all - fields are private and
//! there are no setters, so even an owned value cannot be changed in place:
//!
//! ```compile_fail
//! use taskmodel::Priority;
//!
//! let mut priority = Priority::high();
//! priority.level = 3; // field is private; replacement is the only option
//! ```

use crate::domain::entities::{Task, TaskHandle};
use crate::domain::value_objects::{Priority, TaskStatus};

/// Mutate a value received by value
///
/// The callee owns an independent copy; the caller's variable is untouched
/// after the call. Returns the callee's copy so the difference is visible.
pub fn overwrite_copy(value: i32) -> i32 {
    let mut copy = value;
    copy += 50;
    copy
}

/// Replace a priority received by value
///
/// Same rule as [`overwrite_copy`], applied to a value object: the caller's
/// priority is never affected.
pub fn relabel_copy(mut priority: Priority) -> Priority {
    priority = Priority::new(priority.level(), "Relabeled");
    priority
}

/// Overwrite the caller's storage through a mutable borrow
pub fn overwrite_in_place(value: &mut i32) {
    *value = 100;
}

/// Mark the caller's task record completed through a mutable borrow
pub fn complete(task: &mut Task) {
    task.set_status(TaskStatus::Completed);
}

/// Rename a task through a handle received by value
///
/// This is the aliasing pitfall made explicit: only the handle is copied.
/// The record it addresses is shared, so the caller observes the new title
/// after the call even though no `&mut` appears in the signature.
pub fn rename(task: TaskHandle, title: &str) {
    task.set_title(title);
}

/// Describe a priority through a shared borrow
///
/// No copy is made (relevant for large values) and no mutation is possible;
/// see the module docs for the rejected-at-compile-time examples.
pub fn describe(priority: &Priority) -> String {
    format!("priority level {}: {}", priority.level(), priority.name())
}
