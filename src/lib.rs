//! taskmodel - a task domain model with explicit value and handle semantics
//!
//! Two ownership disciplines live side by side in this crate:
//!
//! - **Value objects** ([`Priority`], [`TaskStatus`], [`TaskId`]) are
//!   immutable and copy on `clone()`; copies are always independent.
//! - **Entities** ([`Task`] behind a [`TaskHandle`]) are mutable records
//!   with a fixed identity, shared by handle: cloning the handle aliases
//!   the record, and every alias observes every mutation.
//!
//! The [`passing`] module spells out what each parameter-passing mode does
//! to the caller's storage, including the classic pitfall that passing a
//! handle *by value* still aliases. [`TaskList`] offers indexed and
//! sequential traversal over the same insertion order. The [`demo`] module
//! narrates all of it for the CLI without printing anything itself.

pub mod boxing;
pub mod demo;
pub mod domain;
pub mod error;
pub mod passing;
pub mod samples;

// Re-exports for convenience
pub use domain::entities::{Task, TaskHandle, TaskList};
pub use domain::value_objects::{Priority, TaskId, TaskStatus};
pub use error::{TaskModelError, TaskModelResult};
