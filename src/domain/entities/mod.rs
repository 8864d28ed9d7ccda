//! Mutable, identity-bearing domain types
//!
//! Entities carry a fixed identity and mutable state. They are shared by
//! handle: cloning a [`TaskHandle`] aliases the underlying record instead of
//! copying it.

pub mod task;
pub mod task_list;

pub use task::{Task, TaskHandle};
pub use task_list::TaskList;
