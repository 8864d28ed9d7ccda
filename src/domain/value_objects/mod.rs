//! Immutable value types
//!
//! Value objects are compared by their contents, copied on `clone()`, and
//! never mutated after construction. Mutating a copy (by replacing it) has no
//! effect on the value it was copied from.

pub mod priority;
pub mod status;
pub mod task_id;

pub use priority::Priority;
pub use status::TaskStatus;
pub use task_id::TaskId;
