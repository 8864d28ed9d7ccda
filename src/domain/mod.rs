//! Domain Layer
//!
//! The core of the crate - pure in-memory types with no I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Priority, TaskStatus, TaskId)
//! - `entities/` - Mutable identity-bearing types (Task, TaskHandle, TaskList)
//!
//! ## Design Principles
//!
//! 1. **Values copy, entities alias** - cloning a value object duplicates
//!    its data; cloning an entity handle shares the underlying record
//! 2. **Identity is fixed** - an entity's id is assigned at construction and
//!    has no setter
//! 3. **No hidden rules** - setters do not validate, guard transitions, or
//!    emit events

pub mod entities;
pub mod value_objects;
