//! Boxing a value onto the heap and recovering it with a checked downcast
//!
//! Moving a value behind `Box<dyn Any>` erases its static type, the way
//! boxing erases it in managed runtimes. Getting the value back requires
//! naming the type again, and the downcast is checked: asking for the wrong
//! type is the one runtime failure this crate has.

use std::any::Any;

use crate::error::{TaskModelError, TaskModelResult};

/// Move a value onto the heap behind a type-erased box
pub fn box_value<T: Any>(value: T) -> Box<dyn Any> {
    Box::new(value)
}

/// Recover a boxed value as `T`
///
/// Fails with [`TaskModelError::UnboxMismatch`] when the box holds a value
/// of a different type.
pub fn unbox_value<T: Any>(boxed: Box<dyn Any>) -> TaskModelResult<T> {
    boxed
        .downcast::<T>()
        .map(|value| *value)
        .map_err(|_| TaskModelError::UnboxMismatch {
            expected: std::any::type_name::<T>(),
        })
}
