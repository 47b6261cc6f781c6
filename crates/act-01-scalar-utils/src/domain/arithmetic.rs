//! Optional-operand addition

use std::ops::Add;

/// Add two optional operands.
///
/// - `a` absent: zero, whatever `b` is
/// - `b` absent: `a`
/// - both present: `a + b` with the native semantics of `T`
///
/// `T::default()` is taken as zero, which holds for every primitive numeric type.
pub fn add_maybe<T>(a: Option<T>, b: Option<T>) -> T
where
    T: Add<Output = T> + Default,
{
    match (a, b) {
        (None, _) => T::default(),
        (Some(a), None) => a,
        (Some(a), Some(b)) => a + b,
    }
}
