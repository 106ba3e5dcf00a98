//! Arity dispatch: choosing a rung or the accumulator for a callable.

use crate::apply::fallback::fallback;
use crate::apply::ladder::{rung, target_of, Target, RUNGS};
use crate::error::CallError;
use crate::lambda::{functionalize, Lambda, ValueVec};
use crate::value::Value;

/// Wraps a remaining arity over a strict target.
pub(crate) fn wrap(remaining: usize, target: Target) -> Lambda {
    if remaining < RUNGS {
        rung(remaining, target)
    } else {
        fallback(remaining, target, ValueVec::new())
    }
}

/// Wraps a callable so its arguments may be supplied all at once, a few at
/// a time, or one by one.
///
/// The wrapper reads the declared arity and picks the specialized small-
/// arity path or the generic accumulator. Each call that does not complete
/// the argument list returns a fresh wrapper awaiting the rest; the call
/// that completes it invokes the underlying callable and returns its result
/// unchanged. A call supplying nothing (or leading with a missing slot)
/// returns a wrapper behaviorally identical to the one called.
///
/// # Examples
///
/// ```rust
/// use polyadic::apply::curry;
/// use polyadic::args;
/// use polyadic::lambda::Lambda;
/// use polyadic::value::Value;
///
/// let sum = Lambda::new(3, |values| {
///     let total: i64 = values.iter().filter_map(Value::as_int).sum();
///     Ok(Value::Int(total))
/// });
/// let curried = curry(&sum);
///
/// assert_eq!(curried.call(&args![1, 2, 3]), Ok(Value::Int(6)));
///
/// let partial = curried.call(&args![1, 2]).unwrap();
/// assert_eq!(partial.call(&args![3]), Ok(Value::Int(6)));
/// ```
#[must_use]
pub fn curry(fun: &Lambda) -> Lambda {
    wrap(fun.arity(), target_of(fun))
}

/// Adapts any value into its curried form.
///
/// Functions dispatch directly; strings and maps pass through
/// [`functionalize`] first and dispatch as one-argument projections.
///
/// # Errors
///
/// [`CallError::NotCallable`] when the value has no callable reading.
pub fn dispatch(value: &Value) -> Result<Lambda, CallError> {
    Ok(curry(&functionalize(value)?))
}
