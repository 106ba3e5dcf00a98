//! Callables with explicit arity, and the missing-argument slots they
//! receive.
//!
//! A [`Lambda`] pairs a body with a declared arity. The arity is explicit
//! because the runtime cannot be asked how many parameters a closure takes;
//! it is what the dispatcher reads to choose between the specialized
//! small-arity wrappers and the accumulator path.
//!
//! Arguments travel as [`Arg`] slots, so "no argument supplied here yet" is
//! a value of its own, [`Arg::Missing`], distinct from a legitimate
//! [`Value::Nil`] argument. The [`__`] placeholder converts into
//! `Arg::Missing`, which lets call sites write argument lists with the
//! [`args!`](crate::args) macro:
//!
//! ```rust
//! use polyadic::args;
//! use polyadic::lambda::{Arg, __};
//!
//! let slots = args![1, __, "three"];
//! assert_eq!(slots[1], Arg::Missing);
//! ```

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::error::CallError;
use crate::value::Value;

/// Argument slots buffered without heap allocation for the common arities.
pub(crate) type SlotVec = SmallVec<[Arg; 4]>;

/// Plain values buffered without heap allocation for the common arities.
pub(crate) type ValueVec = SmallVec<[Value; 4]>;

/// An argument slot: a supplied value, or the missing-argument sentinel.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    /// A supplied argument.
    Value(Value),
    /// No argument supplied in this position yet.
    Missing,
}

impl Arg {
    /// Whether this slot is the sentinel.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// The supplied value, or `Nil` for a missing slot.
    ///
    /// This is how a missing slot degrades when it reaches a strict body
    /// that implements no deferral of its own.
    #[must_use]
    pub fn or_nil(&self) -> Value {
        match self {
            Self::Value(value) => value.clone(),
            Self::Missing => Value::Nil,
        }
    }
}

impl<T: Into<Value>> From<T> for Arg {
    fn from(value: T) -> Self {
        Self::Value(value.into())
    }
}

/// Marker type whose only value, [`__`], stands for a missing argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholder;

/// The missing-argument placeholder.
///
/// Converts into [`Arg::Missing`]; import it and write `__` wherever an
/// argument is deliberately not supplied yet.
#[allow(non_upper_case_globals)]
pub const __: Placeholder = Placeholder;

impl From<Placeholder> for Arg {
    fn from(_: Placeholder) -> Self {
        Self::Missing
    }
}

/// Builds a fixed-size argument-slot array.
///
/// Each element converts through [`Arg::from`]; write
/// [`__`](crate::lambda::__) for a slot that is deliberately missing.
///
/// # Examples
///
/// ```rust
/// use polyadic::args;
/// use polyadic::lambda::{Arg, __};
/// use polyadic::value::Value;
///
/// let slots = args![1, __];
/// assert_eq!(slots, [Arg::Value(Value::Int(1)), Arg::Missing]);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        []
    };
    ($($slot:expr),+ $(,)?) => {
        [$($crate::lambda::Arg::from($slot)),+]
    };
}

/// A callable value with a declared arity.
///
/// The body receives its arguments as a slice of [`Arg`] slots and returns a
/// [`Value`] or a [`CallError`]. Lambdas are cheap to clone: clones share
/// one body.
///
/// # Examples
///
/// ```rust
/// use polyadic::args;
/// use polyadic::lambda::Lambda;
/// use polyadic::value::Value;
///
/// let sum = Lambda::new(2, |values| {
///     let total: i64 = values.iter().filter_map(Value::as_int).sum();
///     Ok(Value::Int(total))
/// });
/// assert_eq!(sum.call(&args![2, 3]), Ok(Value::Int(5)));
/// ```
#[derive(Clone)]
pub struct Lambda {
    arity: usize,
    body: Rc<dyn Fn(&[Arg]) -> Result<Value, CallError>>,
}

impl Lambda {
    /// Wraps a strict body under the given declared arity.
    ///
    /// Strict bodies receive plain values; a missing slot reaching one
    /// degrades to `Nil`. Deferring on missing arguments is the business of
    /// the wrappers built by [`curry`](crate::apply::curry) and the
    /// combinator layer, not of raw lambdas.
    pub fn new(
        arity: usize,
        body: impl Fn(&[Value]) -> Result<Value, CallError> + 'static,
    ) -> Self {
        Self::from_slots(arity, move |slots: &[Arg]| {
            let values: ValueVec = slots.iter().map(Arg::or_nil).collect();
            body(&values)
        })
    }

    /// Wraps a body that receives every supplied argument as one sequence.
    ///
    /// The declared arity is 0, which is what routes such a callable onto
    /// the invoke-immediately path no matter how many arguments arrive.
    pub fn variadic(body: impl Fn(&[Value]) -> Result<Value, CallError> + 'static) -> Self {
        Self::new(0, body)
    }

    /// Slot-aware constructor for wrappers that handle missing arguments
    /// themselves.
    pub(crate) fn from_slots(
        arity: usize,
        body: impl Fn(&[Arg]) -> Result<Value, CallError> + 'static,
    ) -> Self {
        Self {
            arity,
            body: Rc::new(body),
        }
    }

    /// The declared arity.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// The same body under a different declared arity.
    ///
    /// This is how a variadic callable is given a definite parameter count
    /// before dispatch.
    #[must_use]
    pub fn with_arity(&self, arity: usize) -> Self {
        Self {
            arity,
            body: Rc::clone(&self.body),
        }
    }

    /// Calls the body with explicit argument slots.
    ///
    /// # Errors
    ///
    /// Whatever the body raises, unmodified.
    pub fn call(&self, args: &[Arg]) -> Result<Value, CallError> {
        (self.body)(args)
    }

    /// Calls the body with every argument supplied.
    ///
    /// # Errors
    ///
    /// Whatever the body raises, unmodified.
    pub fn invoke(&self, values: &[Value]) -> Result<Value, CallError> {
        let slots: SlotVec = values.iter().cloned().map(Arg::Value).collect();
        (self.body)(&slots)
    }
}

impl fmt::Debug for Lambda {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Lambda")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Lambda {
    /// Lambdas are equal when they share one body under one declared arity.
    fn eq(&self, other: &Self) -> bool {
        self.arity == other.arity && Rc::ptr_eq(&self.body, &other.body)
    }
}

/// Adapts a value into a callable with a well-defined arity.
///
/// A function passes through unchanged. A string becomes a one-argument
/// attribute projection; a map becomes a one-argument key projection (a
/// missed lookup projects to `Nil`).
///
/// # Errors
///
/// [`CallError::NotCallable`] for values with no callable reading.
///
/// # Examples
///
/// ```rust
/// use polyadic::args;
/// use polyadic::lambda::functionalize;
/// use polyadic::value::Value;
///
/// let projection = functionalize(&Value::from("name"))?;
/// let object = Value::map([("name", "alpha")]);
/// assert_eq!(projection.call(&args![object]), Ok(Value::from("alpha")));
/// # Ok::<(), polyadic::error::CallError>(())
/// ```
pub fn functionalize(value: &Value) -> Result<Lambda, CallError> {
    match value {
        Value::Fun(fun) => Ok(fun.clone()),
        Value::Str(name) => {
            let name = name.clone();
            Ok(Lambda::new(1, move |values| {
                Ok(crate::value::nth(values, 0).attribute(&name))
            }))
        }
        Value::Map(map) => {
            let map = map.clone();
            Ok(Lambda::new(1, move |values| {
                Ok(match crate::value::nth(values, 0) {
                    Value::Str(key) => map.get(&key).unwrap_or(Value::Nil),
                    _ => Value::Nil,
                })
            }))
        }
        other => Err(CallError::NotCallable { kind: other.kind() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_not_impl_any;

    assert_not_impl_any!(Lambda: Send, Sync);

    fn first(values: &[Value]) -> Result<Value, CallError> {
        Ok(crate::value::nth(values, 0))
    }

    #[test]
    fn test_strict_body_sees_missing_as_nil() {
        let identity = Lambda::new(1, first);
        assert_eq!(identity.call(&args![__]), Ok(Value::Nil));
        assert_eq!(identity.call(&args![4]), Ok(Value::Int(4)));
    }

    #[test]
    fn test_variadic_receives_everything() {
        let count = Lambda::variadic(|values| {
            Ok(Value::Int(i64::try_from(values.len()).unwrap_or(0)))
        });
        assert_eq!(count.arity(), 0);
        assert_eq!(count.call(&args![1, 2, 3]), Ok(Value::Int(3)));
    }

    #[test]
    fn test_with_arity_shares_the_body() {
        let pick = Lambda::variadic(first);
        let narrowed = pick.with_arity(2);
        assert_eq!(narrowed.arity(), 2);
        assert_eq!(narrowed.invoke(&[Value::from(9)]), Ok(Value::Int(9)));
    }

    #[test]
    fn test_clone_equality_is_body_identity() {
        let original = Lambda::new(1, first);
        let handle = original.clone();
        let lookalike = Lambda::new(1, first);
        assert_eq!(original, handle);
        assert_ne!(original, lookalike);
    }

    #[test]
    fn test_args_macro_mixes_values_and_placeholders() {
        let slots = args![1, __, "x"];
        assert_eq!(slots[0], Arg::Value(Value::Int(1)));
        assert!(slots[1].is_missing());
        assert_eq!(slots[2], Arg::Value(Value::from("x")));
    }

    #[test]
    fn test_functionalize_passes_functions_through() {
        let fun = Lambda::new(1, first);
        let adapted = functionalize(&Value::Fun(fun.clone())).expect("callable");
        assert_eq!(adapted, fun);
    }

    #[test]
    fn test_functionalize_map_is_a_key_projection() {
        let table = Value::map([("a", 1), ("b", 2)]);
        let projection = functionalize(&table).expect("callable");
        assert_eq!(projection.arity(), 1);
        assert_eq!(projection.call(&args!["b"]), Ok(Value::Int(2)));
        assert_eq!(projection.call(&args!["absent"]), Ok(Value::Nil));
    }

    #[test]
    fn test_functionalize_rejects_plain_values() {
        let error = functionalize(&Value::from(1)).unwrap_err();
        assert_eq!(error, CallError::NotCallable { kind: "integer" });
    }
}
