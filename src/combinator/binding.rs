//! Receiver binding and message sending.
//!
//! Methods here are always unbound lambdas taking the receiver as their
//! first argument; binding fixes that argument. [`bound`] hands back the
//! fixed method as a value, [`send`] looks it up and invokes it in one
//! motion.

use smallvec::smallvec;

use crate::combinator::partial::apply_left;
use crate::error::CallError;
use crate::lambda::{Arg, Lambda, SlotVec, ValueVec};
use crate::value::{nth, Value};

/// A callable fixed to a receiver, with both parts recoverable.
///
/// The underlying callable and the receiver are plain fields: recovering
/// the unbound callable is a read, not a probe on the wrapper.
#[derive(Clone, Debug)]
pub struct BoundFn {
    underlying: Lambda,
    context: Value,
}

impl BoundFn {
    /// Fixes `context` as the first argument of `fun`.
    #[must_use]
    pub const fn new(fun: Lambda, context: Value) -> Self {
        Self {
            underlying: fun,
            context,
        }
    }

    /// The callable without its receiver.
    #[must_use]
    pub const fn unbound(&self) -> &Lambda {
        &self.underlying
    }

    /// The fixed receiver.
    #[must_use]
    pub const fn context(&self) -> &Value {
        &self.context
    }

    /// Calls the underlying callable with the receiver prepended.
    ///
    /// # Errors
    ///
    /// Whatever the underlying callable raises, unmodified.
    pub fn call(&self, args: &[Arg]) -> Result<Value, CallError> {
        let mut slots: SlotVec = smallvec![Arg::Value(self.context.clone())];
        slots.extend(args.iter().cloned());
        self.underlying.call(&slots)
    }

    /// The receiver-fixed callable as a standalone lambda of reduced arity.
    ///
    /// The record identity is lost in the conversion; keep the [`BoundFn`]
    /// around if the receiver must stay recoverable.
    #[must_use]
    pub fn into_lambda(self) -> Lambda {
        let arity = self.underlying.arity().saturating_sub(1);
        Lambda::from_slots(arity, move |slots| self.call(slots))
    }
}

/// Fixes a receiver as the first argument of a callable.
#[must_use]
pub fn bind(fun: &Lambda, context: &Value) -> BoundFn {
    BoundFn::new(fun.clone(), context.clone())
}

/// A one-argument binder: give it a receiver and get the named method back,
/// pre-bound to that receiver and to `extra`, without invoking it.
///
/// The returned lambda fails with [`CallError::MissingMethod`] when its
/// receiver does not expose the named method.
///
/// # Examples
///
/// ```rust
/// use polyadic::args;
/// use polyadic::combinator::bound;
/// use polyadic::value::{List, Value};
///
/// let push_one = bound("push", &[Value::from(1)]);
/// let list = List::new();
///
/// let pusher = push_one.call(&args![list.clone()])?;
/// assert!(list.is_empty());
///
/// pusher.call(&args![])?;
/// assert_eq!(list.to_vec(), vec![Value::Int(1)]);
/// # Ok::<(), polyadic::error::CallError>(())
/// ```
#[must_use]
pub fn bound(name: &str, extra: &[Value]) -> Lambda {
    let name = name.to_string();
    let extra: Vec<Value> = extra.to_vec();
    Lambda::new(1, move |values| {
        let receiver = nth(values, 0);
        let method = receiver.method(&name)?;
        let fixed = BoundFn::new(method, receiver).into_lambda();
        Ok(Value::Fun(if extra.is_empty() {
            fixed
        } else {
            apply_left(&fixed, &extra)
        }))
    })
}

/// Sends a message: looks up the named method on its first argument and
/// invokes it with the bound arguments followed by any additional ones.
///
/// The returned lambda fails with [`CallError::MissingMethod`] when the
/// receiver does not expose the named method.
///
/// # Examples
///
/// ```rust
/// use polyadic::args;
/// use polyadic::combinator::send;
/// use polyadic::value::Value;
///
/// let upcase = send("to_uppercase", &[]);
/// assert_eq!(upcase.call(&args!["word"]), Ok(Value::from("WORD")));
/// ```
#[must_use]
pub fn send(name: &str, bound_args: &[Value]) -> Lambda {
    let name = name.to_string();
    let bound_args: Vec<Value> = bound_args.to_vec();
    Lambda::variadic(move |values| {
        let receiver = nth(values, 0);
        let method = receiver.method(&name)?;
        let mut all: ValueVec = smallvec![receiver];
        all.extend(bound_args.iter().cloned());
        if values.len() > 1 {
            all.extend(values[1..].iter().cloned());
        }
        method.invoke(&all)
    })
}

/// A receiver-taking applier: calls `fun` with the receiver first, then the
/// fixed arguments.
#[must_use]
pub fn invoke(fun: &Lambda, args: &[Value]) -> Lambda {
    let fun = fun.clone();
    let args: Vec<Value> = args.to_vec();
    Lambda::new(1, move |values| {
        let mut all: ValueVec = smallvec![nth(values, 0)];
        all.extend(args.iter().cloned());
        fun.invoke(&all)
    })
}
