//! Partial application and argument reordering.
//!
//! Every transformer here is a thin policy over the dispatch tier: it
//! decides which positions to fix and in which order arguments are
//! consumed, and leaves the deciding-when-to-invoke to the wrappers.

use std::rc::Rc;
use std::slice;

use smallvec::smallvec;

use crate::apply::{wrap, Target};
use crate::error::CallError;
use crate::lambda::{Arg, Lambda, ValueVec};
use crate::value::{nth, Value};

/// Reverses the order in which a callable consumes its arguments.
///
/// `flip(f)(a, b)` equals `f(b, a)`, whether the arguments arrive in bulk
/// or one at a time, and the missing-argument convention is preserved at
/// every step: calling a flipped function with nothing (or a leading
/// missing slot) returns the flipped function itself, behaviorally.
///
/// For a variadic callable (declared arity 0) the entire supplied argument
/// list is reversed at invocation.
///
/// # Examples
///
/// ```rust
/// use polyadic::args;
/// use polyadic::combinator::flip;
/// use polyadic::lambda::Lambda;
/// use polyadic::value::Value;
///
/// let difference = Lambda::new(2, |values| {
///     let a = values[0].as_int().unwrap_or(0);
///     let b = values[1].as_int().unwrap_or(0);
///     Ok(Value::Int(a - b))
/// });
/// assert_eq!(flip(&difference).call(&args![2, 10]), Ok(Value::Int(8)));
/// ```
#[must_use]
pub fn flip(fun: &Lambda) -> Lambda {
    let arity = fun.arity();
    let inner = fun.clone();
    let reversed: Target = Rc::new(move |values: &[Value]| {
        let backwards: ValueVec = values.iter().rev().cloned().collect();
        inner.invoke(&backwards)
    });
    wrap(arity, reversed)
}

/// Fixes the first argument of a callable.
///
/// With [`Arg::Missing`], returns a deferred one-argument binder (the
/// curried-constructor form). A unary callable is invoked immediately.
/// Otherwise the result is a plain wrapper of reduced arity: it fills
/// absent positions with `Nil` rather than deferring.
///
/// # Errors
///
/// Only what the underlying callable raises when it is invoked here
/// (the unary case).
pub fn apply_first(fun: &Lambda, first: Arg) -> Result<Value, CallError> {
    let Arg::Value(first) = first else {
        return Ok(Value::Fun(first_binder(fun.clone())));
    };
    let fun = fun.clone();
    match fun.arity() {
        1 => fun.invoke(slice::from_ref(&first)),
        2 => Ok(Value::Fun(Lambda::new(1, move |values| {
            fun.invoke(&[first.clone(), nth(values, 0)])
        }))),
        3 => Ok(Value::Fun(Lambda::new(2, move |values| {
            fun.invoke(&[first.clone(), nth(values, 0), nth(values, 1)])
        }))),
        _ => Ok(Value::Fun(Lambda::variadic(move |values| {
            let mut all: ValueVec = smallvec![first.clone()];
            all.extend(values.iter().cloned());
            fun.invoke(&all)
        }))),
    }
}

fn first_binder(fun: Lambda) -> Lambda {
    Lambda::from_slots(1, move |slots| match slots.first() {
        Some(Arg::Value(value)) => apply_first(&fun, Arg::Value(value.clone())),
        _ => Ok(Value::Fun(first_binder(fun.clone()))),
    })
}

/// Fixes the last argument of a callable.
///
/// The mirror image of [`apply_first`]: with [`Arg::Missing`] it returns a
/// deferred one-argument binder, a unary callable is invoked immediately,
/// and a variadic callable (declared arity 0) yields a wrapper that appends
/// the fixed value after whatever arrives. For arities above 3 the supplied
/// arguments are truncated to arity - 1 before the fixed value is appended.
///
/// # Errors
///
/// Only what the underlying callable raises when it is invoked here
/// (the unary case).
pub fn apply_last(fun: &Lambda, last: Arg) -> Result<Value, CallError> {
    let Arg::Value(last) = last else {
        return Ok(Value::Fun(last_binder(fun.clone())));
    };
    let fun = fun.clone();
    match fun.arity() {
        0 => Ok(Value::Fun(Lambda::variadic(move |values| {
            let mut all: ValueVec = values.iter().cloned().collect();
            all.push(last.clone());
            fun.invoke(&all)
        }))),
        1 => fun.invoke(slice::from_ref(&last)),
        2 => Ok(Value::Fun(Lambda::new(1, move |values| {
            fun.invoke(&[nth(values, 0), last.clone()])
        }))),
        3 => Ok(Value::Fun(Lambda::new(2, move |values| {
            fun.invoke(&[nth(values, 0), nth(values, 1), last.clone()])
        }))),
        arity => Ok(Value::Fun(Lambda::variadic(move |values| {
            let mut head: ValueVec = values.iter().take(arity - 1).cloned().collect();
            head.push(last.clone());
            fun.invoke(&head)
        }))),
    }
}

fn last_binder(fun: Lambda) -> Lambda {
    Lambda::from_slots(1, move |slots| match slots.first() {
        Some(Arg::Value(value)) => apply_last(&fun, Arg::Value(value.clone())),
        _ => Ok(Value::Fun(last_binder(fun.clone()))),
    })
}

/// Fixes one or more leading arguments, returning a variadic wrapper that
/// takes the rest.
#[must_use]
pub fn apply_left(fun: &Lambda, bound: &[Value]) -> Lambda {
    let fun = fun.clone();
    let bound: Vec<Value> = bound.to_vec();
    Lambda::variadic(move |values| {
        let mut all: ValueVec = bound.iter().cloned().collect();
        all.extend(values.iter().cloned());
        fun.invoke(&all)
    })
}

/// Fixes one or more trailing arguments.
///
/// Three shapes, by how the declared arity compares with the number of
/// fixed values:
///
/// - arity 0 (variadic underlying): a variadic wrapper that appends the
///   fixed values after whatever precedes them;
/// - arity greater than the fixed count: a positional wrapper of the
///   reduced arity, truncating extras;
/// - otherwise: a ready zero-argument thunk.
#[must_use]
pub fn apply_right(fun: &Lambda, bound: &[Value]) -> Lambda {
    let fun = fun.clone();
    let bound: Vec<Value> = bound.to_vec();
    let arity = fun.arity();
    if arity < 1 {
        Lambda::variadic(move |values| {
            let mut all: ValueVec = values.iter().cloned().collect();
            all.extend(bound.iter().cloned());
            fun.invoke(&all)
        })
    } else if arity > bound.len() {
        let preceding = arity - bound.len();
        Lambda::new(preceding, move |values| {
            let mut all: ValueVec = values.iter().take(preceding).cloned().collect();
            all.extend(bound.iter().cloned());
            fun.invoke(&all)
        })
    } else {
        Lambda::new(0, move |_values| fun.invoke(&bound))
    }
}

/// Supplies fallback values for missing trailing arguments.
///
/// When the wrapper is called with fewer arguments than the underlying
/// arity, the missing trailing positions fill from the tail of the
/// fallback sequence, taking exactly as many as are needed.
///
/// # Examples
///
/// ```rust
/// use polyadic::args;
/// use polyadic::combinator::defaults;
/// use polyadic::lambda::Lambda;
/// use polyadic::value::Value;
///
/// let triple = Lambda::new(3, |values| {
///     Ok(Value::List(values.iter().cloned().collect()))
/// });
/// let with_defaults = defaults(&triple, &[Value::from("y"), Value::from("z")]);
///
/// assert_eq!(
///     with_defaults.call(&args!["x"]),
///     Ok(Value::list(["x", "y", "z"]))
/// );
/// assert_eq!(
///     with_defaults.call(&args!["a", "b"]),
///     Ok(Value::list(["a", "b", "z"]))
/// );
/// ```
#[must_use]
pub fn defaults(fun: &Lambda, fallbacks: &[Value]) -> Lambda {
    let fun = fun.clone();
    let fallbacks: Vec<Value> = fallbacks.to_vec();
    let arity = fun.arity();
    Lambda::variadic(move |values| {
        let missing = arity.saturating_sub(values.len()).min(fallbacks.len());
        let mut all: ValueVec = values.iter().cloned().collect();
        all.extend(fallbacks[fallbacks.len() - missing..].iter().cloned());
        fun.invoke(&all)
    })
}

/// A callable that gathers its arguments into a list.
///
/// Positional for arities 1 through 3 (absent positions read as `Nil`,
/// extras are dropped), variadic otherwise.
#[must_use]
pub fn collect(arity: usize) -> Lambda {
    match arity {
        1..=3 => Lambda::new(arity, move |values| {
            let mut items: Vec<Value> = values.iter().take(arity).cloned().collect();
            items.resize(arity, Value::Nil);
            Ok(Value::List(items.into_iter().collect()))
        }),
        _ => Lambda::variadic(|values| Ok(Value::List(values.iter().cloned().collect()))),
    }
}
