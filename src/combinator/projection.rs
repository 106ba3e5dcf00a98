//! Attribute projection across values and sequences.

use std::slice;

use crate::error::CallError;
use crate::lambda::{Arg, Lambda};
use crate::value::{nth, Value};

/// Reads an attribute off an object, or defers when the name is missing.
///
/// Projection is total: an absent attribute, an attribute-less receiver,
/// or a non-string name all read as `Nil`. With [`Arg::Missing`] in the
/// name position the object is captured and a one-argument reader over it
/// comes back instead.
#[must_use]
pub fn attr(object: &Value, name: Arg) -> Value {
    match name {
        Arg::Value(Value::Str(name)) => object.attribute(&name),
        Arg::Value(_) => Value::Nil,
        Arg::Missing => {
            let object = object.clone();
            Value::Fun(Lambda::new(1, move |values| {
                Ok(match nth(values, 0) {
                    Value::Str(name) => object.attribute(&name),
                    _ => Value::Nil,
                })
            }))
        }
    }
}

/// Name-first attribute reader, deferring when the object is missing.
///
/// With [`Arg::Missing`] in the object position the name is captured and a
/// one-argument projection comes back, the shape [`pluck_with`] maps over
/// sequences.
#[must_use]
pub fn attr_with(name: &str, object: Arg) -> Value {
    match object {
        Arg::Value(object) => object.attribute(name),
        Arg::Missing => {
            let name = name.to_string();
            Value::Fun(Lambda::new(1, move |values| {
                Ok(nth(values, 0).attribute(&name))
            }))
        }
    }
}

/// Maps a callable across a list.
///
/// The returned lambda takes one argument, the list to map over.
///
/// The wrapped callable's failures surface unmodified; a non-list argument
/// is a [`CallError::InvalidArgument`].
#[must_use]
pub fn map_with(fun: &Lambda) -> Lambda {
    let fun = fun.clone();
    Lambda::new(1, move |values| {
        let subject = nth(values, 0);
        let Value::List(list) = subject else {
            return Err(CallError::InvalidArgument {
                method: "map_with",
                expected: "list",
                found: subject.kind(),
            });
        };
        let mut mapped = Vec::with_capacity(list.len());
        for item in list.to_vec() {
            mapped.push(fun.invoke(slice::from_ref(&item))?);
        }
        Ok(Value::List(mapped.into_iter().collect()))
    })
}

/// A one-argument lambda projecting the named attribute across a sequence
/// of objects.
#[must_use]
pub fn pluck_with(name: &str) -> Lambda {
    let name = name.to_string();
    map_with(&Lambda::new(1, move |values| {
        Ok(nth(values, 0).attribute(&name))
    }))
}

/// The values of the named attribute across a sequence of objects.
///
/// # Errors
///
/// [`CallError::InvalidArgument`] when `sequence` is not a list.
///
/// # Examples
///
/// ```rust
/// use polyadic::combinator::pluck;
/// use polyadic::value::Value;
///
/// let people = Value::list([
///     Value::map([("name", "a")]),
///     Value::map([("name", "b")]),
/// ]);
/// assert_eq!(pluck("name", &people), Ok(Value::list(["a", "b"])));
/// ```
pub fn pluck(name: &str, sequence: &Value) -> Result<Value, CallError> {
    pluck_with(name).invoke(slice::from_ref(sequence))
}
