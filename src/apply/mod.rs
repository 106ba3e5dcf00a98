//! Arity dispatch and the missing-argument application protocol.
//!
//! This module is the mechanism the combinator layer is built on. A wrapped
//! callable decides, at every call, whether to finalize the invocation or to
//! return a further wrapper still awaiting arguments:
//!
//! - supplying every remaining argument invokes the underlying callable;
//! - supplying some of them returns a new wrapper with those values bound;
//! - supplying nothing (or leading with the [`__`](crate::lambda::__)
//!   placeholder) defers, returning a wrapper that behaves exactly like
//!   the one called.
//!
//! Two tiers implement this. Remaining arities 0 through 4 run on
//! hand-specialized wrappers that match their argument slots positionally;
//! larger arities run on a generic accumulator that re-measures what is owed
//! on every call and hands off to the specialized tier as soon as the
//! remainder fits it. [`curry`] reads a callable's declared arity and picks
//! the entry tier; [`dispatch`] additionally adapts strings and maps into
//! projections first.
//!
//! # Examples
//!
//! ```rust
//! use polyadic::apply::curry;
//! use polyadic::args;
//! use polyadic::lambda::{Lambda, __};
//! use polyadic::value::Value;
//!
//! let join = Lambda::new(2, |values| {
//!     let mut text = String::new();
//!     for value in values {
//!         text.push_str(value.as_str().unwrap_or("?"));
//!     }
//!     Ok(Value::Str(text))
//! });
//!
//! let curried = curry(&join);
//! let greet = curried.call(&args!["hello, "]).unwrap();
//! assert_eq!(greet.call(&args!["world"]), Ok(Value::from("hello, world")));
//!
//! // a deferring call changes nothing
//! let deferred = curried.call(&args![__]).unwrap();
//! assert_eq!(
//!     deferred.call(&args!["a", "b"]),
//!     Ok(Value::from("ab"))
//! );
//! ```

mod dispatch;
mod fallback;
pub(crate) mod ladder;

pub use dispatch::{curry, dispatch};
pub(crate) use dispatch::wrap;
pub(crate) use ladder::Target;
