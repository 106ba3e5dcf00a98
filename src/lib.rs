//! # polyadic
//!
//! Arity-aware function transformation for dynamic callables: currying,
//! partial application, argument reordering, and receiver binding.
//!
//! ## Overview
//!
//! A [`Lambda`](lambda::Lambda) is a callable value with an explicitly
//! declared arity. Wrapping one with [`curry`](apply::curry) produces a
//! function that may be applied all at once, a few arguments at a time, or
//! one by one: each call either finalizes the invocation or returns a new
//! wrapper awaiting the rest. A deliberately missing argument is a value of
//! its own, the [`__`](lambda::__) placeholder, so "defer this call" and
//! "pass nil here" never collide.
//!
//! The crate provides:
//!
//! - **Dispatch** ([`apply`]): specialized wrappers for arities 0 to 4, a
//!   generic accumulator for everything wider, and the dispatcher that
//!   picks between them.
//! - **Combinators** ([`combinator`]): `flip`, `apply_first`/`apply_last`,
//!   `apply_left`/`apply_right`, `defaults`, receiver binding (`bind`,
//!   `bound`, `send`, `invoke`), and attribute projection (`attr`,
//!   `pluck`).
//! - **Values** ([`value`]): the dynamic domain the combinators operate
//!   over: nil, booleans, numbers, strings, shared lists and maps, and
//!   functions.
//!
//! ## Example
//!
//! ```rust
//! use polyadic::args;
//! use polyadic::prelude::*;
//!
//! let sum = Lambda::new(3, |values| {
//!     let total: i64 = values.iter().filter_map(Value::as_int).sum();
//!     Ok(Value::Int(total))
//! });
//!
//! let curried = curry(&sum);
//! assert_eq!(curried.call(&args![1, 2, 3])?, Value::Int(6));
//!
//! let add_three = curried.call(&args![1, 2])?;
//! assert_eq!(add_three.call(&args![3])?, Value::Int(6));
//! # Ok::<(), polyadic::error::CallError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the types and combinators most programs touch.
///
/// # Usage
///
/// ```rust
/// use polyadic::prelude::*;
/// ```
pub mod prelude {
    pub use crate::apply::*;
    pub use crate::combinator::*;
    pub use crate::error::*;
    pub use crate::lambda::*;
    pub use crate::value::*;
}

pub mod apply;
pub mod combinator;
pub mod error;
pub mod lambda;
pub mod value;
