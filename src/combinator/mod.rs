//! Thin policies over the dispatch tier.
//!
//! Nothing here decides when to invoke: that stays with the wrappers built
//! by [`curry`](crate::apply::curry) and its machinery. Each combinator
//! only chooses *which* positions to fix, *in which order* arguments are
//! consumed, or *where* a receiver comes from:
//!
//! - [`flip`]: argument-order reversal;
//! - [`apply_first`] / [`apply_last`]: fix one argument at an end;
//! - [`apply_left`] / [`apply_right`]: fix one or more arguments at an
//!   end;
//! - [`defaults`]: fallback values for missing trailing arguments;
//! - [`collect`]: gather arguments into a list;
//! - [`bind`] / [`bound`] / [`send`] / [`invoke`]: receiver binding and
//!   message sending;
//! - [`attr`] / [`attr_with`] / [`pluck`] / [`pluck_with`] /
//!   [`map_with`]: attribute projection over objects and sequences.

mod binding;
mod partial;
mod projection;

pub use binding::{bind, bound, invoke, send, BoundFn};
pub use partial::{apply_first, apply_last, apply_left, apply_right, collect, defaults, flip};
pub use projection::attr as get;
pub use projection::{attr, attr_with, map_with, pluck, pluck_with};
