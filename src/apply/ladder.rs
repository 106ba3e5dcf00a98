//! Specialized wrappers for small remaining arities.
//!
//! One hand-written rung per remaining arity 0 through 4. Each rung matches
//! its argument slots positionally, with no accumulator loop, and implements
//! the missing-argument convention directly:
//!
//! - every slot supplied: invoke the target with those values, in order;
//! - first slot absent or missing: return a wrapper behaviorally identical
//!   to this one (a call with nothing to add defers, it never errors);
//! - a later slot absent or missing: bind the supplied prefix into the
//!   target and step down to the rung matching what remains. Slots after
//!   the first missing one are dropped: positions fill strictly left to
//!   right.
//!
//! The nullary rung always invokes, forwarding whatever values were
//! supplied; that is how variadic targets receive their arguments. Extra
//! arguments beyond a rung's width are ignored, not an error.

use std::rc::Rc;
use std::slice;

use crate::error::CallError;
use crate::lambda::{Arg, Lambda, ValueVec};
use crate::value::Value;

/// Remaining arities served by the ladder; at or above this count the
/// accumulator path takes over.
pub(crate) const RUNGS: usize = 5;

/// A strict application target, invoked only with fully-supplied values.
pub(crate) type Target = Rc<dyn Fn(&[Value]) -> Result<Value, CallError>>;

/// The lambda's body as a strict target.
pub(crate) fn target_of(fun: &Lambda) -> Target {
    let fun = fun.clone();
    Rc::new(move |values| fun.invoke(values))
}

/// Selects the rung for a remaining arity below [`RUNGS`].
pub(crate) fn rung(remaining: usize, target: Target) -> Lambda {
    debug_assert!(remaining < RUNGS);
    match remaining {
        0 => nullary(target),
        1 => unary(target),
        2 => binary(target),
        3 => ternary(target),
        _ => quaternary(target),
    }
}

/// The value in the slot, unless the slot is absent or missing.
fn supplied(slots: &[Arg], index: usize) -> Option<&Value> {
    match slots.get(index) {
        Some(Arg::Value(value)) => Some(value),
        _ => None,
    }
}

/// Fixes an already-supplied prefix in front of the target's arguments.
fn bind_prefix(target: &Target, prefix: &[Value]) -> Target {
    let target = Rc::clone(target);
    let prefix: ValueVec = prefix.iter().cloned().collect();
    Rc::new(move |rest: &[Value]| {
        let mut all = prefix.clone();
        all.extend(rest.iter().cloned());
        target(&all)
    })
}

fn nullary(target: Target) -> Lambda {
    Lambda::from_slots(0, move |slots| {
        let mut values = ValueVec::new();
        for slot in slots {
            match slot {
                Arg::Value(value) => values.push(value.clone()),
                Arg::Missing => break,
            }
        }
        target(&values)
    })
}

fn unary(target: Target) -> Lambda {
    Lambda::from_slots(1, move |slots| match supplied(slots, 0) {
        Some(a) => target(slice::from_ref(a)),
        None => Ok(Value::Fun(unary(Rc::clone(&target)))),
    })
}

fn binary(target: Target) -> Lambda {
    Lambda::from_slots(2, move |slots| {
        match (supplied(slots, 0), supplied(slots, 1)) {
            (Some(a), Some(b)) => target(&[a.clone(), b.clone()]),
            (Some(a), None) => Ok(Value::Fun(unary(bind_prefix(
                &target,
                slice::from_ref(a),
            )))),
            (None, _) => Ok(Value::Fun(binary(Rc::clone(&target)))),
        }
    })
}

fn ternary(target: Target) -> Lambda {
    Lambda::from_slots(3, move |slots| {
        match (supplied(slots, 0), supplied(slots, 1), supplied(slots, 2)) {
            (Some(a), Some(b), Some(c)) => target(&[a.clone(), b.clone(), c.clone()]),
            (Some(a), Some(b), None) => Ok(Value::Fun(unary(bind_prefix(
                &target,
                &[a.clone(), b.clone()],
            )))),
            (Some(a), None, _) => Ok(Value::Fun(binary(bind_prefix(
                &target,
                slice::from_ref(a),
            )))),
            (None, ..) => Ok(Value::Fun(ternary(Rc::clone(&target)))),
        }
    })
}

fn quaternary(target: Target) -> Lambda {
    Lambda::from_slots(4, move |slots| {
        match (
            supplied(slots, 0),
            supplied(slots, 1),
            supplied(slots, 2),
            supplied(slots, 3),
        ) {
            (Some(a), Some(b), Some(c), Some(d)) => {
                target(&[a.clone(), b.clone(), c.clone(), d.clone()])
            }
            (Some(a), Some(b), Some(c), None) => Ok(Value::Fun(unary(bind_prefix(
                &target,
                &[a.clone(), b.clone(), c.clone()],
            )))),
            (Some(a), Some(b), None, _) => Ok(Value::Fun(binary(bind_prefix(
                &target,
                &[a.clone(), b.clone()],
            )))),
            (Some(a), None, ..) => Ok(Value::Fun(ternary(bind_prefix(
                &target,
                slice::from_ref(a),
            )))),
            (None, ..) => Ok(Value::Fun(quaternary(Rc::clone(&target)))),
        }
    })
}
