//! The accumulator path for large remaining arities.
//!
//! Arities the ladder does not specialize are served generically: arguments
//! collect into a bound list across calls, and every call re-measures how
//! much of the declared arity is still owed. The fallback raises nothing of
//! its own: it only accumulates, and target errors surface unmodified.

use std::rc::Rc;

use crate::apply::ladder::{rung, Target, RUNGS};
use crate::lambda::{Arg, Lambda, ValueVec};
use crate::value::Value;

/// Wraps a target of the given declared arity with `bound` values already
/// supplied.
///
/// Each call appends the leading supplied values of its slot list to a copy
/// of the bound list (stopping at the first missing slot), then either
/// invokes the target (arity met), hands off to the matching ladder rung
/// (the remainder now fits a rung, so deeply-applied chains finish on the
/// cheap path), or re-wraps itself.
pub(crate) fn fallback(arity: usize, target: Target, bound: ValueVec) -> Lambda {
    let remaining = arity.saturating_sub(bound.len());
    Lambda::from_slots(remaining, move |slots: &[Arg]| {
        let mut gathered = bound.clone();
        for slot in slots {
            match slot {
                Arg::Value(value) => gathered.push(value.clone()),
                Arg::Missing => break,
            }
        }
        if gathered.len() >= arity {
            return target(&gathered);
        }
        let remaining = arity - gathered.len();
        if remaining < RUNGS {
            let target = Rc::clone(&target);
            let prefix = gathered;
            let tail: Target = Rc::new(move |rest: &[Value]| {
                let mut all = prefix.clone();
                all.extend(rest.iter().cloned());
                target(&all)
            });
            Ok(Value::Fun(rung(remaining, tail)))
        } else {
            Ok(Value::Fun(fallback(arity, Rc::clone(&target), gathered)))
        }
    })
}
