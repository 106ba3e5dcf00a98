//! Property-based tests for the application protocol.
//!
//! The laws verified here:
//!
//! ## Application Laws
//! - **Agreement**: a wrapped callable applied to all of its arguments at
//!   once returns exactly what the underlying callable returns.
//! - **Split Agreement**: applying `k` arguments and then the remaining
//!   `n - k` equals applying all `n` at once, for every split point; the
//!   caller cannot tell the specialized tier from the accumulator.
//!
//! ## Deferral Laws
//! - **Idempotence**: a call supplying nothing returns a wrapper that
//!   behaves exactly like the one called.
//!
//! ## Flip Laws
//! - **Flip Definition**: `flip(f)(a, b) == f(b, a)`.
//! - **Double Flip Identity**: `flip(flip(f))` behaves like `f`.
//!
//! Using proptest, random argument lists exercise these laws across both
//! dispatch tiers.

use polyadic::apply::curry;
use polyadic::args;
use polyadic::combinator::flip;
use polyadic::lambda::{Arg, Lambda};
use polyadic::value::Value;
use proptest::prelude::*;

fn gather(arity: usize) -> Lambda {
    Lambda::new(arity, |values| {
        Ok(Value::List(values.iter().cloned().collect()))
    })
}

fn to_values(numbers: &[i64]) -> Vec<Value> {
    numbers.iter().map(|&number| Value::Int(number)).collect()
}

fn to_slots(numbers: &[i64]) -> Vec<Arg> {
    numbers
        .iter()
        .map(|&number| Arg::Value(Value::Int(number)))
        .collect()
}

fn as_fun(value: Value) -> Lambda {
    match value {
        Value::Fun(fun) => fun,
        other => panic!("expected a function, found {other:?}"),
    }
}

// =============================================================================
// Application Laws
// =============================================================================

proptest! {
    /// Agreement: wrapped full application equals direct invocation.
    #[test]
    fn prop_wrapped_equals_direct(numbers in prop::collection::vec(any::<i64>(), 0..9)) {
        let arity = numbers.len();
        let fun = gather(arity);

        let direct = fun.invoke(&to_values(&numbers)).unwrap();
        let wrapped = curry(&fun).call(&to_slots(&numbers)).unwrap();

        prop_assert_eq!(wrapped, direct);
    }

    /// Split Agreement: applying k arguments then the remaining n - k
    /// equals applying all n at once.
    #[test]
    fn prop_split_application_agrees(
        numbers in prop::collection::vec(any::<i64>(), 1..9),
        split in any::<prop::sample::Index>(),
    ) {
        let arity = numbers.len();
        let k = split.index(arity);
        let fun = gather(arity);
        let curried = curry(&fun);

        let bulk = curried.call(&to_slots(&numbers)).unwrap();

        let partial = as_fun(curried.call(&to_slots(&numbers[..k])).unwrap());
        let stepped = partial.call(&to_slots(&numbers[k..])).unwrap();

        prop_assert_eq!(stepped, bulk);
    }

    /// One-by-one application equals bulk application.
    #[test]
    fn prop_one_by_one_equals_bulk(numbers in prop::collection::vec(any::<i64>(), 1..9)) {
        let arity = numbers.len();
        let curried = curry(&gather(arity));

        let bulk = curried.call(&to_slots(&numbers)).unwrap();

        let mut current = Value::Fun(curried);
        for &number in &numbers {
            current = current.call(&args![number]).unwrap();
        }

        prop_assert_eq!(current, bulk);
    }
}

// =============================================================================
// Deferral Laws
// =============================================================================

proptest! {
    /// Idempotence: a call supplying nothing changes nothing.
    #[test]
    fn prop_deferral_is_idempotent(numbers in prop::collection::vec(any::<i64>(), 1..9)) {
        let arity = numbers.len();
        let curried = curry(&gather(arity));

        let expected = curried.call(&to_slots(&numbers)).unwrap();

        let deferred = as_fun(curried.call(&args![]).unwrap());
        let twice = as_fun(deferred.call(&args![]).unwrap());

        prop_assert_eq!(deferred.arity(), arity);
        prop_assert_eq!(twice.call(&to_slots(&numbers)).unwrap(), expected);
    }
}

// =============================================================================
// Flip Laws
// =============================================================================

proptest! {
    /// Flip Definition: flip(f)(a, b) == f(b, a).
    #[test]
    fn prop_flip_definition(a in any::<i64>(), b in any::<i64>()) {
        let fun = gather(2);
        let flipped = flip(&fun);

        prop_assert_eq!(
            flipped.call(&args![a, b]).unwrap(),
            fun.invoke(&[Value::Int(b), Value::Int(a)]).unwrap()
        );
    }

    /// Flip Definition holds when the arguments arrive one at a time.
    #[test]
    fn prop_flip_definition_curried(a in any::<i64>(), b in any::<i64>()) {
        let fun = gather(2);
        let flipped = flip(&fun);

        let second = as_fun(flipped.call(&args![a]).unwrap());

        prop_assert_eq!(
            second.call(&args![b]).unwrap(),
            fun.invoke(&[Value::Int(b), Value::Int(a)]).unwrap()
        );
    }

    /// Double Flip Identity: flip(flip(f)) behaves like f.
    #[test]
    fn prop_double_flip_identity(numbers in prop::collection::vec(any::<i64>(), 0..7)) {
        let arity = numbers.len();
        let fun = gather(arity);
        let twice = flip(&flip(&fun));

        prop_assert_eq!(
            twice.call(&to_slots(&numbers)).unwrap(),
            fun.invoke(&to_values(&numbers)).unwrap()
        );
    }
}
