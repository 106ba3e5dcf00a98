//! Unit tests for the combinator layer.
//!
//! Each combinator is a thin policy over the dispatch tier; these tests pin
//! the policies: which positions get fixed, in which order arguments are
//! consumed, and where receivers come from.

use polyadic::apply::curry;
use polyadic::args;
use polyadic::combinator::{
    apply_first, apply_last, apply_left, apply_right, attr, attr_with, bind, bound, collect,
    defaults, flip, get, invoke, pluck, pluck_with, send,
};
use polyadic::error::CallError;
use polyadic::lambda::{Arg, Lambda, __};
use polyadic::value::{List, Value};
use rstest::rstest;

fn as_fun(value: Value) -> Lambda {
    match value {
        Value::Fun(fun) => fun,
        other => panic!("expected a function, found {other:?}"),
    }
}

fn difference() -> Lambda {
    Lambda::new(2, |values| {
        let first = values[0].as_int().unwrap_or(0);
        let second = values[1].as_int().unwrap_or(0);
        Ok(Value::Int(first - second))
    })
}

// =============================================================================
// flip
// =============================================================================

#[rstest]
fn test_flip_swaps_a_binary_pair() {
    let flipped = flip(&difference());
    assert_eq!(flipped.call(&args![2, 10]), Ok(Value::Int(8)));
}

#[rstest]
fn test_flip_holds_in_curried_form() {
    let flipped = flip(&difference());
    let from_ten = as_fun(flipped.call(&args![2]).unwrap());
    assert_eq!(from_ten.call(&args![10]), Ok(Value::Int(8)));
}

#[rstest]
fn test_flip_with_only_a_placeholder_defers() {
    let flipped = flip(&difference());
    let deferred = as_fun(flipped.call(&args![__]).unwrap());
    assert_eq!(deferred.call(&args![2, 10]), Ok(Value::Int(8)));
}

// =============================================================================
// curry
// =============================================================================

#[rstest]
fn test_curry_incremental_and_bulk_agree() {
    let curried = curry(&collect(3));

    let incremental = as_fun(as_fun(curried.call(&args![1]).unwrap()).call(&args![2]).unwrap())
        .call(&args![3])
        .unwrap();
    let bulk = curried.call(&args![1, 2, 3]).unwrap();

    assert_eq!(incremental, Value::list([1, 2, 3]));
    assert_eq!(bulk, incremental);
}

// =============================================================================
// apply_first / apply_last
// =============================================================================

#[rstest]
fn test_apply_first_prepends() {
    let prefixed = as_fun(apply_first(&collect(2), Arg::from("a")).unwrap());
    assert_eq!(prefixed.call(&args!["b"]), Ok(Value::list(["a", "b"])));
}

#[rstest]
fn test_apply_last_appends() {
    let suffixed = as_fun(apply_last(&collect(3), Arg::from("z")).unwrap());
    assert_eq!(
        suffixed.call(&args!["x", "y"]),
        Ok(Value::list(["x", "y", "z"]))
    );
}

#[rstest]
fn test_apply_first_missing_value_is_a_deferred_binder() {
    let binder = as_fun(apply_first(&collect(2), Arg::Missing).unwrap());
    let prefixed = as_fun(binder.call(&args!["a"]).unwrap());
    assert_eq!(prefixed.call(&args!["b"]), Ok(Value::list(["a", "b"])));
}

#[rstest]
fn test_apply_last_missing_value_is_a_deferred_binder() {
    let binder = as_fun(apply_last(&collect(2), Arg::Missing).unwrap());
    let suffixed = as_fun(binder.call(&args!["z"]).unwrap());
    assert_eq!(suffixed.call(&args!["a"]), Ok(Value::list(["a", "z"])));
}

// =============================================================================
// apply_left / apply_right
// =============================================================================

#[rstest]
fn test_apply_left_binds_several_leading_positions() {
    let wrapped = apply_left(&collect(4), &[Value::from(1), Value::from(2)]);
    assert_eq!(wrapped.call(&args![3, 4]), Ok(Value::list([1, 2, 3, 4])));
}

#[rstest]
fn test_apply_right_with_a_wider_target_truncates() {
    let wrapped = apply_right(&collect(3), &[Value::from("z")]);
    assert_eq!(wrapped.arity(), 2);
    assert_eq!(
        wrapped.call(&args!["x", "y", "dropped"]),
        Ok(Value::list(["x", "y", "z"]))
    );
}

#[rstest]
fn test_apply_right_with_a_saturated_target_is_a_thunk() {
    let wrapped = apply_right(&collect(2), &[Value::from(1), Value::from(2)]);
    assert_eq!(wrapped.arity(), 0);
    assert_eq!(wrapped.call(&args![]), Ok(Value::list([1, 2])));
}

#[rstest]
fn test_apply_right_with_a_variadic_target_appends() {
    let wrapped = apply_right(&collect(0), &[Value::from("s")]);
    assert_eq!(
        wrapped.call(&args![1, 2]),
        Ok(Value::list([Value::from(1), Value::from(2), Value::from("s")]))
    );
}

#[rstest]
fn test_apply_right_nested_suffix_order() {
    // later wrappings land closer to the preceding arguments
    let inner = apply_right(&collect(0), &[Value::from("a")]);
    let outer = apply_right(&inner, &[Value::from("b")]);
    assert_eq!(
        outer.call(&args![1, 2]),
        Ok(Value::list([
            Value::from(1),
            Value::from(2),
            Value::from("b"),
            Value::from("a"),
        ]))
    );
}

// =============================================================================
// defaults
// =============================================================================

#[rstest]
#[case(&[1], &[1, 8, 9])]
#[case(&[1, 2], &[1, 2, 9])]
#[case(&[1, 2, 3], &[1, 2, 3])]
fn test_defaults_fills_exactly_whats_missing(#[case] given: &[i64], #[case] expected: &[i64]) {
    let wrapped = defaults(&collect(3), &[Value::from(7), Value::from(8), Value::from(9)]);
    let slots: Vec<Arg> = given.iter().map(|&n| Arg::from(n)).collect();
    let expected: Vec<Value> = expected.iter().map(|&n| Value::from(n)).collect();
    assert_eq!(wrapped.call(&slots), Ok(Value::List(expected.into_iter().collect())));
}

#[rstest]
fn test_defaults_with_a_short_fallback_list() {
    let wrapped = defaults(&collect(3), &[Value::from(9)]);
    assert_eq!(
        wrapped.call(&args![1]),
        Ok(Value::list([Value::Int(1), Value::Int(9), Value::Nil]))
    );
}

// =============================================================================
// bound / send / bind / invoke
// =============================================================================

#[rstest]
fn test_bound_returns_a_deferred_mutator() {
    let list = List::new();
    let pusher = as_fun(bound("push", &[Value::from(1)]).call(&args![list.clone()]).unwrap());

    assert!(list.is_empty());
    pusher.call(&args![]).expect("push succeeds");
    assert_eq!(list.to_vec(), vec![Value::Int(1)]);
}

#[rstest]
fn test_send_invokes_the_named_method() {
    let upcase = send("to_uppercase", &[]);
    assert_eq!(upcase.call(&args!["word"]), Ok(Value::from("WORD")));
}

#[rstest]
fn test_send_passes_bound_then_additional_arguments() {
    let object = Value::map([(
        "pair",
        Lambda::new(3, |values| {
            Ok(Value::list([values[1].clone(), values[2].clone()]))
        }),
    )]);
    let paired = send("pair", &[Value::from("bound")]);
    assert_eq!(
        paired.call(&args![object, "later"]),
        Ok(Value::list(["bound", "later"]))
    );
}

#[rstest]
fn test_missing_method_failure_is_surfaced() {
    let error = send("launch", &[]).call(&args!["word"]).unwrap_err();
    assert_eq!(
        error,
        CallError::MissingMethod {
            kind: "string",
            name: "launch".to_string(),
        }
    );
}

#[rstest]
fn test_bind_keeps_the_receiver_recoverable() {
    let method = Value::from("word").method("len").expect("built-in");
    let fixed = bind(&method, &Value::from("word"));
    assert_eq!(fixed.context(), &Value::from("word"));
    assert_eq!(fixed.unbound(), &method);
    assert_eq!(fixed.call(&args![]), Ok(Value::Int(4)));
}

#[rstest]
fn test_invoke_fixes_arguments_and_awaits_the_receiver() {
    let contains = Value::from("haystack").method("contains").expect("built-in");
    let finder = invoke(&contains, &[Value::from("stack")]);
    assert_eq!(finder.call(&args!["haystack"]), Ok(Value::Bool(true)));
}

// =============================================================================
// attr / pluck
// =============================================================================

#[rstest]
fn test_pluck_projects_an_attribute_across_a_sequence() {
    let people = Value::list([Value::map([("name", "a")]), Value::map([("name", "b")])]);
    assert_eq!(pluck("name", &people), Ok(Value::list(["a", "b"])));
}

#[rstest]
fn test_pluck_with_is_the_curried_form() {
    let people = Value::list([Value::map([("name", "a")]), Value::map([("name", "b")])]);
    let project = pluck_with("name");
    assert_eq!(project.call(&args![people]), Ok(Value::list(["a", "b"])));
}

#[rstest]
fn test_attr_and_get_are_the_same_reader() {
    let object = Value::map([("name", "a")]);
    assert_eq!(attr(&object, Arg::from("name")), Value::from("a"));
    assert_eq!(get(&object, Arg::from("name")), Value::from("a"));
}

#[rstest]
fn test_attr_with_defers_into_a_projection() {
    let projection = as_fun(attr_with("name", Arg::Missing));
    assert_eq!(
        projection.call(&args![Value::map([("name", "c")])]),
        Ok(Value::from("c"))
    );
}
