//! Built-in methods for receiver values.
//!
//! Stand-ins for host prototypes. Every entry is an unbound method taking
//! the receiver as its first argument, so the binding combinators fix the
//! receiver the same way for built-ins and for map-carried functions.

use crate::error::CallError;
use crate::lambda::Lambda;
use crate::value::{nth, List, Map, Value};

/// The built-in method under `name` for the receiver's kind, if any.
pub(crate) fn lookup(receiver: &Value, name: &str) -> Option<Lambda> {
    match receiver {
        Value::Str(_) => string_method(name),
        Value::List(_) => list_method(name),
        Value::Map(_) => map_method(name),
        _ => None,
    }
}

fn string_method(name: &str) -> Option<Lambda> {
    Some(match name {
        "to_uppercase" => Lambda::new(1, |values| {
            Ok(Value::Str(expect_str(values, 0, "to_uppercase")?.to_uppercase()))
        }),
        "to_lowercase" => Lambda::new(1, |values| {
            Ok(Value::Str(expect_str(values, 0, "to_lowercase")?.to_lowercase()))
        }),
        "trim" => Lambda::new(1, |values| {
            Ok(Value::Str(expect_str(values, 0, "trim")?.trim().to_string()))
        }),
        "len" => Lambda::new(1, |values| {
            Ok(Value::Int(int_len(expect_str(values, 0, "len")?.len())))
        }),
        "contains" => Lambda::new(2, |values| {
            let haystack = expect_str(values, 0, "contains")?;
            let needle = expect_str(values, 1, "contains")?;
            Ok(Value::Bool(haystack.contains(&needle)))
        }),
        "concat" => Lambda::new(2, |values| {
            let mut combined = expect_str(values, 0, "concat")?;
            combined.push_str(&expect_str(values, 1, "concat")?);
            Ok(Value::Str(combined))
        }),
        _ => return None,
    })
}

fn list_method(name: &str) -> Option<Lambda> {
    Some(match name {
        "push" => Lambda::new(2, |values| {
            expect_list(values, 0, "push")?.push(nth(values, 1));
            Ok(Value::Nil)
        }),
        "pop" => Lambda::new(1, |values| {
            Ok(expect_list(values, 0, "pop")?.pop().unwrap_or(Value::Nil))
        }),
        "len" => Lambda::new(1, |values| {
            Ok(Value::Int(int_len(expect_list(values, 0, "len")?.len())))
        }),
        "get" => Lambda::new(2, |values| {
            let list = expect_list(values, 0, "get")?;
            let index = expect_int(values, 1, "get")?;
            Ok(usize::try_from(index)
                .ok()
                .and_then(|index| list.get(index))
                .unwrap_or(Value::Nil))
        }),
        "contains" => Lambda::new(2, |values| {
            Ok(Value::Bool(expect_list(values, 0, "contains")?.contains(&nth(values, 1))))
        }),
        _ => return None,
    })
}

fn map_method(name: &str) -> Option<Lambda> {
    Some(match name {
        "get" => Lambda::new(2, |values| {
            let map = expect_map(values, 0, "get")?;
            let key = expect_str(values, 1, "get")?;
            Ok(map.get(&key).unwrap_or(Value::Nil))
        }),
        "insert" => Lambda::new(3, |values| {
            let map = expect_map(values, 0, "insert")?;
            let key = expect_str(values, 1, "insert")?;
            Ok(map.insert(key, nth(values, 2)).unwrap_or(Value::Nil))
        }),
        "remove" => Lambda::new(2, |values| {
            let map = expect_map(values, 0, "remove")?;
            let key = expect_str(values, 1, "remove")?;
            Ok(map.remove(&key).unwrap_or(Value::Nil))
        }),
        "len" => Lambda::new(1, |values| {
            Ok(Value::Int(int_len(expect_map(values, 0, "len")?.len())))
        }),
        "keys" => Lambda::new(1, |values| {
            let keys = expect_map(values, 0, "keys")?.keys();
            Ok(Value::List(keys.into_iter().map(Value::Str).collect()))
        }),
        "contains_key" => Lambda::new(2, |values| {
            let map = expect_map(values, 0, "contains_key")?;
            let key = expect_str(values, 1, "contains_key")?;
            Ok(Value::Bool(map.contains_key(&key)))
        }),
        _ => return None,
    })
}

fn int_len(length: usize) -> i64 {
    i64::try_from(length).unwrap_or(i64::MAX)
}

fn invalid(method: &'static str, expected: &'static str, values: &[Value], index: usize) -> CallError {
    CallError::InvalidArgument {
        method,
        expected,
        found: values.get(index).map_or("nothing", Value::kind),
    }
}

fn expect_str(values: &[Value], index: usize, method: &'static str) -> Result<String, CallError> {
    match values.get(index) {
        Some(Value::Str(value)) => Ok(value.clone()),
        _ => Err(invalid(method, "string", values, index)),
    }
}

fn expect_int(values: &[Value], index: usize, method: &'static str) -> Result<i64, CallError> {
    match values.get(index) {
        Some(Value::Int(value)) => Ok(*value),
        _ => Err(invalid(method, "integer", values, index)),
    }
}

fn expect_list(values: &[Value], index: usize, method: &'static str) -> Result<List, CallError> {
    match values.get(index) {
        Some(Value::List(list)) => Ok(list.clone()),
        _ => Err(invalid(method, "list", values, index)),
    }
}

fn expect_map(values: &[Value], index: usize, method: &'static str) -> Result<Map, CallError> {
    match values.get(index) {
        Some(Value::Map(map)) => Ok(map.clone()),
        _ => Err(invalid(method, "map", values, index)),
    }
}
