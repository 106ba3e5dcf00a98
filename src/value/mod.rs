//! The dynamic value domain.
//!
//! Every combinator in this crate transforms functions whose arguments and
//! results live in a single domain, [`Value`]. The domain carries plain data
//! (nil, booleans, numbers, strings), two shared containers ([`List`] and
//! [`Map`]), and callables ([`Lambda`](crate::lambda::Lambda)), so a
//! function is an ordinary value that other functions can receive, return,
//! and wrap.
//!
//! Containers share storage across clones: a list handed to a bound method
//! and mutated through it is observably mutated through every other handle.
//! This mirrors how receivers behave in the dynamic hosts this toolkit is
//! modeled on, and it is what makes `bound("push", ..)` useful.
//!
//! # Attribute and method lookup
//!
//! [`Value::attribute`] is total: reading an absent attribute (or reading an
//! attribute off a value that has none) yields [`Value::Nil`]. Method lookup
//! ([`Value::method`]) is partial and fails with
//! [`CallError::MissingMethod`]: a map's own function-valued entries act as
//! its methods, and built-in method tables stand in for host prototypes on
//! strings, lists, and maps.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::error::CallError;
use crate::lambda::{Arg, Lambda};

mod methods;

/// A runtime value: the single domain the combinators operate over.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The absent value.
    Nil,
    /// A boolean.
    Bool(bool),
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit float.
    Float(f64),
    /// An owned string.
    Str(String),
    /// A shared, mutable sequence of values.
    List(List),
    /// A shared, mutable mapping from string keys to values.
    Map(Map),
    /// A callable with a declared arity.
    Fun(Lambda),
}

impl Value {
    /// A short name for the value's kind, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Fun(_) => "function",
        }
    }

    /// Builds a list value from anything convertible to values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polyadic::value::Value;
    ///
    /// let numbers = Value::list([1, 2, 3]);
    /// assert_eq!(numbers.as_list().map(polyadic::value::List::len), Some(3));
    /// ```
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::List(items.into_iter().collect())
    }

    /// Builds a map value from key/value pairs.
    pub fn map<I, K, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<Self>,
    {
        Self::Map(entries.into_iter().collect())
    }

    /// Whether this is the nil value.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// The boolean inside, if any.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// The integer inside, if any.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// The float inside, if any.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// The string inside, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    /// The list inside, if any.
    #[must_use]
    pub const fn as_list(&self) -> Option<&List> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// The map inside, if any.
    #[must_use]
    pub const fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// The callable inside, if any.
    #[must_use]
    pub const fn as_fun(&self) -> Option<&Lambda> {
        match self {
            Self::Fun(fun) => Some(fun),
            _ => None,
        }
    }

    /// Calls the value with the given argument slots.
    ///
    /// # Errors
    ///
    /// [`CallError::NotCallable`] unless the value is a function; otherwise
    /// whatever the function's body raises.
    pub fn call(&self, args: &[Arg]) -> Result<Self, CallError> {
        match self {
            Self::Fun(fun) => fun.call(args),
            other => Err(CallError::NotCallable { kind: other.kind() }),
        }
    }

    /// Reads the named attribute.
    ///
    /// Total: absent attributes, and attribute reads on values that carry
    /// none, yield [`Value::Nil`].
    #[must_use]
    pub fn attribute(&self, name: &str) -> Self {
        match self {
            Self::Map(map) => map.get(name).unwrap_or(Self::Nil),
            _ => Self::Nil,
        }
    }

    /// Looks up the named method, returned unbound: the method takes the
    /// receiver as its first argument.
    ///
    /// A map's own function-valued entry wins over the built-in table for
    /// its kind.
    ///
    /// # Errors
    ///
    /// [`CallError::MissingMethod`] when the receiver does not expose the
    /// named method.
    pub fn method(&self, name: &str) -> Result<Lambda, CallError> {
        if let Self::Map(map) = self {
            if let Some(Self::Fun(fun)) = map.get(name) {
                return Ok(fun);
            }
        }
        methods::lookup(self, name).ok_or_else(|| CallError::MissingMethod {
            kind: self.kind(),
            name: name.to_string(),
        })
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<List> for Value {
    fn from(value: List) -> Self {
        Self::List(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Self::Map(value)
    }
}

impl From<Lambda> for Value {
    fn from(value: Lambda) -> Self {
        Self::Fun(value)
    }
}

/// The value at `index`, or `Nil` past the end of the slice.
pub(crate) fn nth(values: &[Value], index: usize) -> Value {
    values.get(index).cloned().unwrap_or(Value::Nil)
}

/// A shared, mutable sequence of values.
///
/// Clones share storage, so a list mutated through one handle is mutated
/// through all of them. Mutation goes through `&self`: the list is a handle,
/// not an owner.
#[derive(Clone, Default)]
pub struct List {
    items: Rc<RefCell<Vec<Value>>>,
}

impl List {
    /// An empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Whether the list holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Appends a value.
    pub fn push(&self, value: Value) {
        self.items.borrow_mut().push(value);
    }

    /// Removes and returns the last value.
    pub fn pop(&self) -> Option<Value> {
        self.items.borrow_mut().pop()
    }

    /// The value at `index`, cloned out.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Value> {
        self.items.borrow().get(index).cloned()
    }

    /// Whether any item equals `value`.
    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        self.items.borrow().contains(value)
    }

    /// A snapshot of the current items.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Value> {
        self.items.borrow().clone()
    }
}

impl<T: Into<Value>> FromIterator<T> for List {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: Rc::new(RefCell::new(iter.into_iter().map(Into::into).collect())),
        }
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        *self.items.borrow() == *other.items.borrow()
    }
}

impl fmt::Debug for List {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.items.borrow().iter()).finish()
    }
}

/// A shared, mutable mapping from string keys to values.
///
/// The same sharing rules as [`List`]: clones are handles onto one store.
/// Entries holding functions double as the map's methods.
#[derive(Clone, Default)]
pub struct Map {
    entries: Rc<RefCell<BTreeMap<String, Value>>>,
}

impl Map {
    /// An empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Inserts an entry, returning the previous value under the key.
    pub fn insert(&self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.borrow_mut().insert(key.into(), value)
    }

    /// The value under `key`, cloned out.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries.borrow().get(key).cloned()
    }

    /// Removes and returns the entry under `key`.
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.entries.borrow_mut().remove(key)
    }

    /// Whether an entry exists under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    /// The keys, in sorted order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }
}

impl<K: Into<String>, T: Into<Value>> FromIterator<(K, T)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self {
            entries: Rc::new(RefCell::new(
                iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect(),
            )),
        }
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        *self.entries.borrow() == *other.entries.borrow()
    }
}

impl fmt::Debug for Map {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.entries.borrow().iter()).finish()
    }
}
