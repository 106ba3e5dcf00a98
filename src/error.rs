//! Error types for dynamic calls.
//!
//! Every failure in this crate surfaces verbatim through [`CallError`]:
//! there is no retry, recovery, or logging layer, and a wrapper never
//! catches an error raised by the function it wraps.

/// Represents errors raised while calling or projecting dynamic values.
///
/// # Examples
///
/// ```rust
/// use polyadic::error::CallError;
///
/// let error = CallError::MissingMethod {
///     kind: "integer",
///     name: "push".to_string(),
/// };
/// assert_eq!(
///     format!("{error}"),
///     "`integer` receiver has no method `push`"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallError {
    /// The value is not callable and cannot be adapted into a callable.
    NotCallable {
        /// The kind of value the call was attempted on.
        kind: &'static str,
    },
    /// The receiver does not expose the named method.
    MissingMethod {
        /// The kind of the receiver.
        kind: &'static str,
        /// The method name that was looked up.
        name: String,
    },
    /// A built-in method received an argument of the wrong kind.
    InvalidArgument {
        /// The method that rejected the argument.
        method: &'static str,
        /// The kind of value the method expected.
        expected: &'static str,
        /// The kind of value the method received.
        found: &'static str,
    },
    /// A failure raised by a wrapped function's own body, carried through
    /// unmodified.
    Raised(String),
}

impl std::fmt::Display for CallError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotCallable { kind } => {
                write!(formatter, "cannot call a value of kind `{kind}`")
            }
            Self::MissingMethod { kind, name } => {
                write!(formatter, "`{kind}` receiver has no method `{name}`")
            }
            Self::InvalidArgument {
                method,
                expected,
                found,
            } => {
                write!(
                    formatter,
                    "{method}: expected `{expected}`, received `{found}`"
                )
            }
            Self::Raised(message) => write!(formatter, "{message}"),
        }
    }
}

impl std::error::Error for CallError {}
