//! Expectation records and the `args!` argument-list macro.

use serde_json::Value;

use super::QueryMock;

/// What a recorded builder call hands back when exercised.
#[derive(Debug, Clone)]
pub(crate) enum ReturnKind {
    /// The builder mock itself, continuing the chain.
    Chain,
    /// The query mock, ending the builder stage.
    Handoff(QueryMock),
}

/// An ordered expectation against the builder mock.
///
/// `args` of `None` means the exercised call's arguments go unchecked;
/// `Some` constrains them by structural equality.
#[derive(Debug, Clone)]
pub(crate) struct Expectation {
    pub(crate) method: String,
    pub(crate) args: Option<Vec<Value>>,
    pub(crate) returns: ReturnKind,
}

impl Expectation {
    pub(crate) fn new(method: &str, args: Option<Vec<Value>>, returns: ReturnKind) -> Self {
        Self {
            method: method.to_string(),
            args,
            returns,
        }
    }
}

/// An exactly-once expectation against the query mock.
///
/// `result` of `None` means the exercised call returns nothing.
#[derive(Debug, Clone)]
pub(crate) struct TerminalExpectation {
    pub(crate) method: String,
    pub(crate) args: Option<Vec<Value>>,
    pub(crate) result: Option<Value>,
    pub(crate) called: bool,
}

impl TerminalExpectation {
    pub(crate) fn new(method: &str, args: Option<Vec<Value>>, result: Option<Value>) -> Self {
        Self {
            method: method.to_string(),
            args,
            result,
            called: false,
        }
    }
}

/// Build an argument list from expressions.
///
/// Each expression is converted to a [`serde_json::Value`], so scalars,
/// strings, and `json!`-style literals all work.
///
/// # Example
///
/// ```rust
/// use querymock::args;
///
/// let list = args!["name", 42, ["a", "b"]];
/// assert_eq!(list.len(), 3);
///
/// let empty = args![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! args {
    ($($value:tt),* $(,)?) => {{
        let list: Vec<::serde_json::Value> = vec![$(::serde_json::json!($value)),*];
        list
    }};
}
