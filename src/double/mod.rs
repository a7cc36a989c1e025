//! Backing test doubles that enforce the recorded expectations.
//!
//! The recorder in [`crate::mocker`] translates a fluent declaration chain
//! into expectation tables held by two doubles:
//!
//! - [`BuilderMock`] stands in for the fluent builder. Its expectations are
//!   strictly ordered: call N must happen N-th, with the recorded name and
//!   (optionally) arguments.
//! - [`QueryMock`] stands in for the object the handoff call produces. Its
//!   expectations are exactly-once and unordered relative to each other, and
//!   carry a stubbed return value (or the absence of one).
//!
//! Both are cheap cloneable handles over shared state, so the handle a
//! chained call returns can be compared for identity with the handle the
//! test started from. Exercising a call that diverges from the recording
//! panics with a test-failure message; expectations still pending when a
//! double is dropped panic as well, unless the thread is already unwinding.
//! Use `try_call` / `verify` for non-panicking evaluation.

mod builder;
pub(crate) mod expectation;
mod query;

pub use builder::BuilderMock;
pub use query::QueryMock;

use serde_json::Value;

/// What an exercised builder call handed back.
#[derive(Debug, Clone)]
pub enum Returned {
    /// The builder mock itself; the chain continues.
    Builder(BuilderMock),
    /// The query mock; the builder stage is over.
    Query(QueryMock),
}

impl Returned {
    /// Unwrap the builder mock.
    ///
    /// # Panics
    ///
    /// Panics if the call returned the query mock instead.
    pub fn into_builder(self) -> BuilderMock {
        match self {
            Returned::Builder(builder) => builder,
            Returned::Query(_) => {
                panic!("assertion failed: call returned the query mock, expected the builder mock")
            }
        }
    }

    /// Unwrap the query mock.
    ///
    /// # Panics
    ///
    /// Panics if the call returned the builder mock instead.
    pub fn into_query(self) -> QueryMock {
        match self {
            Returned::Query(query) => query,
            Returned::Builder(_) => {
                panic!("assertion failed: call returned the builder mock, expected the query mock")
            }
        }
    }

    /// Whether the call returned the builder mock.
    pub fn is_builder(&self) -> bool {
        matches!(self, Returned::Builder(_))
    }

    /// Whether the call returned the query mock.
    pub fn is_query(&self) -> bool {
        matches!(self, Returned::Query(_))
    }
}

/// An exercised call diverged from the recorded expectations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CallError {
    /// A call for which no expectation remains.
    #[error("unexpected call to \"{0}\"")]
    Unexpected(String),

    /// A call made in the wrong position of the recorded order.
    #[error("call #{position} was expected to be \"{expected}\", got \"{actual}\"")]
    OutOfOrder {
        position: usize,
        expected: String,
        actual: String,
    },

    /// A call made with arguments that differ from the recorded ones.
    #[error("\"{method}\" was called with arguments {actual}, expected {expected}")]
    ArgumentMismatch {
        method: String,
        expected: String,
        actual: String,
    },
}

/// A recorded expectation was never satisfied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    /// Recorded builder calls that were never exercised.
    #[error("{remaining} recorded builder call(s) were never made (next expected: \"{next}\")")]
    PendingCalls { remaining: usize, next: String },

    /// A terminal call recorded as exactly-once that never happened.
    #[error("\"{0}\" was expected exactly once but never called")]
    NeverCalled(String),
}

/// Render an argument list for failure messages.
pub(crate) fn format_args(args: &[Value]) -> String {
    let rendered: Vec<String> = args.iter().map(Value::to_string).collect();
    format!("({})", rendered.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_args_empty() {
        assert_eq!(format_args(&[]), "()");
    }

    #[test]
    fn test_format_args_mixed() {
        let args = vec![json!("a"), json!(1), json!({"k": "v"})];
        assert_eq!(format_args(&args), r#"("a", 1, {"k":"v"})"#);
    }

    #[test]
    fn test_call_error_messages() {
        let err = CallError::Unexpected("foo".to_string());
        assert_eq!(err.to_string(), "unexpected call to \"foo\"");

        let err = CallError::OutOfOrder {
            position: 2,
            expected: "where".to_string(),
            actual: "select".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "call #2 was expected to be \"where\", got \"select\""
        );
    }
}
