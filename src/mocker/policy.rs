//! Special handling for terminal result calls.
//!
//! Terminal calls break the fluent convention: they are recorded on the
//! query mock, exactly once, and their declared arguments describe the
//! stubbed result rather than an expected-argument constraint. The meaning
//! follows the argument count:
//!
//! - zero arguments: the exercised call returns nothing and its arguments go
//!   unchecked;
//! - one argument: that value is what the exercised call returns;
//! - two or more arguments, for calls the profile opts in: the first value
//!   is the expected-argument constraint and the second the stubbed result.

use serde_json::Value;

use crate::double::QueryMock;

use super::Profile;

/// Record a terminal result call on the query mock.
pub(super) fn record_terminal(query: &QueryMock, profile: &Profile, method: &str, args: Vec<Value>) {
    let mut args = args.into_iter();

    let first = match args.next() {
        // Declared bare: exercised call returns nothing.
        None => {
            query.expect_once(method, None, None);
            return;
        }
        Some(first) => first,
    };

    if profile.takes_two_arg_form(method) {
        if let Some(result) = args.next() {
            query.expect_once(method, normalize_constraint(first), Some(result));
            return;
        }
    }

    // One-argument convention: the value is the stubbed result. Anything
    // past the first argument is ignored, as the modeled API did.
    query.expect_once(method, None, Some(first));
}

/// Shape a declared constraint into an argument list.
///
/// `null` means the exercised call's arguments go unchecked. A sequence is
/// used as-is; any other value, structured ones included, is a single
/// argument and gets wrapped.
fn normalize_constraint(first: Value) -> Option<Vec<Value>> {
    match first {
        Value::Null => None,
        Value::Array(items) => Some(items),
        other => Some(vec![other]),
    }
}
