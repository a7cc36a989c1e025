//! The ordered double standing in for the fluent builder.

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;

use super::expectation::{Expectation, ReturnKind};
use super::{format_args, CallError, Returned, VerifyError};

/// Test double for the fluent query builder.
///
/// Holds the ordered expectation table the recorder fills in during setup.
/// Handles are cheap clones over shared state; identity can be checked with
/// [`BuilderMock::ptr_eq`].
///
/// Exercising a call that diverges from the recording (wrong position, wrong
/// name, wrong arguments, or no expectation left) fails the test. Any
/// expectation still pending when the last handle drops fails the test too,
/// unless the thread is already panicking.
#[derive(Debug, Clone)]
pub struct BuilderMock {
    state: Rc<RefCell<State>>,
}

#[derive(Debug)]
struct State {
    expected: Vec<Expectation>,
    cursor: usize,
    checked: bool,
}

impl BuilderMock {
    pub(crate) fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(State {
                expected: Vec::new(),
                cursor: 0,
                checked: false,
            })),
        }
    }

    /// Register the expectation for call number `position` (0-based).
    ///
    /// Positions are dense: each registration takes the next free slot.
    pub(crate) fn expect_at(&self, position: usize, expectation: Expectation) {
        let mut state = self.state.borrow_mut();
        debug_assert_eq!(position, state.expected.len());
        state.expected.push(expectation);
    }

    /// Whether two handles refer to the same underlying double.
    pub fn ptr_eq(a: &BuilderMock, b: &BuilderMock) -> bool {
        Rc::ptr_eq(&a.state, &b.state)
    }

    /// Exercise a call against the recorded expectations.
    ///
    /// Returns the handle the recording configured: the builder mock itself
    /// for chain calls, the query mock for the handoff call.
    ///
    /// # Panics
    ///
    /// Panics if the call diverges from the recorded order, name, or
    /// arguments.
    pub fn call(&self, method: &str, args: Vec<Value>) -> Returned {
        match self.try_call(method, args) {
            Ok(returned) => returned,
            Err(err) => panic!("assertion failed: {}\n{}", err, self.format_recorded()),
        }
    }

    /// Exercise a call without panicking.
    pub fn try_call(&self, method: &str, args: Vec<Value>) -> Result<Returned, CallError> {
        let mut state = self.state.borrow_mut();
        let position = state.cursor;

        let expectation = match state.expected.get(position) {
            Some(expectation) => expectation,
            None => return Err(CallError::Unexpected(method.to_string())),
        };

        if expectation.method != method {
            return Err(CallError::OutOfOrder {
                position: position + 1,
                expected: expectation.method.clone(),
                actual: method.to_string(),
            });
        }

        if let Some(expected_args) = &expectation.args {
            if expected_args != &args {
                return Err(CallError::ArgumentMismatch {
                    method: method.to_string(),
                    expected: format_args(expected_args),
                    actual: format_args(&args),
                });
            }
        }

        let returns = expectation.returns.clone();
        state.cursor += 1;
        drop(state);

        Ok(match returns {
            ReturnKind::Chain => Returned::Builder(self.clone()),
            ReturnKind::Handoff(query) => Returned::Query(query),
        })
    }

    /// Check that every recorded call was exercised.
    ///
    /// Calling this disarms the drop-time check, whatever the outcome, so a
    /// test that inspects the result is not failed a second time.
    pub fn verify(&self) -> Result<(), VerifyError> {
        let mut state = self.state.borrow_mut();
        state.checked = true;
        if state.cursor < state.expected.len() {
            return Err(VerifyError::PendingCalls {
                remaining: state.expected.len() - state.cursor,
                next: state.expected[state.cursor].method.clone(),
            });
        }
        Ok(())
    }

    /// Number of expectations recorded so far.
    pub(crate) fn recorded_len(&self) -> usize {
        self.state.borrow().expected.len()
    }

    fn format_recorded(&self) -> String {
        let state = self.state.borrow();
        if state.expected.is_empty() {
            return "  calls recorded: (none)\n".to_string();
        }

        let mut output = format!("  calls recorded ({}):\n", state.expected.len());
        for (i, expectation) in state.expected.iter().enumerate() {
            let marker = if i < state.cursor { "made" } else { "pending" };
            let args = match &expectation.args {
                Some(args) => format_args(args),
                None => "(..)".to_string(),
            };
            output.push_str(&format!(
                "    {}. {}{} [{}]\n",
                i + 1,
                expectation.method,
                args,
                marker
            ));
        }
        output
    }
}

impl Drop for State {
    fn drop(&mut self) {
        if !self.checked && !std::thread::panicking() && self.cursor < self.expected.len() {
            let next = &self.expected[self.cursor];
            panic!(
                "assertion failed: {} of {} recorded builder call(s) were never made (next expected: \"{}\")",
                self.expected.len() - self.cursor,
                self.expected.len(),
                next.method
            );
        }
    }
}
