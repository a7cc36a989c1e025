//! The exactly-once double standing in for the produced query object.

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;

use super::expectation::TerminalExpectation;
use super::{format_args, CallError, VerifyError};

/// Test double for the result-producing query object.
///
/// Each recorded call is expected exactly once. Unlike [`super::BuilderMock`]
/// there is no ordering between expectations; a test typically issues a
/// single terminal call. Exercising a call returns the stubbed value, or
/// `None` when none was configured.
#[derive(Debug, Clone)]
pub struct QueryMock {
    state: Rc<RefCell<State>>,
}

#[derive(Debug)]
struct State {
    expected: Vec<TerminalExpectation>,
    checked: bool,
}

impl QueryMock {
    pub(crate) fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(State {
                expected: Vec::new(),
                checked: false,
            })),
        }
    }

    /// Register an exactly-once expectation with an optional argument
    /// constraint and an optional stubbed result.
    pub(crate) fn expect_once(&self, method: &str, args: Option<Vec<Value>>, result: Option<Value>) {
        self.state
            .borrow_mut()
            .expected
            .push(TerminalExpectation::new(method, args, result));
    }

    /// Whether two handles refer to the same underlying double.
    pub fn ptr_eq(a: &QueryMock, b: &QueryMock) -> bool {
        Rc::ptr_eq(&a.state, &b.state)
    }

    /// Exercise a terminal call, returning its stubbed value.
    ///
    /// # Panics
    ///
    /// Panics if the call was not recorded, was already made, or carries
    /// arguments that differ from the recorded constraint.
    pub fn call(&self, method: &str, args: Vec<Value>) -> Option<Value> {
        match self.try_call(method, args) {
            Ok(result) => result,
            Err(err) => panic!("assertion failed: {}", err),
        }
    }

    /// Exercise a terminal call without panicking.
    pub fn try_call(&self, method: &str, args: Vec<Value>) -> Result<Option<Value>, CallError> {
        let mut state = self.state.borrow_mut();

        let index = state
            .expected
            .iter()
            .position(|e| e.method == method && !e.called)
            .ok_or_else(|| CallError::Unexpected(method.to_string()))?;

        let expectation = &mut state.expected[index];
        if let Some(expected_args) = &expectation.args {
            if expected_args != &args {
                return Err(CallError::ArgumentMismatch {
                    method: method.to_string(),
                    expected: format_args(expected_args),
                    actual: format_args(&args),
                });
            }
        }

        expectation.called = true;
        Ok(expectation.result.clone())
    }

    /// Check that every recorded terminal call happened.
    ///
    /// Calling this disarms the drop-time check, whatever the outcome.
    pub fn verify(&self) -> Result<(), VerifyError> {
        let mut state = self.state.borrow_mut();
        state.checked = true;
        match state.expected.iter().find(|e| !e.called) {
            Some(missed) => Err(VerifyError::NeverCalled(missed.method.clone())),
            None => Ok(()),
        }
    }
}

impl Drop for State {
    fn drop(&mut self) {
        if self.checked || std::thread::panicking() {
            return;
        }
        if let Some(missed) = self.expected.iter().find(|e| !e.called) {
            panic!(
                "assertion failed: \"{}\" was expected exactly once but never called",
                missed.method
            );
        }
    }
}
