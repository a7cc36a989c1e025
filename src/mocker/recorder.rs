//! The expectation recorder behind the fluent declaration chain.

use serde_json::Value;

use crate::double::expectation::{Expectation, ReturnKind};
use crate::double::{BuilderMock, QueryMock};

use super::{policy, Profile};

/// A declared call was rejected at setup time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MockError {
    /// The call name is not on the profile's allow-list. The test is
    /// exercising functionality the mocker was not configured to understand.
    #[error("mocking \"{0}\" is not supported")]
    UnsupportedCall(String),
}

/// Records a fluent chain of expected builder calls against a pair of test
/// doubles.
///
/// Construct one per test case. Every recorded chain call becomes an ordered
/// expectation on the builder mock, stubbed to return the builder mock
/// itself; the handoff call is stubbed to return the query mock instead; and
/// terminal calls become exactly-once expectations on the query mock with a
/// caller-supplied result. Once setup is done, [`builder_mock`] hands out
/// the double to inject into the code under test — the doubles enforce the
/// expectations on their own from there.
///
/// [`builder_mock`]: QueryBuilderMocker::builder_mock
///
/// # Example
///
/// ```rust
/// use querymock::{args, QueryBuilderMocker};
///
/// let mut qbm = QueryBuilderMocker::relational();
/// qbm.call("select", args!["fieldName"])
///     .call("where", args!["property = ?"])
///     .call("getQuery", args![])
///     .call("execute", args!["RESULT"]);
/// # let qb = qbm.builder_mock();
/// # let q = qb.call("select", args!["fieldName"]).into_builder()
/// #     .call("where", args!["property = ?"]).into_builder()
/// #     .call("getQuery", args![]).into_query();
/// # assert_eq!(q.call("execute", args![]), Some("RESULT".into()));
/// ```
#[derive(Debug)]
pub struct QueryBuilderMocker {
    profile: Profile,
    at: usize,
    builder: BuilderMock,
    query: QueryMock,
}

impl QueryBuilderMocker {
    /// Create a recorder for the given call surface, with fresh doubles.
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            at: 0,
            builder: BuilderMock::new(),
            query: QueryMock::new(),
        }
    }

    /// Recorder for the relational (ORM-shaped) surface.
    pub fn relational() -> Self {
        Self::new(Profile::relational())
    }

    /// Recorder for the document (MongoDB-ODM-shaped) surface.
    pub fn document() -> Self {
        Self::new(Profile::document())
    }

    /// Record one expected call.
    ///
    /// Returns the recorder so declarations chain.
    ///
    /// # Panics
    ///
    /// Panics if `method` is not on the profile's allow-list.
    pub fn call(&mut self, method: &str, args: Vec<Value>) -> &mut Self {
        match self.try_call(method, args) {
            Ok(recorder) => recorder,
            Err(err) => panic!("{}", err),
        }
    }

    /// Record one expected call without panicking.
    ///
    /// A rejected call leaves the recorder untouched: no expectation is
    /// registered and no sequence slot is consumed.
    pub fn try_call(&mut self, method: &str, args: Vec<Value>) -> Result<&mut Self, MockError> {
        if !self.profile.is_allowed(method) {
            return Err(MockError::UnsupportedCall(method.to_string()));
        }

        // The policy table wins over default dispatch.
        if self.profile.is_terminal(method) {
            policy::record_terminal(&self.query, &self.profile, method, args);
            return Ok(self);
        }

        let constraint = if args.is_empty() { None } else { Some(args) };
        let returns = if method == self.profile.handoff_call() {
            ReturnKind::Handoff(self.query.clone())
        } else {
            ReturnKind::Chain
        };

        self.builder
            .expect_at(self.at, Expectation::new(method, constraint, returns));
        self.at += 1;
        Ok(self)
    }

    /// The double standing in for the fluent builder, for injection into the
    /// code under test.
    pub fn builder_mock(&self) -> BuilderMock {
        self.builder.clone()
    }

    /// The double standing in for the produced query object, for advanced
    /// assertions.
    pub fn query_mock(&self) -> QueryMock {
        self.query.clone()
    }
}
