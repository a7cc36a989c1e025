//! # querymock
//!
//! A fluent test-double builder for fluent query-builder APIs.
//!
//! Code that talks to a multi-step query builder is tedious to unit test:
//! every chained call needs its own expectation, its own ordering constraint,
//! and its own stubbed return value. This library collapses all of that into
//! one chained expression. You describe the calls you expect, in order, and
//! get back a pair of test doubles (a builder mock and the query mock it
//! hands off to) that replay the recorded return values and fail the test
//! when the real usage diverges.
//!
//! ## Quick Start
//!
//! ```rust
//! use querymock::{args, QueryBuilderMocker};
//!
//! let mut qbm = QueryBuilderMocker::relational();
//! qbm.call("select", args!["name"])
//!     .call("where", args!["status = ?"])
//!     .call("getQuery", args![])
//!     .call("execute", args!["RESULT"]);
//!
//! // Inject the builder mock into the code under test. Here we exercise it
//! // directly:
//! let qb = qbm.builder_mock();
//! let query = qb
//!     .call("select", args!["name"])
//!     .into_builder()
//!     .call("where", args!["status = ?"])
//!     .into_builder()
//!     .call("getQuery", args![])
//!     .into_query();
//!
//! assert_eq!(query.call("execute", args![]), Some("RESULT".into()));
//! ```
//!
//! Calls replay in the order they were recorded; exercising them out of
//! order, with the wrong arguments, or not at all fails the test. Declaring a
//! call the configured profile does not know about fails immediately at
//! setup time.
//!
//! ## Custom call surfaces
//!
//! The accepted call names are configuration, not code. `Profile::relational`
//! and `Profile::document` model the two common builder flavors; other
//! surfaces can be built up with [`Profile::new`] or loaded from a YAML file
//! (with the `yaml` feature):
//!
//! ```rust
//! use querymock::{args, Profile, QueryBuilderMocker};
//!
//! let profile = Profile::new("compile", ["filter", "order_by"], ["fetch"]);
//! let mut qbm = QueryBuilderMocker::new(profile);
//! qbm.call("filter", args!["age > 21"])
//!     .call("compile", args![])
//!     .call("fetch", args![["row1", "row2"]]);
//!
//! let qb = qbm.builder_mock();
//! let rows = qb
//!     .call("filter", args!["age > 21"])
//!     .into_builder()
//!     .call("compile", args![])
//!     .into_query()
//!     .call("fetch", args![]);
//! assert_eq!(rows, Some(serde_json::json!(["row1", "row2"])));
//! ```

pub mod double;
pub mod mocker;

#[cfg(feature = "yaml")]
pub mod yaml;

// Recorder and configuration
pub use mocker::{MockError, Profile, QueryBuilderMocker};

// Backing doubles
pub use double::{BuilderMock, CallError, QueryMock, Returned, VerifyError};

// Profile loading (feature-gated)
#[cfg(feature = "yaml")]
pub use yaml::{load_profile, YamlError};
