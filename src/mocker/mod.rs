//! Fluent expectation recording for query-builder doubles.
//!
//! [`QueryBuilderMocker`] is the entry point: the test author issues one
//! chained expression mirroring the real builder API, and every call is
//! recorded as an expectation against the backing doubles in
//! [`crate::double`]. Most calls follow the fluent convention and are stubbed
//! to return the builder mock itself; the handoff call returns the query
//! mock, and terminal result calls are stubbed with a caller-supplied value.
//!
//! Which names mean what is configuration, carried by a [`Profile`].
//!
//! # Example
//!
//! ```rust
//! use querymock::{args, QueryBuilderMocker};
//!
//! let mut qbm = QueryBuilderMocker::relational();
//! qbm.call("select", args!["u"])
//!     .call("from", args!["users", "u"])
//!     .call("getQuery", args![])
//!     .call("getSingleResult", args![{"id": 1}]);
//!
//! let qb = qbm.builder_mock();
//! // hand `qb` to the code under test...
//! # let query = qb.call("select", args!["u"]).into_builder()
//! #     .call("from", args!["users", "u"]).into_builder()
//! #     .call("getQuery", args![]).into_query();
//! # assert_eq!(query.call("getSingleResult", args![]), Some(serde_json::json!({"id": 1})));
//! ```

mod policy;
mod profile;
mod recorder;

pub use profile::Profile;
pub use recorder::{MockError, QueryBuilderMocker};
