//! End-to-end tests: record a chain, inject the builder mock into a small
//! piece of code under test, and let the doubles enforce the expectations.

use querymock::{args, BuilderMock, QueryBuilderMocker};
use serde_json::{json, Value};

/// Stand-in for production code that depends on a fluent query builder.
fn find_users_by_status(qb: &BuilderMock, status: &str) -> Option<Value> {
    qb.call("select", args!["name"])
        .into_builder()
        .call("where", args!["status = ?"])
        .into_builder()
        .call("setParameter", args![1, status])
        .into_builder()
        .call("getQuery", args![])
        .into_query()
        .call("execute", args![])
}

#[test]
fn test_recorded_chain_drives_the_code_under_test() {
    let mut qbm = QueryBuilderMocker::relational();
    qbm.call("select", args!["name"])
        .call("where", args!["status = ?"])
        .call("setParameter", args![1, "active"])
        .call("getQuery", args![])
        .call("execute", args![["alice", "bob"]]);

    let qb = qbm.builder_mock();
    let result = find_users_by_status(&qb, "active");

    assert_eq!(result, Some(json!(["alice", "bob"])));
    assert!(qb.verify().is_ok());
    assert!(qbm.query_mock().verify().is_ok());
}

#[test]
#[should_panic(expected = "was called with arguments")]
fn test_diverging_code_under_test_fails_the_test() {
    let mut qbm = QueryBuilderMocker::relational();
    qbm.call("select", args!["name"])
        .call("where", args!["status = ?"])
        .call("setParameter", args![1, "inactive"])
        .call("getQuery", args![])
        .call("execute", args![]);

    let qb = qbm.builder_mock();
    // The code under test binds "active", but "inactive" was recorded.
    find_users_by_status(&qb, "active");
}

#[test]
fn test_handoff_and_terminal_without_builder_calls() {
    let mut qbm = QueryBuilderMocker::relational();
    qbm.call("getQuery", args![]).call("execute", args![]);

    let qb = qbm.builder_mock();
    let result = qb.call("getQuery", args![]).into_query().call("execute", args![]);
    assert_eq!(result, None);
}

#[cfg(feature = "yaml")]
#[test]
fn test_profile_loaded_from_yaml_drives_a_recorder() {
    use std::io::Write;

    let yaml = "\
handoff_call: compile
chain_calls:
  - filter
terminal_calls:
  - fetch
";
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", yaml).unwrap();

    let profile = querymock::load_profile(file.path()).unwrap();
    let mut qbm = QueryBuilderMocker::new(profile);
    qbm.call("filter", args!["x > 1"])
        .call("compile", args![])
        .call("fetch", args![[1, 2, 3]]);

    let qb = qbm.builder_mock();
    let rows = qb
        .call("filter", args!["x > 1"])
        .into_builder()
        .call("compile", args![])
        .into_query()
        .call("fetch", args![]);
    assert_eq!(rows, Some(json!([1, 2, 3])));
}
