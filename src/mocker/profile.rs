//! Per-flavor call-surface configuration.
//!
//! A [`Profile`] enumerates the call names a recorder accepts and how each
//! kind is handled: chain calls record ordered expectations returning the
//! builder, the handoff call returns the query mock, and terminal calls
//! record exactly-once expectations with a stubbed result. New builder
//! flavors are new `Profile` values, not new types.

use serde::Deserialize;
use std::collections::BTreeSet;

/// The call surface of one modeled builder flavor.
///
/// Immutable once handed to a recorder. The allow-list is the union of the
/// chain calls, the handoff call, and the terminal calls.
///
/// # Example
///
/// ```rust
/// use querymock::Profile;
///
/// let profile = Profile::new("compile", ["filter", "order_by"], ["fetch"]);
/// assert!(profile.is_allowed("filter"));
/// assert!(profile.is_allowed("compile"));
/// assert!(!profile.is_allowed("explain"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    /// Calls recorded on the builder mock that keep the chain going.
    chain_calls: BTreeSet<String>,
    /// The call whose stubbed return value is the query mock.
    handoff_call: String,
    /// Result-producing calls recorded on the query mock.
    terminal_calls: BTreeSet<String>,
    /// Terminal calls that accept the two-argument (constraint, result) form.
    #[serde(default)]
    two_arg_terminals: BTreeSet<String>,
}

impl Profile {
    /// Build a custom profile from a handoff call, chain calls, and terminal
    /// calls.
    pub fn new<C, T>(handoff_call: impl Into<String>, chain_calls: C, terminal_calls: T) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            chain_calls: chain_calls.into_iter().map(Into::into).collect(),
            handoff_call: handoff_call.into(),
            terminal_calls: terminal_calls.into_iter().map(Into::into).collect(),
            two_arg_terminals: BTreeSet::new(),
        }
    }

    /// Accept one more chain call.
    pub fn with_chain_call(mut self, method: impl Into<String>) -> Self {
        self.chain_calls.insert(method.into());
        self
    }

    /// Accept one more terminal result call.
    pub fn with_terminal_call(mut self, method: impl Into<String>) -> Self {
        self.terminal_calls.insert(method.into());
        self
    }

    /// Opt a terminal call into the two-argument (constraint, result) form.
    pub fn with_two_arg_terminal(mut self, method: impl Into<String>) -> Self {
        let method = method.into();
        self.terminal_calls.insert(method.clone());
        self.two_arg_terminals.insert(method);
        self
    }

    /// The relational (ORM-shaped) builder surface.
    ///
    /// `getQuery` hands off to the query mock; `execute` accepts the
    /// two-argument (constraint, result) form.
    pub fn relational() -> Self {
        Self::new(
            "getQuery",
            [
                "setParameter",
                "setParameters",
                "setFirstResult",
                "setMaxResults",
                "add",
                "select",
                "distinct",
                "addSelect",
                "delete",
                "update",
                "from",
                "join",
                "innerJoin",
                "leftJoin",
                "set",
                "where",
                "andWhere",
                "orWhere",
                "groupBy",
                "addGroupBy",
                "having",
                "andHaving",
                "orHaving",
                "orderBy",
                "addOrderBy",
                "addCriteria",
                "useResultCache",
            ],
            [
                "execute",
                "getSingleResult",
                "getSingleScalarResult",
                "getArrayResult",
                "getOneOrNullResult",
            ],
        )
        .with_two_arg_terminal("execute")
    }

    /// The document (MongoDB-ODM-shaped) builder surface.
    ///
    /// `getQuery` hands off to the query mock; terminal calls take at most
    /// one argument, the stubbed result.
    pub fn document() -> Self {
        Self::new(
            "getQuery",
            [
                "requireIndexes",
                "field",
                "prime",
                "hydrate",
                "refresh",
                "find",
                "findAndUpdate",
                "returnNew",
                "findAndRemove",
                "update",
                "insert",
                "remove",
                "references",
                "includesReferenceTo",
                "addAnd",
                "addManyToSet",
                "addNor",
                "addOr",
                "addToSet",
                "all",
                "count",
                "distanceMultiplier",
                "distinct",
                "eagerCursor",
                "elemMatch",
                "equals",
                "exclude",
                "exists",
                "finalize",
                "geoIntersects",
                "geoNear",
                "geoWithin",
                "geoWithinBox",
                "geoWithinCenter",
                "geoWithinCenterSphere",
                "geoWithinPolygon",
                "getNewObj",
                "setNewObj",
                "setQueryArray",
                "group",
                "gt",
                "gte",
                "hint",
                "immortal",
                "in",
                "inc",
                "limit",
                "lt",
                "lte",
                "map",
                "mapReduce",
                "mapReduceOptions",
                "maxDistance",
                "mod",
                "multiple",
                "near",
                "nearSphere",
                "not",
                "notEqual",
                "notIn",
                "out",
                "popFirst",
                "popLast",
                "pull",
                "pullAll",
                "push",
                "pushAll",
                "range",
                "reduce",
                "rename",
                "select",
                "selectElemMatch",
                "selectSlice",
                "set",
                "setReadPreference",
                "size",
                "skip",
                "slaveOkay",
                "snapshot",
                "sort",
                "spherical",
                "type",
                "unsetField",
                "upsert",
                "where",
                "withinBox",
                "withinCenter",
                "withinCenterSphere",
                "withinPolygon",
            ],
            ["execute", "getSingleResult", "getOneOrNullResult"],
        )
    }

    /// Whether `method` is anywhere on the allow-list.
    pub fn is_allowed(&self, method: &str) -> bool {
        self.chain_calls.contains(method)
            || self.handoff_call == method
            || self.terminal_calls.contains(method)
    }

    /// Whether `method` is a terminal result call.
    pub fn is_terminal(&self, method: &str) -> bool {
        self.terminal_calls.contains(method)
    }

    /// Whether `method` reads the two-argument (constraint, result) form.
    pub fn takes_two_arg_form(&self, method: &str) -> bool {
        self.two_arg_terminals.contains(method)
    }

    /// The call whose stubbed return value is the query mock.
    pub fn handoff_call(&self) -> &str {
        &self.handoff_call
    }
}
