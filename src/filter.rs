// 🔍 Filter Engine - conjunction of optional predicates
//
// Each query parameter is an Option. None imposes no constraint;
// Some("") is a real filter that only matches an empty field.
// A record passes iff it satisfies every supplied predicate.

use crate::record::Record;

/// Implemented by each entity's query parameter set
pub trait Filter<T> {
    fn matches(&self, fields: &T) -> bool;
}

// ============================================================================
// PREDICATE HELPERS
// ============================================================================

/// Exact equality; absent filter always passes
pub fn eq<V, F>(wanted: &Option<V>, field: &F) -> bool
where
    V: PartialEq<F>,
    F: ?Sized,
{
    match wanted {
        Some(value) => value == field,
        None => true,
    }
}

/// Exact equality against a nullable field; a missing field never matches a supplied filter
pub fn eq_opt<V, F>(wanted: &Option<V>, field: &Option<F>) -> bool
where
    V: PartialEq<F>,
{
    match (wanted, field) {
        (None, _) => true,
        (Some(value), Some(actual)) => value == actual,
        (Some(_), None) => false,
    }
}

/// Case-insensitive substring containment
pub fn contains_ci(wanted: &Option<String>, field: &str) -> bool {
    match wanted {
        Some(needle) => field.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    }
}

/// Existential match: at least one element's projected value equals the filter
pub fn any_eq<'a, I, E, V, P>(wanted: &Option<V>, items: I, project: P) -> bool
where
    I: IntoIterator<Item = &'a E>,
    E: 'a,
    V: PartialEq,
    P: Fn(&E) -> &V,
{
    match wanted {
        Some(value) => items.into_iter().any(|item| project(item) == value),
        None => true,
    }
}

// ============================================================================
// APPLY
// ============================================================================

/// Keep records matching the filter, preserving input order
pub fn apply<T, Q>(records: Vec<Record<T>>, query: &Q) -> Vec<Record<T>>
where
    Q: Filter<T>,
{
    records
        .into_iter()
        .filter(|record| query.matches(&record.fields))
        .collect()
}
