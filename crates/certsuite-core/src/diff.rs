//! Schema-agnostic diff engine for decoded claim subtrees.
//!
//! Two [`Value`](crate::Value) trees are flattened into ordered
//! `path -> scalar` lists and compared by path. The result, [`Diffs`], holds
//! three disjoint groups:
//!
//! - fields present in both trees whose values differ,
//! - fields present only in the first tree (claim 1),
//! - fields present only in the second tree (claim 2).
//!
//! # Paths
//!
//! A field path joins every traversal step with `/`: object keys by name and
//! array elements by index, e.g. `/clus0-0/0/plugins/1/ipMasq`. Object keys
//! are always visited in sorted order and arrays in index order, so the same
//! tree always produces the same list.
//!
//! # Filters
//!
//! A non-empty filter list restricts the comparison to leaves whose path
//! contains `/<filter>/` for at least one filter. A leaf matching several
//! filters is emitted once per match.
mod engine;
mod render;
mod traverse;
mod types;

pub use engine::compare;
pub(crate) use render::NO_DIFFS;
pub use traverse::{Field, PATH_DELIMITER, traverse};
pub use types::{Diffs, FieldDiff};

#[cfg(test)]
mod tests;
