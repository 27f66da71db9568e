// Engine module - Core reshaping logic (timeline reconstruction, live diffing, ordering)
// This layer sits between decoded entities (types) and CLI presentation

pub mod live;
pub mod reconstruct;
pub mod sort;

pub use live::{LiveChange, SnapshotCache};
pub use reconstruct::reconstruct;
pub use sort::{SortKey, compare, sort_descending};
