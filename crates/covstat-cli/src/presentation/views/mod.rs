//! Table layouts per command and the projection of entities into cells.

pub mod list;
pub mod live;
pub mod summary;
pub mod timeline;

/// Width of every numeric column unless a layout says otherwise
pub const METRIC_WIDTH: usize = 12;
pub const TERRITORY_WIDTH: usize = 24;
