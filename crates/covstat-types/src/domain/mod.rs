mod summary;
mod territory;
mod timeline;

pub use summary::Summary;
pub use territory::{ListEntry, ListEntryDifference};
pub use timeline::{Subject, Timeline, TimelineEntry, TimelineSeries};

/// `cases - deaths - recovered`, or `None` when any input is absent.
/// Not clamped: inconsistent source data may yield a negative count.
pub fn derive_active(
    cases: Option<f64>,
    deaths: Option<f64>,
    recovered: Option<f64>,
) -> Option<f64> {
    Some(cases? - deaths? - recovered?)
}
