use covstat_types::ListEntry;
use std::cmp::Ordering;

/// Metric a list is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Cases,
    CasesToday,
    Deaths,
    DeathsToday,
    Recovered,
    RecoveredToday,
    Active,
}

impl SortKey {
    /// The sort value of `entry`; a missing metric counts as zero.
    /// Negative zero is folded into zero so the two tie under `total_cmp`.
    pub fn value(self, entry: &ListEntry) -> f64 {
        let metric = match self {
            SortKey::Cases => entry.cases,
            SortKey::CasesToday => entry.cases_today,
            SortKey::Deaths => entry.deaths,
            SortKey::DeathsToday => entry.deaths_today,
            SortKey::Recovered => entry.recovered,
            SortKey::RecoveredToday => entry.recovered_today,
            SortKey::Active => entry.active,
        };
        metric.unwrap_or(0.0) + 0.0
    }
}

pub fn compare(key: SortKey, a: &ListEntry, b: &ListEntry) -> Ordering {
    key.value(a).total_cmp(&key.value(b))
}

/// Largest first. Stable: ties keep their fetch order.
pub fn sort_descending(entries: &mut [ListEntry], key: SortKey) {
    entries.sort_by(|a, b| compare(key, b, a));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(territory: &str, cases: Option<f64>) -> ListEntry {
        ListEntry {
            cases,
            ..ListEntry::new(territory)
        }
    }

    fn territories(entries: &[ListEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.territory.as_str()).collect()
    }

    #[test]
    fn test_missing_metric_sorts_as_zero() {
        let mut entries = vec![
            entry("A", Some(5.0)),
            entry("B", None),
            entry("C", Some(10.0)),
        ];

        sort_descending(&mut entries, SortKey::Cases);
        assert_eq!(territories(&entries), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_ties_keep_fetch_order() {
        let mut entries = vec![
            entry("A", Some(1.0)),
            entry("B", Some(3.0)),
            entry("C", None),
            entry("D", Some(3.0)),
            entry("E", Some(0.0)),
        ];

        sort_descending(&mut entries, SortKey::Cases);
        assert_eq!(territories(&entries), vec!["B", "D", "A", "C", "E"]);
    }

    #[test]
    fn test_compare_uses_selected_metric() {
        let a = ListEntry {
            deaths_today: Some(4.0),
            ..ListEntry::new("A")
        };
        let b = ListEntry {
            deaths_today: Some(2.0),
            cases: Some(100.0),
            ..ListEntry::new("B")
        };

        assert_eq!(compare(SortKey::DeathsToday, &a, &b), Ordering::Greater);
        assert_eq!(compare(SortKey::Cases, &a, &b), Ordering::Less);
        assert_eq!(compare(SortKey::Active, &a, &b), Ordering::Equal);
    }

    #[test]
    fn test_negative_zero_ties_with_missing() {
        let mut entries = vec![entry("NegZero", Some(-0.0)), entry("Missing", None)];

        sort_descending(&mut entries, SortKey::Cases);
        assert_eq!(territories(&entries), vec!["NegZero", "Missing"]);

        let a = entry("A", Some(-0.0));
        let b = entry("B", Some(0.0));
        assert_eq!(compare(SortKey::Cases, &a, &b), Ordering::Equal);
    }

    #[test]
    fn test_negative_active_sorts_below_missing() {
        let mut entries = vec![
            ListEntry {
                active: Some(-3.0),
                ..ListEntry::new("Negative")
            },
            ListEntry::new("Missing"),
        ];

        sort_descending(&mut entries, SortKey::Active);
        assert_eq!(territories(&entries), vec!["Missing", "Negative"]);
    }
}
