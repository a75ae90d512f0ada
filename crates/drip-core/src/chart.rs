use serde::Serialize;

use crate::domain::Snapshot;

/// Ordered series handed to a rendering collaborator: a shared date axis,
/// cumulative invested capital, and computed basket value.
///
/// Any renderer that accepts three parallel ordered series satisfies the
/// contract; chart widgets themselves live outside this crate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub invested: Vec<f64>,
    pub value: Vec<f64>,
}

impl ChartSeries {
    pub fn from_snapshots(snapshots: &[Snapshot]) -> Self {
        Self {
            labels: snapshots.iter().map(|s| s.date.format_iso()).collect(),
            invested: snapshots.iter().map(|s| s.invested).collect(),
            value: snapshots.iter().map(|s| s.value).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TradeDate;

    #[test]
    fn series_stay_parallel_and_ordered() {
        let snapshots = vec![
            Snapshot {
                date: TradeDate::parse("2025-06-28").expect("valid date"),
                invested: 50.0,
                value: 50.0,
            },
            Snapshot {
                date: TradeDate::parse("2025-07-04").expect("valid date"),
                invested: 100.0,
                value: 97.5,
            },
        ];

        let series = ChartSeries::from_snapshots(&snapshots);
        assert_eq!(series.len(), 2);
        assert_eq!(series.labels, ["2025-06-28", "2025-07-04"]);
        assert_eq!(series.invested, [50.0, 100.0]);
        assert_eq!(series.value, [50.0, 97.5]);
    }
}
