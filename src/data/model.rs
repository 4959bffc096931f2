use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// Stability multiplier applied to cells with no entry in the stability map.
pub const DEFAULT_STABILITY: f64 = 1.0;

// ---------------------------------------------------------------------------
// CellRecord – one row of the coverage table
// ---------------------------------------------------------------------------

/// A single geospatial cell with its derived ranking score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellRecord {
    /// Cell identifier (hexagonal grid index).
    pub cell: String,
    /// Precomputed average coverage for the cell.
    pub average: f64,
    /// Measurement-consistency multiplier; [`DEFAULT_STABILITY`] when unknown.
    pub stability: f64,
    /// Ranking metric: `average * stability`.
    pub weighted: f64,
}

// ---------------------------------------------------------------------------
// CoverageTable – the complete joined dataset
// ---------------------------------------------------------------------------

/// The joined dataset, one record per cell in the coverage map.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageTable {
    pub records: Vec<CellRecord>,
}

impl CoverageTable {
    /// Join the average-coverage map with the stability map.
    ///
    /// Produces one record per `averages` entry, preserving the given order.
    /// Stability is an explicit lookup-with-default: a cell absent from
    /// `stability` gets [`DEFAULT_STABILITY`] exactly. Cells present only in
    /// `stability` contribute nothing.
    pub fn join(averages: Vec<(String, f64)>, stability: &HashMap<String, f64>) -> Self {
        let records = averages
            .into_iter()
            .map(|(cell, average)| {
                let stability = stability.get(&cell).copied().unwrap_or(DEFAULT_STABILITY);
                CellRecord {
                    weighted: average * stability,
                    cell,
                    average,
                    stability,
                }
            })
            .collect();

        CoverageTable { records }
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Plain-text preview of the first `n` records, for console inspection.
    pub fn preview(&self, n: usize) -> String {
        let mut out = format!(
            "{:<18} {:>9} {:>10} {:>9}\n",
            "cell", "average", "stability", "weighted"
        );
        for rec in self.records.iter().take(n) {
            out.push_str(&format!(
                "{:<18} {:>9.3} {:>10.4} {:>9.3}\n",
                rec.cell, rec.average, rec.stability, rec.weighted
            ));
        }
        out
    }

    /// Descriptive summaries for each numeric column, in column order.
    pub fn summaries(&self) -> Vec<(&'static str, ColumnSummary)> {
        if self.records.is_empty() {
            return Vec::new();
        }
        vec![
            ("average", self.column_summary(|r| r.average)),
            ("stability", self.column_summary(|r| r.stability)),
            ("weighted", self.column_summary(|r| r.weighted)),
        ]
    }

    fn column_summary(&self, value: impl Fn(&CellRecord) -> f64) -> ColumnSummary {
        let values: Vec<f64> = self.records.iter().map(value).collect();
        ColumnSummary::compute(&values)
    }
}

// ---------------------------------------------------------------------------
// ColumnSummary – descriptive stats for one numeric column
// ---------------------------------------------------------------------------

/// min/max/mean/median of a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

impl ColumnSummary {
    /// Compute a summary. `values` must be non-empty.
    pub fn compute(values: &[f64]) -> ColumnSummary {
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let n = sorted.len();
        let mean = sorted.iter().sum::<f64>() / n as f64;
        let median = if n % 2 == 0 {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        } else {
            sorted[n / 2]
        };

        ColumnSummary {
            min: sorted[0],
            max: sorted[n - 1],
            mean,
            median,
        }
    }
}

impl fmt::Display for ColumnSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min {:.2}  max {:.2}  mean {:.2}  median {:.2}",
            self.min, self.max, self.mean, self.median
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn averages(pairs: &[(&str, f64)]) -> Vec<(String, f64)> {
        pairs.iter().map(|(c, v)| (c.to_string(), *v)).collect()
    }

    #[test]
    fn join_produces_one_record_per_coverage_cell() {
        let stability = HashMap::from([("a".to_string(), 2.0)]);
        let table = CoverageTable::join(averages(&[("a", 2.0), ("b", 4.0)]), &stability);

        assert_eq!(table.len(), 2);
        assert_eq!(table.records[0].cell, "a");
        assert_eq!(table.records[0].weighted, 4.0);
        assert_eq!(table.records[1].cell, "b");
        assert_eq!(table.records[1].stability, DEFAULT_STABILITY);
        assert_eq!(table.records[1].weighted, 4.0);
    }

    #[test]
    fn join_ignores_stability_only_cells() {
        let stability = HashMap::from([("ghost".to_string(), 0.5)]);
        let table = CoverageTable::join(averages(&[("a", 1.0)]), &stability);

        assert_eq!(table.len(), 1);
        assert_eq!(table.records[0].cell, "a");
    }

    #[test]
    fn join_preserves_input_order() {
        let table = CoverageTable::join(
            averages(&[("z", 1.0), ("m", 2.0), ("a", 3.0)]),
            &HashMap::new(),
        );
        let cells: Vec<&str> = table.records.iter().map(|r| r.cell.as_str()).collect();
        assert_eq!(cells, ["z", "m", "a"]);
    }

    #[test]
    fn missing_stability_defaults_to_exactly_one() {
        let table = CoverageTable::join(averages(&[("a", 3.25)]), &HashMap::new());
        assert_eq!(table.records[0].stability, 1.0);
        assert_eq!(table.records[0].weighted, 3.25);
    }

    #[test]
    fn preview_shows_header_and_first_rows() {
        let table = CoverageTable::join(
            averages(&[("a", 1.0), ("b", 2.0), ("c", 3.0)]),
            &HashMap::new(),
        );
        let preview = table.preview(2);
        let lines: Vec<&str> = preview.lines().collect();

        assert_eq!(lines.len(), 3); // header + 2 rows
        assert!(lines[0].contains("weighted"));
        assert!(lines[1].starts_with('a'));
        assert!(lines[2].starts_with('b'));
    }

    #[test]
    fn summary_median_even_and_odd() {
        assert_eq!(ColumnSummary::compute(&[3.0, 1.0, 2.0]).median, 2.0);
        assert_eq!(ColumnSummary::compute(&[4.0, 1.0, 2.0, 3.0]).median, 2.5);
    }

    #[test]
    fn summaries_cover_all_columns() {
        let table = CoverageTable::join(averages(&[("a", 2.0), ("b", 4.0)]), &HashMap::new());
        let summaries = table.summaries();

        let names: Vec<&str> = summaries.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["average", "stability", "weighted"]);
        assert_eq!(summaries[0].1.mean, 3.0);
        assert_eq!(summaries[1].1.min, 1.0);
    }
}
