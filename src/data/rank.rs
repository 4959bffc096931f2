use super::model::CoverageTable;

/// How many cells the ranking view shows.
pub const TOP_N: usize = 20;

/// Indices of the `n` highest-weighted records, descending.
///
/// The sort is stable, so cells with equal weighted scores keep their
/// input (document) order. Returns all indices when `n >= len`.
pub fn top_weighted(table: &CoverageTable, n: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..table.records.len()).collect();
    indices.sort_by(|&a, &b| {
        table.records[b]
            .weighted
            .total_cmp(&table.records[a].weighted)
    });
    indices.truncate(n);
    indices
}
