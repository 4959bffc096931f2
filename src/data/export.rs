use std::path::Path;

use anyhow::{Context, Result};

use super::model::CoverageTable;

/// Write the given records (by index, in order) as CSV.
///
/// Columns: `cell,average,stability,weighted`.
pub fn write_ranked_csv(path: &Path, table: &CoverageTable, indices: &[usize]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    for &idx in indices {
        writer
            .serialize(&table.records[idx])
            .with_context(|| format!("writing record {idx}"))?;
    }

    writer.flush().context("flushing CSV writer")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CoverageTable;
    use std::collections::HashMap;

    #[test]
    fn writes_header_and_one_row_per_index() {
        let averages = vec![
            ("a".to_string(), 1.0),
            ("b".to_string(), 3.0),
            ("c".to_string(), 2.0),
        ];
        let table = CoverageTable::join(averages, &HashMap::new());

        let path = std::env::temp_dir().join("hexcover_export_test.csv");
        write_ranked_csv(&path, &table, &[1, 2]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "cell,average,stability,weighted");
        assert!(lines[1].starts_with("b,"));
        assert!(lines[2].starts_with("c,"));
    }
}
