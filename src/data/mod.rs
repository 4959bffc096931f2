/// Data layer: core types, loading, ranking, and export.
///
/// Architecture:
/// ```text
///  coverage_data.json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse document → CoverageTable
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ CoverageTable │  Vec<CellRecord>, weighted = average × stability
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   rank    │  top-N indices by weighted score
///   └──────────┘
/// ```

pub mod export;
pub mod loader;
pub mod model;
pub mod rank;
