use std::path::{Path, PathBuf};

use crate::data::loader;
use crate::data::model::CoverageTable;
use crate::data::rank;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded coverage table (None until a document loads).
    pub table: Option<CoverageTable>,

    /// Indices of the top-weighted records (cached per load).
    pub ranked: Vec<usize>,

    /// Path of the document behind the current table.
    pub source: Option<PathBuf>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            table: None,
            ranked: Vec::new(),
            source: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded table: recompute the ranking, clear status.
    pub fn set_table(&mut self, table: CoverageTable, source: PathBuf) {
        self.ranked = rank::top_weighted(&table, rank::TOP_N);
        self.table = Some(table);
        self.source = Some(source);
        self.status_message = None;
    }

    /// Load a document and ingest it. On failure the current table stays and
    /// the error goes to the status line.
    pub fn load_from(&mut self, path: &Path) {
        match loader::load_coverage(path) {
            Ok(table) => {
                log::info!("loaded {} cells from {}", table.len(), path.display());
                self.set_table(table, path.to_path_buf());
            }
            Err(e) => {
                log::error!("failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Re-read the current source document.
    pub fn reload(&mut self) {
        if let Some(path) = self.source.clone() {
            self.load_from(&path);
        }
    }
}
