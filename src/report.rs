use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Summary of a finished load run
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    pub started_at: DateTime<Utc>,
    pub csv_dir: String,
    pub output: String,
    pub tables: Vec<TableReport>,
    pub indexes: usize,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableReport {
    pub table: &'static str,
    pub source_file: &'static str,
    pub sha256: String,
    pub rows: u64,
    pub duration_ms: u64,
}

impl LoadReport {
    pub fn new(csv_dir: &Path, output: &Path) -> Self {
        Self {
            started_at: Utc::now(),
            csv_dir: csv_dir.display().to_string(),
            output: output.display().to_string(),
            tables: Vec::new(),
            indexes: 0,
            duration_ms: 0,
        }
    }

    pub fn total_rows(&self) -> u64 {
        self.tables.iter().map(|t| t.rows).sum()
    }

    pub fn rows_for(&self, table: &str) -> Option<u64> {
        self.tables.iter().find(|t| t.table == table).map(|t| t.rows)
    }

    /// Persist the report as pretty-printed JSON
    pub fn write_json(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json_content = serde_json::to_string_pretty(self)?;
        fs::write(path, json_content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_json_round_trips_through_serde_json() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let mut report = LoadReport::new(Path::new("csv"), Path::new("out/f1.sqlite"));
        report.tables.push(TableReport {
            table: "seasons",
            source_file: "seasons.csv",
            sha256: "abc".to_string(),
            rows: 74,
            duration_ms: 3,
        });

        let path = dir.path().join("reports").join("load.json");
        report.write_json(&path)?;

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
        assert_eq!(value["tables"][0]["rows"], 74);
        assert_eq!(value["output"], "out/f1.sqlite");
        assert_eq!(report.total_rows(), 74);
        assert_eq!(report.rows_for("seasons"), Some(74));
        Ok(())
    }
}
