// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! JSON report generation for benchmark results.
//!
//! Saves each run to a timestamped JSON file for later comparison.

use crate::metrics::BenchmarkReport;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReporterError {
    #[error("Failed to access report directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// JSON reporter for benchmark results.
pub struct JsonReporter {
    /// Output directory for benchmark data
    output_dir: PathBuf,
}

impl JsonReporter {
    /// Create a new JSON reporter with the specified output directory.
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self, ReporterError> {
        let output_dir = output_dir.as_ref().to_path_buf();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Save a benchmark report to a JSON file.
    ///
    /// The filename carries the report timestamp and a prefix of the run id,
    /// so two runs in the same second do not collide. Returns the path to
    /// the created file.
    pub fn save(&self, report: &BenchmarkReport) -> Result<PathBuf, ReporterError> {
        let timestamp = report.timestamp.format("%Y-%m-%dT%H-%M-%SZ");
        let run = report.run_id.simple().to_string();
        let filename = format!("{}_{}_{}.json", report.benchmark_suite, timestamp, &run[..8]);
        let filepath = self.output_dir.join(&filename);

        let file = File::create(&filepath)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, report)?;

        tracing::info!(path = %filepath.display(), "Saved benchmark report");
        Ok(filepath)
    }

    /// Load an existing benchmark report from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<BenchmarkReport, ReporterError> {
        let file = File::open(path)?;
        let report = serde_json::from_reader(file)?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ffi_overhead_core::{BenchmarkConfig, ScenarioId, ScenarioMeasurement, SuiteMeasurement};
    use tempfile::TempDir;

    fn report() -> BenchmarkReport {
        let suite = SuiteMeasurement {
            decomposition: Some(ScenarioMeasurement {
                scenario: ScenarioId::Decomposition,
                total_host_duration_ms: 3.0,
                total_native_duration_ms: 1.0,
                call_count: 2,
            }),
            ..Default::default()
        };
        BenchmarkReport::from_suite(BenchmarkConfig::quick(), "stub", &suite).unwrap()
    }

    #[test]
    fn test_reporter_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let reporter = JsonReporter::new(temp_dir.path()).unwrap();

        let report = report();
        let path = reporter.save(&report).unwrap();
        assert!(path.exists());

        let loaded = JsonReporter::load(&path).unwrap();
        assert_eq!(loaded.run_id, report.run_id);
        assert_eq!(loaded.decomposition, report.decomposition);
    }

    #[test]
    fn test_same_second_runs_do_not_collide() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("nested");
        let reporter = JsonReporter::new(&dir).unwrap();

        let mut second = report();
        let first = report();
        second.timestamp = first.timestamp;

        let a = reporter.save(&first).unwrap();
        let b = reporter.save(&second).unwrap();
        assert_ne!(a, b);
        assert!(a.starts_with(&dir) && b.starts_with(&dir));
    }

    #[test]
    fn test_load_rejects_garbage() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            JsonReporter::load(&path),
            Err(ReporterError::Serialization(_))
        ));
    }
}
