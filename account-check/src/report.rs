//! Batch summaries and CSV export

use crate::config::profile_url;
use crate::error::Result;
use crate::types::{BatchRun, Verdict};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Headers of the live accounts table
pub const LIVE_HEADERS: [&str; 3] = ["Username", "Status", "Instagram_Link"];
/// Headers of the unavailable accounts table
pub const DEAD_HEADERS: [&str; 4] = ["Username", "Status", "Error_Message", "Instagram_Link"];

/// Counts and live rate of a batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub total_checked: usize,
    pub live_count: usize,
    pub dead_count: usize,
    pub api_calls: usize,
    /// Percentage of live accounts, 0 for an empty run
    pub live_rate: f64,
}

/// Summarize a batch run
pub fn summarize(run: &BatchRun) -> SummaryReport {
    let total_checked = run.live_count() + run.dead_count();
    let live_rate = if total_checked > 0 {
        (run.live_count() as f64 / total_checked as f64) * 100.0
    } else {
        0.0
    };

    SummaryReport {
        total_checked,
        live_count: run.live_count(),
        dead_count: run.dead_count(),
        api_calls: run.total_calls(),
        live_rate,
    }
}

/// Render the plain-text summary block printed at the end of a batch
pub fn render_summary(summary: &SummaryReport, run: &BatchRun) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Checked accounts:     {}", summary.total_checked);
    let _ = writeln!(out, "Live accounts:        {}", summary.live_count);
    let _ = writeln!(out, "Unavailable accounts: {}", summary.dead_count);
    let _ = writeln!(out, "API calls used:       {}", summary.api_calls);
    if summary.total_checked > 0 {
        let _ = writeln!(out, "Live rate:            {:.1}%", summary.live_rate);
    }

    if summary.live_count > 0 {
        let _ = writeln!(out, "\nLIVE ACCOUNTS:");
        for verdict in run.live() {
            let _ = writeln!(out, "  • @{}", verdict.username());
        }
    }

    if summary.dead_count > 0 {
        let _ = writeln!(out, "\nUNAVAILABLE ACCOUNTS:");
        for verdict in run.dead() {
            let _ = writeln!(out, "  • @{} - {}", verdict.username(), verdict.status());
        }
    }

    out
}

/// Paths written by a CSV export; a table without rows is not written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportedFiles {
    pub live: Option<PathBuf>,
    pub dead: Option<PathBuf>,
}

/// Writes batch results as timestamped CSV files into a directory
#[derive(Debug, Clone)]
pub struct CsvReporter {
    output_dir: PathBuf,
    profile_url_base: String,
}

impl CsvReporter {
    pub fn new<P: AsRef<Path>, S: Into<String>>(output_dir: P, profile_url_base: S) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            profile_url_base: profile_url_base.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Export using the current local time as file suffix
    pub fn export(&self, run: &BatchRun) -> Result<ExportedFiles> {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
        self.export_with_timestamp(run, &timestamp)
    }

    /// Export using an explicit `YYYYMMDD_HHMMSS` suffix
    pub fn export_with_timestamp(&self, run: &BatchRun, timestamp: &str) -> Result<ExportedFiles> {
        let mut exported = ExportedFiles::default();

        let live: Vec<&Verdict> = run.live().collect();
        if !live.is_empty() {
            let path = self
                .output_dir
                .join(format!("live_accounts_{}.csv", timestamp));
            self.write_atomic(&path, &self.live_table(&live)?)?;
            info!(rows = live.len(), path = %path.display(), "live accounts saved");
            exported.live = Some(path);
        }

        let dead: Vec<&Verdict> = run.dead().collect();
        if !dead.is_empty() {
            let path = self
                .output_dir
                .join(format!("dead_accounts_{}.csv", timestamp));
            self.write_atomic(&path, &self.dead_table(&dead)?)?;
            info!(rows = dead.len(), path = %path.display(), "unavailable accounts saved");
            exported.dead = Some(path);
        }

        Ok(exported)
    }

    fn live_table(&self, verdicts: &[&Verdict]) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(LIVE_HEADERS)?;
        for verdict in verdicts {
            writer.write_record([
                verdict.username(),
                verdict.status().as_str(),
                profile_url(&self.profile_url_base, verdict.username()).as_str(),
            ])?;
        }
        into_bytes(writer)
    }

    fn dead_table(&self, verdicts: &[&Verdict]) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(DEAD_HEADERS)?;
        for verdict in verdicts {
            writer.write_record([
                verdict.username(),
                verdict.status().as_str(),
                verdict.error_message().unwrap_or_default(),
                profile_url(&self.profile_url_base, verdict.username()).as_str(),
            ])?;
        }
        into_bytes(writer)
    }

    fn write_atomic(&self, path: &Path, content: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.output_dir)?;
        let temp_path = path.with_extension("csv.tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, path)?;
        Ok(())
    }
}

fn into_bytes(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|e| std::io::Error::new(e.error().kind(), e.error().to_string()).into())
}
