//! Bookkeeping shared by the passes that walk many scope files

use crate::record::BuyerRecord;
use crate::stats::DistributionStats;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Progress is logged every this many files
const PROGRESS_EVERY: usize = 50;

/// A scope file that was skipped
#[derive(Debug, Clone)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

impl FileFailure {
    /// Log the failure and keep it for the summary
    pub fn report(path: &Path, err: anyhow::Error) -> Self {
        let message = format!("{:#}", err);
        error!(path = %path.display(), "{}", message);
        Self {
            path: path.to_path_buf(),
            message,
        }
    }
}

/// Outcome of a pass over many scope files
#[derive(Debug, Clone, Default)]
pub struct PassSummary {
    pub files_processed: usize,
    pub buyers: u64,
    pub failures: Vec<FileFailure>,
    pub stats: DistributionStats,
}

impl PassSummary {
    pub fn fail(&mut self, path: &Path, err: anyhow::Error) {
        self.failures.push(FileFailure::report(path, err));
    }

    pub fn processed(&mut self, records: &[BuyerRecord]) {
        self.files_processed += 1;
        self.buyers += records.len() as u64;
        self.stats.extend(records);
        if self.files_processed % PROGRESS_EVERY == 0 {
            info!("Processed {} files, {} buyers...", self.files_processed, self.buyers);
        }
    }
}
