//! Common test utilities for integration tests
//!
//! Fixtures are written to the system temp directory and removed on drop.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use weight_tracker_report::{args::Args, config::AppConfig};
use weight_tracker_shared::Granularity;

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// A file that lives for the duration of a test
pub struct Fixture {
    path: PathBuf,
}

impl Fixture {
    pub fn new(extension: &str, contents: &str) -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "weight-tracker-report-{}-{}.{}",
            std::process::id(),
            id,
            extension
        ));
        fs::write(&path, contents).expect("Failed to write fixture");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

/// One week of steps (Sunday 3 March 2024 to Saturday 9 March 2024) plus
/// a single day in the week before it
pub const WEEK_CSV: &str = "\
date,weight_kg,steps,distance_km,calories_burned,active_minutes,water_ml
2024-02-26,81.0,4000,,,,
2024-03-04,80.5,1000,0.8,,,
2024-03-05,,1500,,,,
2024-03-06,,2000,,,,
2024-03-07,,1500,,,,
2024-03-08,80.0,2000,,,,
";

/// Arguments for a samples file and reference date
pub fn args_for(path: &Path, granularity: Granularity, reference: &str) -> Args {
    Args {
        samples_path: path.to_path_buf(),
        granularity,
        reference: Some(reference.parse().expect("Invalid reference date")),
        config_path: None,
    }
}

/// Configuration loaded from TOML text
pub fn config_from(toml: &str) -> AppConfig {
    let file = Fixture::new("toml", toml);
    AppConfig::load(Some(file.path())).expect("Failed to load config")
}
