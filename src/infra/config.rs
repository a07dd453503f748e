//! Centralized configuration (environment variables + defaults).

use std::path::PathBuf;

/// Status given to jobs that are added without one.
pub const FALLBACK_JOB_STATUS: &str = "Active";

/// SQLite database file. Defaults to `data/carpentry.db` relative to the working directory.
pub fn database_path() -> PathBuf {
    std::env::var("DATABASE_PATH")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data").join("carpentry.db"))
}

/// Pool size for the SQLite store (at least 1).
pub fn database_max_connections() -> u32 {
    std::env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(1)
        .max(1)
}

/// Status used by front ends when a job is added without one.
pub fn default_job_status() -> String {
    std::env::var("DEFAULT_JOB_STATUS")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| FALLBACK_JOB_STATUS.to_string())
}
