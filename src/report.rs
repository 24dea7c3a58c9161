//! Diagnostics reporting.
//!
//! The formation engine emits advisory progress messages (population size,
//! global average skill, repair moves, per-team composition) through a
//! [`Reporter`] supplied by the caller. Delivery is best-effort.

use std::fmt::Debug;
use std::sync::Mutex;

/// Severity of a reported message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    /// Progress and summaries.
    Info,
    /// Recoverable oddities.
    Warn,
    /// Failures (rejected runs, unplaced participants).
    Error,
}

/// Receiver of formation diagnostics.
pub trait Reporter: Send + Sync + Debug {
    /// Records a message at the given level.
    fn report(&self, level: ReportLevel, message: &str);

    /// Progress message.
    fn info(&self, message: &str) {
        self.report(ReportLevel::Info, message);
    }

    /// Warning message.
    fn warn(&self, message: &str) {
        self.report(ReportLevel::Warn, message);
    }

    /// Error message.
    fn error(&self, message: &str) {
        self.report(ReportLevel::Error, message);
    }
}

/// Forwards messages to the `log` facade under the `u_teams` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, level: ReportLevel, message: &str) {
        match level {
            ReportLevel::Info => log::info!(target: "u_teams", "{message}"),
            ReportLevel::Warn => log::warn!(target: "u_teams", "{message}"),
            ReportLevel::Error => log::error!(target: "u_teams", "{message}"),
        }
    }
}

/// Keeps every message in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    entries: Mutex<Vec<(ReportLevel, String)>>,
}

impl MemoryReporter {
    /// Creates an empty reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded messages.
    pub fn entries(&self) -> Vec<(ReportLevel, String)> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Recorded messages at one level.
    pub fn messages(&self, level: ReportLevel) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }

    /// Whether any message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.entries().iter().any(|(_, m)| m.contains(needle))
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, level: ReportLevel, message: &str) {
        let mut entries = match self.entries.lock() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.push((level, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_reporter_levels() {
        let reporter = MemoryReporter::new();
        reporter.info("building teams");
        reporter.warn("odd roster");
        reporter.error("no target team");

        assert_eq!(reporter.entries().len(), 3);
        assert_eq!(reporter.messages(ReportLevel::Error), vec!["no target team"]);
        assert!(reporter.contains("building"));
        assert!(!reporter.contains("missing"));
    }

    #[test]
    fn test_log_reporter_disabled_without_logger() {
        assert!(!log::log_enabled!(target: "u_teams", log::Level::Error));
        LogReporter.info("ignored");
        LogReporter.error("ignored");
        assert_eq!(log::max_level(), log::LevelFilter::Off);
    }
}
