// ABOUTME: Output formatting for CLI feedback.
// ABOUTME: Supports normal, quiet (CI), and JSON output modes.

use crate::cleanup::{CleanupObserver, DeletionOutcome};
use crate::retention::AuditView;
use crate::types::RepositoryName;
use serde::Serialize;
use std::time::Instant;

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-friendly output with progress messages
    Normal,
    /// Minimal output for CI (only deletions and the final result)
    Quiet,
    /// JSON lines for scripting
    Json,
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
    start_time: Option<Instant>,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            start_time: None,
        }
    }

    /// Start timing an operation.
    pub fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Get elapsed time since timer started.
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    fn duration(&self) -> Option<f64> {
        self.start_time.map(|_| self.elapsed_secs())
    }

    /// Print a progress message (suppressed in quiet/json mode).
    pub fn progress(&self, message: &str) {
        if self.mode == OutputMode::Normal {
            println!("{message}");
        }
    }

    /// Print a plain line of data (suppressed in json mode).
    pub fn line(&self, message: &str) {
        if self.mode != OutputMode::Json {
            println!("{message}");
        }
    }

    /// Print a success message with optional timing.
    pub fn success(&self, message: &str) {
        match self.mode {
            OutputMode::Normal => {
                let elapsed = self.elapsed_secs();
                if elapsed > 0.0 {
                    println!("{message} ({:.1}s)", elapsed);
                } else {
                    println!("{message}");
                }
            }
            OutputMode::Quiet => println!("{message}"),
            OutputMode::Json => emit(&JsonEvent {
                event: "success",
                message,
                duration_secs: self.duration(),
            }),
        }
    }

    /// Print a warning message.
    pub fn warning(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => eprintln!("Warning: {message}"),
            OutputMode::Json => emit_err(&JsonEvent {
                event: "warning",
                message,
                duration_secs: None,
            }),
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => eprintln!("Error: {message}"),
            OutputMode::Json => emit_err(&JsonEvent {
                event: "error",
                message,
                duration_secs: self.duration(),
            }),
        }
    }

    /// Print a serializable record as one JSON line (json mode only).
    pub fn json<T: Serialize>(&self, event: &'static str, data: &T) {
        if self.mode == OutputMode::Json {
            emit(&JsonRecord { event, data });
        }
    }
}

impl CleanupObserver for Output {
    fn repository_started(&mut self, repository: &RepositoryName) {
        self.progress(&format!("→ Cleaning {repository}..."));
    }

    fn audit(&mut self, repository: &RepositoryName, view: &AuditView) {
        match self.mode {
            OutputMode::Json => {
                for artifact in &view.artifacts {
                    for entry in &artifact.entries {
                        emit(&JsonRecord {
                            event: "version",
                            data: &RepositoryScoped { repository, data: entry },
                        });
                    }
                }
            }
            OutputMode::Normal | OutputMode::Quiet => {
                for artifact in &view.artifacts {
                    println!();
                    println!("{}", artifact.name);
                    for entry in &artifact.entries {
                        println!("{entry}");
                    }
                }
            }
        }
    }

    fn outcome(&mut self, outcome: &DeletionOutcome) {
        match self.mode {
            OutputMode::Json => emit(&JsonRecord {
                event: "deletion",
                data: outcome,
            }),
            OutputMode::Normal | OutputMode::Quiet => println!("{outcome}"),
        }
    }
}

fn emit<T: Serialize>(event: &T) {
    if let Ok(json) = serde_json::to_string(event) {
        println!("{json}");
    }
}

fn emit_err<T: Serialize>(event: &T) {
    if let Ok(json) = serde_json::to_string(event) {
        eprintln!("{json}");
    }
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    event: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_secs: Option<f64>,
}

#[derive(Serialize)]
struct JsonRecord<'a, T: Serialize> {
    event: &'a str,
    #[serde(flatten)]
    data: &'a T,
}

#[derive(Serialize)]
struct RepositoryScoped<'a, T: Serialize> {
    repository: &'a RepositoryName,
    #[serde(flatten)]
    data: &'a T,
}
