// src/progress.rs

//! Progress tracking and the sequential task reporter
//!
//! `ProgressTracker` is the unified interface for reporting progress of a
//! single operation (download, extraction) across output modes:
//! - `CliProgress`: visual progress bars using indicatif
//! - `LogProgress`: logs progress to tracing
//! - `SilentProgress`: no-op for scripted/quiet modes
//!
//! `TaskChain` layers the sequential task model on top: at most one task is
//! current at a time, `next()` replaces it and `end()` closes it. A chain is
//! an owned single-writer resource; callers that want independent reporting
//! create independent chains.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

/// Core trait for progress tracking
///
/// Implementations should be thread-safe (Send + Sync) to allow
/// progress updates from multiple threads.
pub trait ProgressTracker: Send + Sync {
    /// Set the current status message
    fn set_message(&self, message: &str);

    /// Set the total (length) of the progress
    fn set_length(&self, length: u64);

    /// Set progress to a specific position
    fn set_position(&self, position: u64);

    /// Get current position
    fn position(&self) -> u64;

    /// Get total length
    fn length(&self) -> u64;

    /// Finish progress successfully with a message
    fn finish_with_message(&self, message: &str);

    /// Check if progress is finished
    fn is_finished(&self) -> bool;
}

/// Silent progress tracker (no-op)
///
/// Use this for quiet mode, scripted usage, or tests.
#[derive(Debug, Default)]
pub struct SilentProgress {
    position: AtomicU64,
    length: AtomicU64,
    finished: AtomicBool,
}

impl SilentProgress {
    /// Create a new silent progress tracker
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressTracker for SilentProgress {
    fn set_message(&self, _message: &str) {}

    fn set_length(&self, length: u64) {
        self.length.store(length, Ordering::Relaxed);
    }

    fn set_position(&self, position: u64) {
        self.position.store(position, Ordering::Relaxed);
    }

    fn position(&self) -> u64 {
        self.position.load(Ordering::Relaxed)
    }

    fn length(&self) -> u64 {
        self.length.load(Ordering::Relaxed)
    }

    fn finish_with_message(&self, _message: &str) {
        self.finished.store(true, Ordering::Relaxed);
    }

    fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Relaxed)
    }
}

/// Logging progress tracker
///
/// Logs task boundaries to tracing at info level. Useful for non-interactive
/// environments or when you want progress in logs.
#[derive(Debug)]
pub struct LogProgress {
    name: String,
    position: AtomicU64,
    length: AtomicU64,
    finished: AtomicBool,
}

impl LogProgress {
    /// Create a new logging progress tracker
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        info!("{}", name);
        Self {
            name,
            position: AtomicU64::new(0),
            length: AtomicU64::new(0),
            finished: AtomicBool::new(false),
        }
    }
}

impl ProgressTracker for LogProgress {
    fn set_message(&self, message: &str) {
        info!("{}: {}", self.name, message);
    }

    fn set_length(&self, length: u64) {
        self.length.store(length, Ordering::Relaxed);
    }

    fn set_position(&self, position: u64) {
        self.position.store(position, Ordering::Relaxed);
    }

    fn position(&self) -> u64 {
        self.position.load(Ordering::Relaxed)
    }

    fn length(&self) -> u64 {
        self.length.load(Ordering::Relaxed)
    }

    fn finish_with_message(&self, message: &str) {
        self.finished.store(true, Ordering::Relaxed);
        info!("{}: {}", self.name, message);
    }

    fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Relaxed)
    }
}

/// Visual progress tracker backed by an indicatif bar
///
/// Renders a bytes-style bar once a length is known, a spinner before that.
pub struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    /// Create a new CLI progress tracker with the given task message
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg} {bytes} ({bytes_per_sec})")
                .expect("Invalid spinner template"),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }
}

impl ProgressTracker for CliProgress {
    fn set_message(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }

    fn set_length(&self, length: u64) {
        self.bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} {msg} [{bar:30.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec})")
                .expect("Invalid progress bar template")
                .progress_chars("#>-"),
        );
        self.bar.set_length(length);
    }

    fn set_position(&self, position: u64) {
        self.bar.set_position(position);
    }

    fn position(&self) -> u64 {
        self.bar.position()
    }

    fn length(&self) -> u64 {
        self.bar.length().unwrap_or(0)
    }

    fn finish_with_message(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }

    fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}

type TrackerFactory = Box<dyn Fn(&str) -> Box<dyn ProgressTracker> + Send + Sync>;

/// Sequential task reporter
///
/// Owns at most one current task. `next()` finishes the running task and
/// starts a new one; `end()` closes the current task. Only one `add` pipeline
/// may drive a given chain at a time.
pub struct TaskChain {
    current: Option<Box<dyn ProgressTracker>>,
    make: TrackerFactory,
}

impl TaskChain {
    /// Create a chain with a custom tracker factory
    pub fn new(make: impl Fn(&str) -> Box<dyn ProgressTracker> + Send + Sync + 'static) -> Self {
        Self {
            current: None,
            make: Box::new(make),
        }
    }

    /// Chain that reports nothing
    pub fn silent() -> Self {
        Self::new(|_| Box::new(SilentProgress::new()))
    }

    /// Chain that reports task boundaries through tracing
    pub fn log() -> Self {
        Self::new(|message| Box::new(LogProgress::new(message)))
    }

    /// Chain that renders indicatif progress bars
    pub fn cli() -> Self {
        Self::new(|message| Box::new(CliProgress::new(message)))
    }

    /// Finish the current task (if any) and start a new one
    pub fn next(&mut self, message: &str) -> &dyn ProgressTracker {
        self.end();
        let task = (self.make)(message);
        &**self.current.insert(task)
    }

    /// The currently running task, if one exists
    pub fn current(&self) -> Option<&dyn ProgressTracker> {
        self.current.as_deref()
    }

    /// Close the current task
    pub fn end(&mut self) {
        if let Some(task) = self.current.take() {
            if !task.is_finished() {
                task.finish_with_message("done");
            }
        }
    }
}

impl Drop for TaskChain {
    fn drop(&mut self) {
        self.end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_progress() {
        let progress = SilentProgress::new();

        progress.set_message("test");
        progress.set_length(100);
        progress.set_position(50);
        assert_eq!(progress.position(), 50);
        assert_eq!(progress.length(), 100);

        assert!(!progress.is_finished());
        progress.finish_with_message("done");
        assert!(progress.is_finished());
    }

    #[test]
    fn test_log_progress() {
        let progress = LogProgress::new("test");

        progress.set_position(25);
        assert_eq!(progress.position(), 25);

        progress.finish_with_message("complete");
        assert!(progress.is_finished());
    }

    #[test]
    fn test_task_chain_replaces_current() {
        let mut chain = TaskChain::silent();
        assert!(chain.current().is_none());

        chain.next("first");
        chain.current().unwrap().set_position(10);
        assert_eq!(chain.current().unwrap().position(), 10);

        // next() closes the running task and starts a fresh one
        chain.next("second");
        assert_eq!(chain.current().unwrap().position(), 0);

        chain.end();
        assert!(chain.current().is_none());
    }

    #[test]
    fn test_task_chain_end_is_idempotent() {
        let mut chain = TaskChain::silent();
        chain.next("only");
        chain.end();
        chain.end();
        assert!(chain.current().is_none());
    }
}
