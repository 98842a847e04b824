//! Deadline racing for the resolver pipeline
//!
//! The timeout surfaces as a value so tests can observe it; only the
//! binary entry point turns [`DeadlineOutcome::TimedOut`] into a process
//! exit.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Outcome of racing a job against a deadline.
#[derive(Debug, PartialEq, Eq)]
pub enum DeadlineOutcome<T> {
    /// The job finished first.
    Completed(T),
    /// The deadline fired first. The job may still be running on its
    /// worker thread; it has no cancellation awareness.
    TimedOut,
}

/// Run `job` on a worker thread and wait at most `timeout` for it.
///
/// The job is not cancelled on timeout. Callers that need a hard stop
/// exit the process, which takes the worker thread with it.
pub fn run_with_deadline<T, F>(timeout: Duration, job: F) -> DeadlineOutcome<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        // The receiver is gone if the deadline already fired.
        let _ = tx.send(job());
    });

    match rx.recv_timeout(timeout) {
        Ok(value) => DeadlineOutcome::Completed(value),
        Err(_) => DeadlineOutcome::TimedOut,
    }
}
