//! One-shot background discovery with cancellation

use crate::discovery::Discovery;
use crate::error::{LaunchBoardError, Result, StringError};
use crate::record::AppRecord;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, TryRecvError};
use std::thread::{self, JoinHandle};
use tracing::{debug, info};

/// Discovery running on its own thread
///
/// The result is delivered exactly once through [`DiscoveryTask::try_result`]
/// or [`DiscoveryTask::wait`]. Dropping the task cancels the scan.
pub struct DiscoveryTask {
    cancelled: Arc<AtomicBool>,
    receiver: mpsc::Receiver<Result<Vec<AppRecord>>>,
    handle: Option<JoinHandle<()>>,
    finished: bool,
}

impl DiscoveryTask {
    /// Start `discovery` on a background thread named `discovery`
    pub fn spawn(discovery: Discovery) -> Result<Self> {
        let cancelled = Arc::new(AtomicBool::new(false));
        let (sender, receiver) = mpsc::sync_channel(1);

        let worker_flag = Arc::clone(&cancelled);
        let handle = thread::Builder::new()
            .name("discovery".to_string())
            .spawn(move || {
                let outcome = match discovery.run(&worker_flag) {
                    Some(records) => Ok(records),
                    None => {
                        info!("Application discovery cancelled");
                        Err(LaunchBoardError::DiscoveryCancelled)
                    }
                };

                if sender.send(outcome).is_err() {
                    debug!("Discovery result dropped: task handle no longer listening");
                }
            })?;

        Ok(Self {
            cancelled,
            receiver,
            handle: Some(handle),
            finished: false,
        })
    }

    /// Ask the worker to stop at its next checkpoint
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Take the result if discovery has finished, without blocking
    ///
    /// Returns `None` while discovery is still running and after the result
    /// has already been taken.
    pub fn try_result(&mut self) -> Option<Result<Vec<AppRecord>>> {
        if self.finished {
            return None;
        }

        let outcome = match self.receiver.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(worker_exited()),
        };
        self.finish();
        Some(outcome)
    }

    /// Block until discovery finishes and return its result
    pub fn wait(mut self) -> Result<Vec<AppRecord>> {
        if self.finished {
            return Err(LaunchBoardError::DiscoveryError(StringError::new(
                "discovery result was already taken",
            )));
        }

        let outcome = self.receiver.recv().unwrap_or_else(|_| Err(worker_exited()));
        self.finish();
        outcome
    }

    fn finish(&mut self) {
        self.finished = true;
        let Some(handle) = self.handle.take() else {
            return;
        };
        if handle.join().is_err() {
            debug!("Discovery thread panicked after delivering its result");
        }
    }
}

impl Drop for DiscoveryTask {
    fn drop(&mut self) {
        if !self.finished {
            self.cancel();
        }
    }
}

fn worker_exited() -> LaunchBoardError {
    LaunchBoardError::DiscoveryError(StringError::new(
        "discovery thread exited without a result",
    ))
}
