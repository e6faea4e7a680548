//! Interactive-thread job queue.
//!
//! The list view and the export pipeline never touch caller-visible state
//! from a store callback or the export thread. They post jobs here instead,
//! and whichever thread owns the [`InteractiveQueue`] runs them.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Queue of jobs to run on the interactive thread.
///
/// The queue itself stays on the thread that drains it; other threads post
/// through a [`QueueHandle`].
pub struct InteractiveQueue {
    sender: Sender<Job>,
    receiver: Receiver<Job>,
}

/// Cloneable, thread-safe handle for posting jobs to an [`InteractiveQueue`].
#[derive(Clone)]
pub struct QueueHandle {
    sender: Sender<Job>,
}

impl InteractiveQueue {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    pub fn handle(&self) -> QueueHandle {
        QueueHandle {
            sender: self.sender.clone(),
        }
    }

    /// Run every job that is already queued. Returns how many ran.
    ///
    /// Jobs posted by the jobs themselves are picked up in the same call.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;
        while let Ok(job) = self.receiver.try_recv() {
            job();
            ran += 1;
        }
        ran
    }

    /// Block until one job arrives or `timeout` elapses, and run it.
    ///
    /// Returns `false` on timeout.
    pub fn wait_one(&self, timeout: Duration) -> bool {
        match self.receiver.recv_timeout(timeout) {
            Ok(job) => {
                job();
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }
}

impl Default for InteractiveQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl QueueHandle {
    /// Post a job to the interactive thread.
    ///
    /// Returns `false` if the queue has been dropped; the job is discarded.
    pub fn dispatch<F>(&self, job: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        self.sender.send(Box::new(job)).is_ok()
    }
}
