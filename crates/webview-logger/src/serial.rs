//! Single-consumer FIFO worker.
//!
//! Jobs run one at a time on a dedicated named thread, in submission order,
//! regardless of which thread submitted them. The queue is unbounded.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

type Job = Box<dyn FnOnce() + Send + 'static>;

pub struct SerialQueue {
    sender: Option<mpsc::Sender<Job>>,
    worker: Option<JoinHandle<()>>,
    name: String,
}

impl SerialQueue {
    /// Spawn the worker thread.
    pub fn spawn(name: impl Into<String>) -> std::io::Result<Self> {
        let name = name.into();
        let (sender, receiver) = mpsc::channel::<Job>();
        // Jobs log through whichever subscriber was current at spawn time.
        let dispatch = tracing::dispatcher::get_default(|current| current.clone());
        let worker = thread::Builder::new()
            .name(name.clone())
            .spawn(move || {
                tracing::dispatcher::with_default(&dispatch, || run_jobs(receiver))
            })?;

        debug!(queue = %name, "serial queue started");
        Ok(Self {
            sender: Some(sender),
            worker: Some(worker),
            name,
        })
    }

    /// Enqueue a job. Returns false if the worker has exited.
    pub fn submit<F>(&self, job: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        match &self.sender {
            Some(sender) => sender.send(Box::new(job)).is_ok(),
            None => false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for SerialQueue {
    /// Closes the queue and waits for already-submitted jobs to finish.
    fn drop(&mut self) {
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            // A job holding the last handle would otherwise join itself.
            if worker.thread().id() == thread::current().id() {
                return;
            }
            if worker.join().is_err() {
                warn!(queue = %self.name, "serial queue worker panicked");
            }
        }
    }
}

fn run_jobs(receiver: mpsc::Receiver<Job>) {
    while let Ok(job) = receiver.recv() {
        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(job)) {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            warn!(%reason, "serial queue job panicked");
        }
    }
}
