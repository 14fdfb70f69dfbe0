use std::thread;

use crossbeam_channel::{bounded, unbounded, Sender};

use crate::error::{Error, Result};

type Task = Box<dyn FnOnce() + Send + 'static>;

/// Serialization domain for privileged device I/O.
///
/// One named thread executes submitted tasks strictly in submission order,
/// each to completion before the next starts. The kernel resources behind
/// device handles are not safe to touch from multiple threads, so every
/// open and close goes through a clone of this handle. The thread is shared
/// process-wide, outlives any single engine and exits once the last handle
/// is dropped.
#[derive(Clone)]
pub struct DeviceWorker {
    tx: Sender<Task>,
}

impl DeviceWorker {
    pub fn spawn() -> Result<Self> {
        let (tx, rx) = unbounded::<Task>();
        thread::Builder::new()
            .name("evjoy-device".into())
            .spawn(move || {
                for task in rx {
                    task();
                }
            })?;
        Ok(Self { tx })
    }

    /// Runs `task` on the worker thread and blocks until it completes.
    pub fn execute<T, F>(&self, task: F) -> Result<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let (done_tx, done_rx) = bounded(1);
        self.tx
            .send(Box::new(move || {
                let _ = done_tx.send(task());
            }))
            .map_err(|_| Error::WorkerGone)?;
        done_rx.recv().map_err(|_| Error::WorkerGone)
    }
}
