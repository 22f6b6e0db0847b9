// src/api/worker.rs
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use super::ApiError;

/// Outcome of a background call as seen by the UI thread.
#[derive(Debug)]
pub enum Poll<T> {
    Pending,
    Ready(Result<T, ApiError>),
}

/// One blocking API call running off the UI thread.
#[derive(Debug)]
pub struct Pending<T> {
    receiver: Receiver<Result<T, ApiError>>,
}

impl<T> Pending<T> {
    /// Never blocks. A worker that died without answering reads as
    /// `ApiError::WorkerLost`, so every call eventually resolves.
    pub fn poll(&self) -> Poll<T> {
        match self.receiver.try_recv() {
            Ok(outcome) => Poll::Ready(outcome),
            Err(TryRecvError::Empty) => Poll::Pending,
            Err(TryRecvError::Disconnected) => Poll::Ready(Err(ApiError::WorkerLost)),
        }
    }
}

/// Runs `job` on its own thread; `notify` fires once the outcome is
/// ready to be polled.
pub fn spawn<T, F, N>(name: &str, job: F, notify: N) -> Pending<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    N: Fn() + Send + 'static,
{
    let (sender, receiver) = mpsc::channel();

    let spawned = thread::Builder::new()
        .name(name.to_string())
        .spawn(move || {
            // The UI may have moved on; a closed channel is fine.
            let _ = sender.send(job());
            notify();
        });

    if let Err(e) = spawned {
        // The sender went down with the closure, so the next poll reports WorkerLost.
        log::error!("Failed to start {} worker: {}", name, e);
    }

    Pending { receiver }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    fn wait<T>(pending: &Pending<T>) -> Result<T, ApiError> {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            match pending.poll() {
                Poll::Ready(outcome) => return outcome,
                Poll::Pending if Instant::now() < deadline => thread::sleep(Duration::from_millis(5)),
                Poll::Pending => panic!("worker did not finish in time"),
            }
        }
    }

    #[test]
    fn delivers_result_and_notifies() {
        let notified = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&notified);

        let pending = spawn("test", || Ok(42), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(wait(&pending).unwrap(), 42);
        // notify runs after the send; give it a moment.
        let deadline = Instant::now() + Duration::from_secs(5);
        while notified.load(Ordering::SeqCst) == 0 && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(notified.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn panicking_job_reads_as_worker_lost() {
        let pending: Pending<u32> = spawn("test", || panic!("job exploded"), || {});
        assert!(matches!(wait(&pending), Err(ApiError::WorkerLost)));
    }

    #[test]
    fn errors_pass_through() {
        let pending: Pending<u32> = spawn("test", || Err(ApiError::Status(503)), || {});
        assert!(matches!(wait(&pending), Err(ApiError::Status(503))));
    }
}
