//! Delayed computations with cancellation.
//!
//! All simulated network latency runs through [`Pending`]: the computation
//! is scheduled on the runtime behind a timer, and the handle owns the
//! task. Dropping or cancelling the handle aborts the timer, so a caller
//! that is torn down before the delay elapses never observes a late
//! result.

use std::time::Duration;
use tokio::task::JoinHandle;

/// A delayed computation scheduled on the runtime.
#[derive(Debug)]
pub struct Pending<T> {
    handle: JoinHandle<T>,
}

impl<T: Send + 'static> Pending<T> {
    /// Schedule `produce` to run after `delay`.
    pub fn after<F>(delay: Duration, produce: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            produce()
        });
        Self { handle }
    }

    /// Cancel the computation if it has not completed yet.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Whether the computation has finished or been cancelled.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the result.
    ///
    /// Returns `None` if the computation was cancelled before it ran.
    pub async fn wait(mut self) -> Option<T> {
        (&mut self.handle).await.ok()
    }
}

impl<T> Drop for Pending<T> {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
