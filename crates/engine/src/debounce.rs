//! Cancellable delayed publication of a value.
//!
//! `Debouncer` holds the latest *applied* value in a `watch` channel.
//! `schedule` starts a timer task that publishes a new value once the delay
//! elapses; scheduling again aborts the pending task first, so a superseded
//! value is never published.
//!
//! Each schedule takes a ticket from a generation counter. Cancelling bumps
//! the counter, and a timer only publishes while holding the channel lock
//! with a ticket that is still current. A timer already past `abort` on
//! another worker therefore cannot land after a flush.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

pub struct Debouncer<T> {
    delay: Duration,
    applied: Arc<watch::Sender<T>>,
    generation: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
}

impl<T> Debouncer<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a debouncer whose applied value starts as `initial`.
    pub fn new(initial: T, delay: Duration) -> Self {
        let (applied, _) = watch::channel(initial);
        Self {
            delay,
            applied: Arc::new(applied),
            generation: Arc::new(AtomicU64::new(0)),
            pending: None,
        }
    }

    /// Publish `value` after the delay unless another call supersedes it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, value: T) {
        if self.cancel() {
            debug!("Superseded pending debounced value");
        }
        let ticket = self.generation.load(Ordering::SeqCst);
        let applied = Arc::clone(&self.applied);
        let generation = Arc::clone(&self.generation);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            publish_if_current(&applied, &generation, ticket, value);
        }));
    }

    /// Publish `value` now, dropping any pending one.
    pub fn flush(&mut self, value: T) {
        self.cancel();
        self.applied.send_replace(value);
    }

    /// Abort the pending timer. Returns true if one was still waiting.
    pub fn cancel(&mut self) -> bool {
        self.generation.fetch_add(1, Ordering::SeqCst);
        match self.pending.take() {
            Some(handle) => {
                let waiting = !handle.is_finished();
                handle.abort();
                waiting
            }
            None => false,
        }
    }

    /// True while a scheduled value has not been published yet
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// The most recently published value
    pub fn current(&self) -> T {
        self.applied.borrow().clone()
    }

    /// Receiver notified each time a value is published
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.applied.subscribe()
    }
}

/// Store `value` unless the generation moved on since `ticket` was taken.
/// The check runs under the channel's write lock, which `flush` also takes.
fn publish_if_current<T>(
    applied: &watch::Sender<T>,
    generation: &AtomicU64,
    ticket: u64,
    value: T,
) -> bool {
    applied.send_if_modified(|current| {
        if generation.load(Ordering::SeqCst) != ticket {
            return false;
        }
        *current = value;
        true
    })
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
