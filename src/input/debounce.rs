//! Debounced text input.
//!
//! Keystrokes arrive faster than the view should recompute. [`Debouncer`]
//! is the pure timing core: it holds at most one pending value and releases
//! it once a quiet period has elapsed since the last push. [`DebouncedInput`]
//! drives that core from a tokio task, cancelling and rescheduling the timer
//! on every new value (last write wins; intermediate values are dropped).

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

use crate::errors::{Result, ViewError};
use crate::records::Record;
use crate::view::ViewStore;

/// Default quiet period before a search string is applied.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Pure debounce state machine.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replaces any pending value and restarts the quiet period at `now`.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Instant at which the pending value becomes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Takes the pending value if its quiet period has elapsed at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.deadline() {
            Some(deadline) if deadline <= now => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// Drops the pending value without emitting it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }
}

/// Handle to a running debounce task.
///
/// Dropping the handle closes the input; a value still waiting for its quiet
/// period is discarded and the output channel closes.
pub struct DebouncedInput<T = String> {
    sender: mpsc::UnboundedSender<T>,
    task: JoinHandle<()>,
    delay: Duration,
}

impl<T: Send + 'static> DebouncedInput<T> {
    /// Spawns the debounce task on the current tokio runtime.
    ///
    /// Returns the input handle and the receiver of debounced values.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn spawn(delay: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (sender, input) = mpsc::unbounded_channel();
        let (output, receiver) = mpsc::unbounded_channel();
        let task = tokio::spawn(run_debounce(delay, input, output));
        (
            Self {
                sender,
                task,
                delay,
            },
            receiver,
        )
    }

    /// Feeds one keystroke value.
    pub fn push(&self, value: impl Into<T>) -> Result<()> {
        self.sender
            .send(value.into())
            .map_err(|_| ViewError::InputClosed)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// True once the task has stopped (input closed or output dropped).
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

async fn run_debounce<T>(
    delay: Duration,
    mut input: mpsc::UnboundedReceiver<T>,
    output: mpsc::UnboundedSender<T>,
) {
    let mut debouncer = Debouncer::new(delay);

    loop {
        let Some(deadline) = debouncer.deadline() else {
            // Idle: wait for the first value of the next burst
            match input.recv().await {
                Some(value) => debouncer.push(value, Instant::now()),
                None => break,
            }
            continue;
        };

        tokio::select! {
            value = input.recv() => match value {
                // New value cancels the pending timer
                Some(value) => debouncer.push(value, Instant::now()),
                None => {
                    if debouncer.cancel().is_some() {
                        log::debug!("Input closed; discarding pending value");
                    }
                    break;
                }
            },
            _ = sleep_until(deadline) => {
                if let Some(value) = debouncer.poll(Instant::now()) {
                    log::debug!("Debounced value emitted after {:?} quiet period", delay);
                    if output.send(value).is_err() {
                        break;
                    }
                }
            }
        }
    }
}

/// Applies every debounced search string to `store` until the input closes.
pub async fn forward_search<R: Record>(
    receiver: &mut mpsc::UnboundedReceiver<String>,
    store: &mut ViewStore<R>,
) {
    while let Some(search) = receiver.recv().await {
        store.apply_search(search);
    }
}
