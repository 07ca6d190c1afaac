//! Filter text debouncing
//!
//! Rapid keystrokes in the filter box must not each trigger a full view
//! recompute. Inputs are buffered on a rolling deadline; when the text has
//! been quiet for the configured interval, the final settled value is
//! delivered once to the callback. Distinct-value suppression happens
//! upstream: the coordinator only feeds this debouncer when the
//! equality-gated filter property actually changed.

use tokio::sync::mpsc;
use tokio::time::{sleep_until, Duration, Instant};

/// Default quiet interval for filter text.
pub const DEFAULT_QUIET_INTERVAL: Duration = Duration::from_millis(100);

/// Handle to feed filter text into the debouncer.
pub struct FilterDebouncer {
    tx: mpsc::UnboundedSender<String>,
}

impl FilterDebouncer {
    /// Spawn the debounce task.
    ///
    /// `quiet` is the rolling deadline: each input resets it. When it
    /// expires, `on_settled` receives the latest value. Returns the handle
    /// and the task's `JoinHandle`; dropping every handle ends the task
    /// after flushing a pending value.
    pub fn spawn<F>(quiet: Duration, on_settled: F) -> (Self, tokio::task::JoinHandle<()>)
    where
        F: Fn(String) + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(debounce_loop(rx, quiet, on_settled));
        (Self { tx }, handle)
    }

    /// Submit a new filter text value, resetting the quiet deadline.
    pub fn input(&self, text: String) {
        if self.tx.send(text).is_err() {
            log::warn!("filter debouncer task is gone, dropping input");
        }
    }
}

async fn debounce_loop<F>(mut rx: mpsc::UnboundedReceiver<String>, quiet: Duration, on_settled: F)
where
    F: Fn(String) + Send + 'static,
{
    let mut pending: Option<(String, Instant)> = None;

    loop {
        match pending.take() {
            Some((text, deadline)) => {
                tokio::select! {
                    biased;
                    maybe = rx.recv() => match maybe {
                        // Newer input wins and restarts the quiet interval.
                        Some(newer) => pending = Some((newer, Instant::now() + quiet)),
                        None => {
                            // All handles dropped: flush and exit.
                            on_settled(text);
                            return;
                        }
                    },
                    _ = sleep_until(deadline) => on_settled(text),
                }
            }
            None => match rx.recv().await {
                Some(text) => pending = Some((text, Instant::now() + quiet)),
                None => return,
            },
        }
    }
}
