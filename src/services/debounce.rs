use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Two-value query controller: `raw` tracks every keystroke synchronously,
/// `effective` follows after a quiet period with no further changes. Each
/// `set` replaces the single pending propagation, so only the last value in
/// a burst ever reaches `effective`. Dropping the last handle cancels any
/// propagation still pending.
#[derive(Clone)]
pub struct DebouncedQuery {
    inner: Arc<Inner>,
}

struct Inner {
    raw: Mutex<String>,
    pending: Mutex<Option<JoinHandle<()>>>,
    effective_tx: watch::Sender<String>,
    delay: Duration,
}

impl DebouncedQuery {
    pub fn new() -> Self {
        Self::with_delay(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }

    pub fn with_delay(delay: Duration) -> Self {
        let (effective_tx, _) = watch::channel(String::new());
        Self {
            inner: Arc::new(Inner {
                raw: Mutex::new(String::new()),
                pending: Mutex::new(None),
                effective_tx,
                delay,
            }),
        }
    }

    /// Records the keystroke and reschedules propagation. Must be called
    /// from within a Tokio runtime.
    pub fn set(&self, value: impl Into<String>) {
        let value = value.into();
        *self.inner.raw.lock().expect("raw query lock poisoned") = value.clone();

        let mut pending = self.inner.pending.lock().expect("pending timer lock poisoned");
        if let Some(handle) = pending.take() {
            handle.abort();
        }

        // The timer task holds a weak handle so teardown is not kept alive
        // by its own pending propagation.
        let inner: Weak<Inner> = Arc::downgrade(&self.inner);
        let delay = self.inner.delay;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(inner) = inner.upgrade() {
                inner.effective_tx.send_replace(value);
            }
        }));
    }

    pub fn raw(&self) -> String {
        self.inner.raw.lock().expect("raw query lock poisoned").clone()
    }

    pub fn effective(&self) -> String {
        self.inner.effective_tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.inner.effective_tx.subscribe()
    }
}

impl Default for DebouncedQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Ok(mut pending) = self.pending.lock() {
            if let Some(handle) = pending.take() {
                handle.abort();
            }
        }
    }
}
