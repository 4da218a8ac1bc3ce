//! ReadyGate: an explicit, awaitable "widget is mounted" signal.
//!
//! The table-rendering library mounts its widgets asynchronously. Rather
//! than sleeping for a fixed settling delay and hoping, the host calls
//! [`ReadyGate::signal_ready`] once mounting is done and the binding layer
//! awaits [`ReadyGate::wait_ready`]. Signaling is sticky: waiters that
//! arrive after the signal resolve immediately.

use tokio::sync::watch;

/// One-shot readiness signal backed by a `watch` channel.
#[derive(Debug)]
pub struct ReadyGate {
    tx: watch::Sender<bool>,
    rx: watch::Receiver<bool>,
}

impl ReadyGate {
    /// Create a gate in the not-ready state.
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self { tx, rx }
    }

    /// Mark the host environment as ready. Idempotent.
    pub fn signal_ready(&self) {
        // send only fails with no receivers; we always hold one.
        let _ = self.tx.send(true);
    }

    /// Whether readiness has been signaled.
    pub fn is_ready(&self) -> bool {
        *self.rx.borrow()
    }

    /// Wait until readiness has been signaled.
    ///
    /// Resolves immediately if the signal already fired.
    pub async fn wait_ready(&self) {
        let mut rx = self.rx.clone();
        // wait_for cannot fail while the gate (and thus the sender) is alive.
        let _ = rx.wait_for(|ready| *ready).await;
    }
}

impl Default for ReadyGate {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
