//! Detached receiving surface.
//!
//! Deliveries run on their own task so the wizard never waits on them.
//! Each finished delivery emits exactly one payload-free [`SettleSignal`],
//! whether the endpoint answered with success, an error page, or nothing.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::{Submission, SubmissionTransport};

/// "The surface finished loading." Carries no outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleSignal;

/// Where submissions are sent so their responses land out of sight.
#[derive(Clone)]
pub struct DetachedSurface {
    transport: Arc<dyn SubmissionTransport>,
    settle_tx: mpsc::UnboundedSender<SettleSignal>,
}

/// Receiving end of the settle signal. Dropping it unsubscribes; signals
/// sent afterwards are discarded.
pub struct SettleSubscription {
    rx: mpsc::UnboundedReceiver<SettleSignal>,
}

impl DetachedSurface {
    /// Create the surface together with its settle subscription, so the
    /// subscription exists before anything can be loaded into it.
    pub fn mount(transport: Arc<dyn SubmissionTransport>) -> (Self, SettleSubscription) {
        let (settle_tx, rx) = mpsc::unbounded_channel();
        debug!(transport = transport.name(), "Receiving surface mounted");
        (
            Self {
                transport,
                settle_tx,
            },
            SettleSubscription { rx },
        )
    }

    /// Deliver `submission` in the background and settle when done.
    ///
    /// Without a tokio runtime there is nothing to run the delivery on: the
    /// submission is dropped with a warning and the surface settles at once.
    /// Returns the delivery task when one was spawned.
    pub fn load(&self, submission: Submission) -> Option<JoinHandle<()>> {
        let transport = Arc::clone(&self.transport);
        let settle_tx = self.settle_tx.clone();

        let Ok(handle) = Handle::try_current() else {
            warn!(
                submission_id = %submission.id,
                transport = transport.name(),
                "No tokio runtime; submission not delivered, settling anyway"
            );
            if settle_tx.send(SettleSignal).is_err() {
                debug!(submission_id = %submission.id, "Settle signal dropped; surface unsubscribed");
            }
            return None;
        };

        let task = handle.spawn(async move {
            let id = submission.id;
            match transport.deliver(&submission).await {
                Ok(()) => debug!(submission_id = %id, transport = transport.name(), "Delivery finished"),
                Err(e) => warn!(
                    submission_id = %id,
                    transport = transport.name(),
                    error = %e,
                    "Delivery failed; settling anyway"
                ),
            }

            if settle_tx.send(SettleSignal).is_err() {
                debug!(submission_id = %id, "Settle signal dropped; surface unsubscribed");
            }
        });
        Some(task)
    }
}

impl SettleSubscription {
    /// Wait for the next settle signal. `None` once every surface handle
    /// has been dropped.
    pub async fn settled(&mut self) -> Option<SettleSignal> {
        self.rx.recv().await
    }

    /// Take a settle signal if one is already waiting.
    pub fn try_settled(&mut self) -> Option<SettleSignal> {
        self.rx.try_recv().ok()
    }
}
