//! Wizard mount — ties one controller to its receiving surface.

use std::sync::Arc;

use tracing::info;

use crate::config::WizardConfig;
use crate::transport::{DetachedSurface, SettleSubscription, SubmissionTransport};

use super::controller::WizardController;

/// One mounted wizard.
///
/// The settle subscription is taken before the controller exists, so no
/// submission can be dispatched without someone listening for its settle
/// signal. Unmounting drops the subscription.
pub struct Wizard {
    controller: WizardController,
    settle: SettleSubscription,
}

impl Wizard {
    pub fn mount(config: &WizardConfig, transport: Arc<dyn SubmissionTransport>) -> Self {
        let (surface, settle) = DetachedSurface::mount(transport);
        let controller = WizardController::new(config, surface);
        info!(endpoint = %config.endpoint, "Wizard mounted");
        Self { controller, settle }
    }

    pub fn controller(&self) -> &WizardController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut WizardController {
        &mut self.controller
    }

    /// Split borrows, for driving input and settle signals side by side.
    pub fn parts_mut(&mut self) -> (&mut WizardController, &mut SettleSubscription) {
        (&mut self.controller, &mut self.settle)
    }

    /// Wait for the next settle signal and apply it to the controller.
    ///
    /// Returns whether it changed the wizard's state.
    pub async fn next_settle(&mut self) -> bool {
        match self.settle.settled().await {
            Some(_) => self.controller.on_transport_settled(),
            None => false,
        }
    }

    /// Apply a settle signal that has already arrived, if any.
    pub fn poll_settle(&mut self) -> bool {
        match self.settle.try_settled() {
            Some(_) => self.controller.on_transport_settled(),
            None => false,
        }
    }

    pub fn unmount(self) {
        info!("Wizard unmounted");
    }
}
