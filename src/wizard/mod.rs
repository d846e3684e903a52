//! The two-step approval wizard.
//!
//! Step 1 collects the qualification answers and the amount, step 2 the
//! contact details. `FormState` is the only store; the controller gates
//! every transition and the mount wires the settle signal back in.

pub mod controller;
pub mod format;
pub mod model;
pub mod mount;
pub mod state;
pub mod validation;

pub use controller::{SubmitOutcome, WizardController, WizardEvent, WizardSnapshot};
pub use model::{FormState, HomeownerAnswer, NeedCategory};
pub use mount::Wizard;
pub use state::{SubmissionStatus, WizardStep};
