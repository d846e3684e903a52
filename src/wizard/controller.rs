//! WizardController — step and submission state machine.
//!
//! Owns the `FormState`, gates step changes through the validation module
//! and hands accepted submissions to the detached receiving surface.

use serde::Serialize;
use tokio::sync::broadcast;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::WizardConfig;
use crate::transport::{DetachedSurface, Submission};

use super::model::{FormState, HomeownerAnswer, NeedCategory};
use super::state::{SubmissionStatus, WizardStep};
use super::validation::{can_advance_from_step1, can_submit_step2};

/// Shown when step 1 is incomplete.
pub const STEP1_REQUIRED_MESSAGE: &str = "Please complete all required fields on Step 1.";
/// Shown when a submit attempt fails validation.
pub const CONTACT_REQUIRED_MESSAGE: &str = "Please fill all required contact details.";
/// Shown while a submission is in flight.
pub const SENDING_MESSAGE: &str = "Sending…";
/// Shown once the receiving surface settles.
pub const SENT_MESSAGE: &str = "Thanks! Your request was sent.";

/// Default broadcast channel capacity for view events.
const EVENT_CAPACITY: usize = 64;

/// Something the view layer should render or do.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardEvent {
    StepChanged { step: WizardStep },
    ScrollToTop,
    StatusChanged { status: SubmissionStatus, message: String },
    FormReset,
}

/// What `attempt_submit` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the submission went to the surface.
    Dispatched(Uuid),
    /// Validation failed; nothing was sent.
    Rejected,
    /// A submission is already in flight; this attempt was dropped.
    Suppressed,
    /// Submitting is only possible from step 2.
    WrongStep,
}

/// Serializable view of the whole wizard.
#[derive(Debug, Clone, Serialize)]
pub struct WizardSnapshot {
    pub step: WizardStep,
    pub status: SubmissionStatus,
    pub message: String,
    pub in_flight: bool,
    pub form: FormState,
}

pub struct WizardController {
    form: FormState,
    step: WizardStep,
    status: SubmissionStatus,
    message: String,
    in_flight: bool,
    submitted_via: String,
    surface: DetachedSurface,
    events: broadcast::Sender<WizardEvent>,
}

impl WizardController {
    pub fn new(config: &WizardConfig, surface: DetachedSurface) -> Self {
        let (events, _rx) = broadcast::channel(EVENT_CAPACITY);
        Self {
            form: FormState::new(),
            step: WizardStep::default(),
            status: SubmissionStatus::default(),
            message: String::new(),
            in_flight: false,
            submitted_via: config.submitted_via.clone(),
            surface,
            events,
        }
    }

    /// Subscribe to view events.
    pub fn subscribe(&self) -> broadcast::Receiver<WizardEvent> {
        self.events.subscribe()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Current status line; empty when there is nothing to say.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot {
            step: self.step,
            status: self.status.clone(),
            message: self.message.clone(),
            in_flight: self.in_flight,
            form: self.form.clone(),
        }
    }

    // ── Field input ────────────────────────────────────────────────

    pub fn select_homeowner(&mut self, answer: HomeownerAnswer) {
        self.form.set_homeowner_ontario(answer);
    }

    pub fn select_need(&mut self, category: NeedCategory) {
        self.form.set_need_help(category);
    }

    /// Format the amount as typed; returns the new display value.
    pub fn input_amount(&mut self, raw: &str) -> &str {
        self.form.set_amount_display(raw);
        self.form.amount_display()
    }

    pub fn input_first_name(&mut self, value: &str) {
        self.form.set_first_name(value);
    }

    pub fn input_last_name(&mut self, value: &str) {
        self.form.set_last_name(value);
    }

    pub fn input_email(&mut self, value: &str) {
        self.form.set_email(value);
    }

    pub fn input_phone_area(&mut self, value: &str) {
        self.form.set_phone_area(value);
    }

    pub fn input_phone_prefix(&mut self, value: &str) {
        self.form.set_phone_prefix(value);
    }

    pub fn input_phone_line(&mut self, value: &str) {
        self.form.set_phone_line(value);
    }

    // ── Transitions ────────────────────────────────────────────────

    /// Step 1 → Step 2 when step 1 is complete.
    ///
    /// On failure the step is unchanged and the required-fields notice is set.
    /// Does nothing outside step 1.
    pub fn advance(&mut self) -> bool {
        if self.step != WizardStep::Step1 {
            debug!(step = %self.step, "advance ignored outside step 1");
            return false;
        }

        if !can_advance_from_step1(&self.form) {
            debug!("Step 1 incomplete");
            self.set_message(STEP1_REQUIRED_MESSAGE);
            return false;
        }

        self.go_to(WizardStep::Step2);
        self.set_message("");
        true
    }

    /// Step 2 → Step 1, unconditionally. Nothing is cleared.
    pub fn retreat(&mut self) -> bool {
        if self.step != WizardStep::Step2 {
            debug!(step = %self.step, "retreat ignored outside step 2");
            return false;
        }
        self.go_to(WizardStep::Step1);
        true
    }

    /// Validate and dispatch the form.
    ///
    /// The composed phone and the timestamp are the last writes before
    /// validation. Step 1 is re-checked too, since its fields stay editable
    /// on step 2. At most one submission is ever in flight.
    ///
    /// Delivery runs on the current tokio runtime; outside one the surface
    /// settles immediately without sending (see [`DetachedSurface::load`]).
    pub fn attempt_submit(&mut self) -> SubmitOutcome {
        if self.step != WizardStep::Step2 {
            debug!(step = %self.step, "submit ignored outside step 2");
            return SubmitOutcome::WrongStep;
        }
        if self.in_flight {
            debug!("submit suppressed; a submission is already in flight");
            return SubmitOutcome::Suppressed;
        }

        self.form.recompose_phone();
        self.form.refresh_timestamp();

        if !can_submit_step2(&self.form) || !can_advance_from_step1(&self.form) {
            debug!("Step 2 incomplete; submission cancelled");
            self.set_message(CONTACT_REQUIRED_MESSAGE);
            return SubmitOutcome::Rejected;
        }

        self.in_flight = true;
        self.status = SubmissionStatus::Pending;
        self.message = SENDING_MESSAGE.to_string();
        self.publish_status();

        let submission = Submission::new(self.form.to_fields(&self.submitted_via));
        let id = submission.id;
        info!(submission_id = %id, "Submission dispatched");
        self.surface.load(submission);

        SubmitOutcome::Dispatched(id)
    }

    /// Apply the receiving surface's settle signal.
    ///
    /// Settled means "a response arrived", which is reported as success.
    /// Without a submission in flight this is a no-op.
    pub fn on_transport_settled(&mut self) -> bool {
        if !self.in_flight || !self.status.is_pending() {
            debug!(status = %self.status, "settle signal ignored");
            return false;
        }

        self.in_flight = false;
        self.status = SubmissionStatus::Succeeded(SENT_MESSAGE.to_string());
        self.message = SENT_MESSAGE.to_string();
        self.form.reset();

        info!("Submission settled; form reset");
        let _ = self.events.send(WizardEvent::FormReset);
        self.publish_status();
        true
    }

    fn go_to(&mut self, step: WizardStep) {
        self.step = step;
        info!(step = %step, "Wizard step changed");
        let _ = self.events.send(WizardEvent::StepChanged { step });
        let _ = self.events.send(WizardEvent::ScrollToTop);
    }

    fn set_message(&mut self, message: &str) {
        if self.message == message {
            return;
        }
        self.message = message.to_string();
        self.publish_status();
    }

    fn publish_status(&self) {
        // Ok if nobody is listening
        let _ = self.events.send(WizardEvent::StatusChanged {
            status: self.status.clone(),
            message: self.message.clone(),
        });
    }
}
