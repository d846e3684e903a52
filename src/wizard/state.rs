//! Wizard step and submission status.

use serde::{Deserialize, Serialize};

/// The two screens of the wizard. Step1 is initial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Step1,
    Step2,
}

impl WizardStep {
    /// 1-based position, as shown on the progress pills.
    pub fn number(&self) -> u8 {
        match self {
            Self::Step1 => 1,
            Self::Step2 => 2,
        }
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::Step1
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Step1 => "step1",
            Self::Step2 => "step2",
        };
        write!(f, "{s}")
    }
}

/// Where the (single) submission stands.
///
/// Idle → Pending on an accepted submit, Pending → Succeeded on settle.
/// `Failed` is never produced: the settle signal carries no outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum SubmissionStatus {
    Idle,
    Pending,
    Succeeded(String),
    Failed(String),
}

impl SubmissionStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl Default for SubmissionStatus {
    fn default() -> Self {
        Self::Idle
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Pending => write!(f, "pending"),
            Self::Succeeded(msg) => write!(f, "succeeded: {msg}"),
            Self::Failed(msg) => write!(f, "failed: {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(WizardStep::default(), WizardStep::Step1);
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
    }

    #[test]
    fn step_display_matches_serde() {
        for step in [WizardStep::Step1, WizardStep::Step2] {
            let json = serde_json::to_string(&step).unwrap();
            assert_eq!(json, format!("\"{step}\""));
        }
    }

    #[test]
    fn status_serializes_with_message() {
        let json = serde_json::to_value(SubmissionStatus::Succeeded("sent".into())).unwrap();
        assert_eq!(json, serde_json::json!({"state": "succeeded", "message": "sent"}));

        let json = serde_json::to_value(SubmissionStatus::Pending).unwrap();
        assert_eq!(json, serde_json::json!({"state": "pending"}));
    }

    #[test]
    fn only_pending_is_pending() {
        assert!(SubmissionStatus::Pending.is_pending());
        assert!(!SubmissionStatus::Idle.is_pending());
        assert!(!SubmissionStatus::Succeeded(String::new()).is_pending());
    }
}
