//! Submission transport — delivers the final field set without the wizard
//! ever reading the response.
//!
//! A [`SubmissionTransport`] does the actual delivery. The
//! [`DetachedSurface`] runs deliveries off to the side and turns every
//! completion, whatever its outcome, into one opaque [`SettleSignal`].

pub mod http;
pub mod surface;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::TransportError;

pub use http::HttpFormTransport;
pub use surface::{DetachedSurface, SettleSignal, SettleSubscription};

/// One outbound form submission.
#[derive(Debug, Clone)]
pub struct Submission {
    /// Log correlation only; never transmitted.
    pub id: Uuid,
    /// Field name/value pairs in transmission order.
    pub fields: Vec<(&'static str, String)>,
}

impl Submission {
    pub fn new(fields: Vec<(&'static str, String)>) -> Self {
        Self {
            id: Uuid::new_v4(),
            fields,
        }
    }

    /// Value of a field by wire name.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Delivers a submission somewhere.
///
/// Implementations report delivery problems as errors, but the surface never
/// forwards them: the wizard only learns that delivery settled.
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    async fn deliver(&self, submission: &Submission) -> Result<(), TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_lookup() {
        let submission = Submission::new(vec![
            ("amount", "10000".to_string()),
            ("phone", "(416) 555-0134".to_string()),
        ]);
        assert_eq!(submission.field("amount"), Some("10000"));
        assert_eq!(submission.field("phone"), Some("(416) 555-0134"));
        assert_eq!(submission.field("email"), None);
    }

    #[test]
    fn ids_are_unique() {
        let a = Submission::new(vec![]);
        let b = Submission::new(vec![]);
        assert_ne!(a.id, b.id);
    }
}
