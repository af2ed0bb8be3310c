//! Email notification side effects
//!
//! Delivery is out of scope for the registry itself: [`LoggingNotifier`]
//! records each event as a structured log line and [`RecordingNotifier`]
//! keeps events in memory for inspection.

use crate::utils::error::Result;
use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::info;

/// Sends the emails triggered by email-address changes
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Ask the owner to verify an address
    async fn send_verification_email(&self, orcid: &str, email: &str) -> Result<()>;

    /// Tell the owner their primary address changed
    async fn send_email_address_changed(
        &self,
        orcid: &str,
        new_email: &str,
        old_email: &str,
    ) -> Result<()>;
}

/// Notifier that only logs
#[derive(Debug, Default, Clone)]
pub struct LoggingNotifier;

#[async_trait]
impl Notifier for LoggingNotifier {
    async fn send_verification_email(&self, orcid: &str, email: &str) -> Result<()> {
        info!(orcid = %orcid, email = %email, "verification email requested");
        Ok(())
    }

    async fn send_email_address_changed(
        &self,
        orcid: &str,
        new_email: &str,
        old_email: &str,
    ) -> Result<()> {
        info!(
            orcid = %orcid,
            new_email = %new_email,
            old_email = %old_email,
            "email address changed notification requested"
        );
        Ok(())
    }
}

/// One notification event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Verification {
        orcid: String,
        email: String,
    },
    AddressChanged {
        orcid: String,
        new_email: String,
        old_email: String,
    },
}

/// Notifier that keeps every event in memory
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events in the order they were sent
    pub fn events(&self) -> Vec<Notification> {
        self.events.lock().clone()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send_verification_email(&self, orcid: &str, email: &str) -> Result<()> {
        self.events.lock().push(Notification::Verification {
            orcid: orcid.to_string(),
            email: email.to_string(),
        });
        Ok(())
    }

    async fn send_email_address_changed(
        &self,
        orcid: &str,
        new_email: &str,
        old_email: &str,
    ) -> Result<()> {
        self.events.lock().push(Notification::AddressChanged {
            orcid: orcid.to_string(),
            new_email: new_email.to_string(),
            old_email: old_email.to_string(),
        });
        Ok(())
    }
}
