//! Shared helpers for service-layer tests.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::mailer::Mailer;
use crate::storage::DocumentStore;

/// Store rooted in a unique temp directory per test.
pub fn temp_store() -> DocumentStore {
    DocumentStore::new(std::env::temp_dir().join(format!("mdinti_test_{}", Uuid::new_v4())))
}

#[derive(Clone, Debug, PartialEq)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Captures every send instead of talking to a relay.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<SentMail>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), ServiceError> {
        self.sent.lock().expect("mailer lock").push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        });
        Ok(())
    }
}

/// Always fails, for exercising the partial-failure path of the booking
/// workflow.
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _to: &str, _subject: &str, _html: &str) -> Result<(), ServiceError> {
        Err(ServiceError::Email("failed to send email".into()))
    }
}
