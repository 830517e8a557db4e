use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::transport::{SubmitTransport, TransportError};
use crate::application::ApplicationSubmission;
use crate::config::MailConfig;
use crate::email::{templates, MailError, Mailer, OutboundEmail};

/// Sender identity, fixed recipient and send bound for application notifications.
#[derive(Debug, Clone)]
pub struct DispatchSettings {
    pub sender_name: String,
    pub sender_address: String,
    pub recipient: String,
    pub subject: String,
    pub send_timeout: Duration,
}

impl DispatchSettings {
    pub fn from_config(config: &MailConfig) -> Self {
        Self {
            sender_name: config.from_name.clone(),
            sender_address: config.user.clone(),
            recipient: config.recipient.clone(),
            subject: config.subject.clone(),
            send_timeout: config.send_timeout,
        }
    }
}

#[derive(Debug)]
pub enum DispatchError {
    Render(askama::Error),
    Mail(MailError),
    Timeout(Duration),
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchError::Render(err) => write!(f, "Failed to render notification: {err}"),
            DispatchError::Mail(err) => write!(f, "Mail transport error: {err}"),
            DispatchError::Timeout(after) => {
                write!(f, "Mail transport timed out after {}ms", after.as_millis())
            }
        }
    }
}

/// Turns an application into one email to the fixed recipient.
///
/// One attempt per call: no retry, no deduplication. Sending the same
/// submission twice sends two emails.
pub struct NotificationDispatcher {
    mailer: Arc<dyn Mailer>,
    settings: DispatchSettings,
}

impl NotificationDispatcher {
    pub fn new(mailer: Arc<dyn Mailer>, settings: DispatchSettings) -> Self {
        Self { mailer, settings }
    }

    pub fn compose(&self, submission: &ApplicationSubmission) -> Result<OutboundEmail, DispatchError> {
        let html_body = templates::render_application(submission).map_err(DispatchError::Render)?;

        Ok(OutboundEmail {
            from: format!(
                "\"{}\" <{}>",
                self.settings.sender_name, self.settings.sender_address
            ),
            to: self.settings.recipient.clone(),
            subject: self.settings.subject.clone(),
            html_body,
        })
    }

    pub async fn dispatch(&self, submission: &ApplicationSubmission) -> Result<(), DispatchError> {
        let email = self.compose(submission)?;

        match tokio::time::timeout(self.settings.send_timeout, self.mailer.send(email)).await {
            Ok(sent) => sent.map_err(DispatchError::Mail),
            Err(_) => Err(DispatchError::Timeout(self.settings.send_timeout)),
        }
    }
}

/// Submits straight to the dispatcher without an HTTP hop. Used by the
/// server-rendered application page.
pub struct DispatcherTransport<'a> {
    dispatcher: &'a NotificationDispatcher,
}

impl<'a> DispatcherTransport<'a> {
    pub fn new(dispatcher: &'a NotificationDispatcher) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl SubmitTransport for DispatcherTransport<'_> {
    async fn submit(&self, submission: &ApplicationSubmission) -> Result<bool, TransportError> {
        self.dispatcher.dispatch(submission).await.map_err(|e| {
            tracing::error!("Failed to dispatch application: {e}");
            TransportError::from(e.to_string())
        })?;
        Ok(true)
    }
}
