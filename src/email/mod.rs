//! Simulated email delivery.
//!
//! Nothing here talks to a real mail service: [`process_email`] validates
//! the message, logs what would have been sent, waits a fixed delay to
//! imitate network latency, and reports success. Swapping in a real
//! provider means replacing the body of [`process_email`] and nothing
//! else; callers already treat the `bool` result as delivery status.
//!
//! # Example
//!
//! ```rust
//! # tokio_test::block_on(async {
//! use portal_auth::email::send_welcome_email;
//!
//! let sent = send_welcome_email("merchant@example.com", "Ana").await;
//! assert!(sent);
//! # });
//! ```

use std::time::Duration;

/// Fixed delay imitating a mail provider round trip.
const SIMULATED_SEND_DELAY: Duration = Duration::from_millis(500);

/// Maximum number of body characters included in the send log.
const BODY_PREVIEW_CHARS: usize = 50;

/// A file attached to an [`EmailMessage`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    /// File name shown to the recipient.
    pub filename: String,
    /// Raw file contents.
    pub content: Vec<u8>,
    /// MIME type, when known.
    pub content_type: Option<String>,
}

impl Attachment {
    /// Creates an attachment without an explicit MIME type.
    #[must_use]
    pub fn new(filename: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content,
            content_type: None,
        }
    }

    /// Sets the MIME type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// An outgoing email.
///
/// `to`, `subject`, and `body` are required; everything else is optional
/// and only affects what gets logged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailMessage {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
    /// Sender override; the provider default applies when unset.
    pub from: Option<String>,
    /// Carbon-copy recipients.
    pub cc: Vec<String>,
    /// Blind-carbon-copy recipients.
    pub bcc: Vec<String>,
    /// Attached files.
    pub attachments: Vec<Attachment>,
}

impl EmailMessage {
    /// Creates a message with the three required fields.
    #[must_use]
    pub fn new(
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
            from: None,
            cc: Vec::new(),
            bcc: Vec::new(),
            attachments: Vec::new(),
        }
    }

    /// Sets the sender address.
    #[must_use]
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Adds a carbon-copy recipient.
    #[must_use]
    pub fn with_cc(mut self, cc: impl Into<String>) -> Self {
        self.cc.push(cc.into());
        self
    }

    /// Adds a blind-carbon-copy recipient.
    #[must_use]
    pub fn with_bcc(mut self, bcc: impl Into<String>) -> Self {
        self.bcc.push(bcc.into());
        self
    }

    /// Adds an attachment.
    #[must_use]
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }
}

/// Validates and "sends" an email.
///
/// Returns `false` when `to`, `subject`, or `body` is empty; otherwise
/// logs the send, sleeps the simulated provider delay, and returns `true`.
/// This function never returns an error and never delivers real mail.
pub async fn process_email(message: &EmailMessage) -> bool {
    if message.to.is_empty() || message.subject.is_empty() || message.body.is_empty() {
        tracing::error!("Email message is incomplete: to, subject, and body are required");
        return false;
    }

    let preview: String = message.body.chars().take(BODY_PREVIEW_CHARS).collect();
    tracing::debug!("Sending email to {}", message.to);
    tracing::debug!("Subject: {}", message.subject);
    tracing::debug!("Body: {preview}...");

    if let Some(from) = &message.from {
        tracing::debug!("From: {from}");
    }
    if !message.cc.is_empty() {
        tracing::debug!("CC: {}", message.cc.join(", "));
    }
    if !message.bcc.is_empty() {
        tracing::debug!("BCC: {}", message.bcc.join(", "));
    }
    if !message.attachments.is_empty() {
        tracing::debug!("Attachments: {} file(s)", message.attachments.len());
    }

    tokio::time::sleep(SIMULATED_SEND_DELAY).await;

    tracing::debug!("Email sent successfully");
    true
}

fn welcome_message(email: &str, name: &str) -> EmailMessage {
    let subject = "Welcome to your merchant portal!";
    let body = format!(
        "Hello {name},\n\n\
         Welcome aboard! We are glad to have you with us.\n\n\
         You can connect your Shopify store, manage your integrations, and \
         automate your workflows from your dashboard.\n\n\
         If you have any questions, just reply to this email.\n\n\
         Best regards,\n\
         The Portal Team"
    );

    EmailMessage::new(email, subject, body)
}

fn order_notification_message(
    email: &str,
    order_number: &str,
    customer_name: &str,
    order_total: &str,
) -> EmailMessage {
    let subject = format!("New order #{order_number} in your Shopify store");
    let body = format!(
        "Hello,\n\n\
         You have received a new order in your Shopify store.\n\n\
         Order details:\n\
         - Number: #{order_number}\n\
         - Customer: {customer_name}\n\
         - Total: {order_total}\n\n\
         Open your Shopify admin to process this order.\n\n\
         Best regards,\n\
         The Portal Team"
    );

    EmailMessage::new(email, subject, body)
}

/// Sends the welcome email for a newly registered user.
///
/// Resolves to `true` for well-formed non-empty inputs.
pub async fn send_welcome_email(email: &str, name: &str) -> bool {
    process_email(&welcome_message(email, name)).await
}

/// Notifies a merchant about a new order in their store.
///
/// `order_total` is a preformatted display string and is passed through
/// verbatim.
pub async fn send_order_notification(
    email: &str,
    order_number: &str,
    customer_name: &str,
    order_total: &str,
) -> bool {
    process_email(&order_notification_message(
        email,
        order_number,
        customer_name,
        order_total,
    ))
    .await
}

// Verify message types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EmailMessage>();
    assert_send_sync::<Attachment>();
};
