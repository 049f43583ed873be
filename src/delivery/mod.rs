use std::path::Path;

use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::response::Code;
use lettre::transport::{smtp, stub};
use lettre::{Address, Message, SmtpTransport, Transport};

use crate::config::SmtpConfig;
use crate::error::DeliveryError;

pub(crate) const SUBJECT: &str = "Expense Report";
pub(crate) const BODY: &str = "Please find attached your expense report.";

/// Check that `address` is a syntactically valid email address.
pub(crate) fn parse_address(address: &str) -> Result<Address, DeliveryError> {
    address
        .trim()
        .parse::<Address>()
        .map_err(|_| DeliveryError::InvalidAddress(address.trim().to_string()))
}

/// Build a plain-text mail with the file at `attachment` attached as a PDF.
pub(crate) fn compose(
    sender: &Mailbox,
    recipient: &str,
    subject: &str,
    body: &str,
    attachment: &Path,
) -> Result<Message, DeliveryError> {
    let to = Mailbox::new(None, parse_address(recipient)?);

    if !attachment.is_file() {
        return Err(DeliveryError::MissingAttachment(attachment.to_path_buf()));
    }
    let content = std::fs::read(attachment)
        .map_err(|_| DeliveryError::MissingAttachment(attachment.to_path_buf()))?;
    let filename = attachment
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report.pdf".to_string());
    let pdf = ContentType::parse("application/pdf")
        .map_err(|e| DeliveryError::Message(e.to_string()))?;

    Message::builder()
        .from(sender.clone())
        .to(to)
        .subject(subject)
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::plain(body.to_string()))
                .singlepart(Attachment::new(filename).body(content, pdf)),
        )
        .map_err(|e| DeliveryError::Message(e.to_string()))
}

/// Hand `message` to `transport` once. No retries.
pub(crate) fn dispatch<T>(transport: &T, message: &Message) -> Result<(), DeliveryError>
where
    T: Transport,
    DeliveryError: From<T::Error>,
{
    transport.send(message).map(|_| ()).map_err(|e| {
        let err = DeliveryError::from(e);
        tracing::warn!(error = %err, "mail delivery failed");
        err
    })
}

/// SMTP sender bound to one account, talking implicit TLS to the relay.
pub(crate) struct Mailer {
    transport: SmtpTransport,
    sender: Mailbox,
}

impl Mailer {
    pub(crate) fn from_config(config: &SmtpConfig) -> Result<Self, DeliveryError> {
        let sender = Mailbox::new(None, parse_address(&config.sender)?);
        let transport = SmtpTransport::relay(&config.host)
            .map_err(DeliveryError::from)?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();
        Ok(Self { transport, sender })
    }

    pub(crate) fn send_report(
        &self,
        recipient: &str,
        attachment: &Path,
    ) -> Result<(), DeliveryError> {
        let message = compose(&self.sender, recipient, SUBJECT, BODY, attachment)?;
        tracing::info!(recipient = recipient.trim(), "sending report");
        dispatch(&self.transport, &message)
    }
}

impl From<smtp::Error> for DeliveryError {
    fn from(err: smtp::Error) -> Self {
        classify(err.status(), err.to_string())
    }
}

/// Sort an SMTP failure by reply code. No code means the server was never reached.
fn classify(status: Option<Code>, detail: String) -> DeliveryError {
    match status {
        // 530 auth required, 534/535 credentials rejected
        Some(code) if code.to_string().starts_with("53") => DeliveryError::Authentication(detail),
        Some(_) => DeliveryError::Transport(detail),
        None => DeliveryError::Connection(detail),
    }
}

impl From<stub::Error> for DeliveryError {
    fn from(err: stub::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
