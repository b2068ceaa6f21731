//! Message delivery.
//!
//! Transport is the caller's concern: anything that can accept a list of runs
//! implements [`Recipient`]. [`WriterRecipient`] covers consoles, log files
//! and tests.

use std::io::Write;

use parking_lot::Mutex;
use thiserror::Error;

use crate::component;
use crate::legacy;
use crate::text::{Run, Text};

/// Errors raised while delivering a message.
#[derive(Debug, Error)]
pub enum SendError {
    /// Writing the message failed.
    #[error("I/O error sending message: {0}")]
    Io(#[from] std::io::Error),

    /// The message could not be encoded.
    #[error("Failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),

    /// The recipient refused the message (offline, muted, ...).
    #[error("Message rejected: {0}")]
    Rejected(String),
}

/// Anything a chat message can be sent to.
pub trait Recipient {
    /// Deliver one message made of `runs`.
    fn send_message(&self, runs: &[Run]) -> Result<(), SendError>;

    /// Deliver a whole message.
    ///
    /// Recipients that encode the message shape (single run or sequence)
    /// override this; the default forwards the runs.
    fn send_text(&self, text: &Text) -> Result<(), SendError> {
        self.send_message(text.runs())
    }
}

impl Text {
    /// Send this message to one recipient.
    pub fn send<R: Recipient + ?Sized>(&self, recipient: &R) -> Result<(), SendError> {
        recipient.send_text(self)
    }

    /// Send this message to every recipient.
    ///
    /// Delivery continues past failures; the first error is returned.
    pub fn send_all<'a, R, I>(&self, recipients: I) -> Result<(), SendError>
    where
        R: Recipient + ?Sized + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        let mut first_error = None;
        let mut sent = 0usize;
        for recipient in recipients {
            match self.send(recipient) {
                Ok(()) => sent += 1,
                Err(e) => {
                    log::warn!("Failed to send message: {e}");
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }
        log::debug!("Message delivered to {} recipient(s)", sent);
        first_error.map_or(Ok(()), Err)
    }
}

/// How a [`WriterRecipient`] encodes messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `§`-coded text
    #[default]
    Legacy,
    /// Color codes stripped
    Plain,
    /// Chat-component JSON
    Json,
}

/// Writes each message as one line.
pub struct WriterRecipient<W: Write> {
    writer: Mutex<W>,
    format: OutputFormat,
}

impl<W: Write> WriterRecipient<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self {
            writer: Mutex::new(writer),
            format,
        }
    }

    /// Recover the writer, e.g. to inspect a `Vec<u8>` buffer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write> Recipient for WriterRecipient<W> {
    fn send_message(&self, runs: &[Run]) -> Result<(), SendError> {
        self.send_text(&Text::Sequence(runs.to_vec()))
    }

    fn send_text(&self, text: &Text) -> Result<(), SendError> {
        let line = match self.format {
            OutputFormat::Legacy => legacy::to_legacy_text(text),
            OutputFormat::Plain => text.plain_text(),
            OutputFormat::Json => component::to_json(text)?,
        };
        let mut writer = self.writer.lock();
        writeln!(writer, "{line}")?;
        writer.flush()?;
        Ok(())
    }
}
