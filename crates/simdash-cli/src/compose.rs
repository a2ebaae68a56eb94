//! Compose form: phone and message fields, the live character counter,
//! the transliteration warning and the send button state.

use simdash_models::{transliteration_preview, ModelError, SendRequest, SendResult};

use crate::notification::Notice;

pub const SEND_LABEL: &str = "Send SMS";
pub const SENDING_LABEL: &str = "Sending...";
pub const MISSING_FIELDS: &str = "Please fill in all fields";

/// Why a submit did not produce a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// A send is already in flight; the button is disabled.
    InFlight,
    /// Phone or message is blank after trimming.
    MissingFields(ModelError),
}

#[derive(Debug, Default)]
pub struct ComposeForm {
    phone: String,
    message: String,
    warning: Option<String>,
    sending: bool,
}

impl ComposeForm {
    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.phone = value.into();
    }

    pub fn push_phone(&mut self, c: char) {
        self.phone.push(c);
    }

    pub fn pop_phone(&mut self) {
        self.phone.pop();
    }

    pub fn push_message(&mut self, c: char) {
        self.message.push(c);
        self.message_changed();
    }

    pub fn pop_message(&mut self) {
        self.message.pop();
        self.message_changed();
    }

    fn message_changed(&mut self) {
        self.warning = transliteration_preview(&self.message);
    }

    /// Length of the message in Unicode scalar values.
    pub fn char_count(&self) -> usize {
        self.message.chars().count()
    }

    /// The ASCII preview, present only while the message has non-ASCII text.
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn button_label(&self) -> &'static str {
        if self.sending {
            SENDING_LABEL
        } else {
            SEND_LABEL
        }
    }

    /// Validates the fields and, if they are usable, disables the button
    /// and returns the request to issue.
    pub fn begin_submit(&mut self) -> Result<SendRequest, SubmitError> {
        if self.sending {
            return Err(SubmitError::InFlight);
        }
        let request =
            SendRequest::new(&self.phone, &self.message).map_err(SubmitError::MissingFields)?;
        self.sending = true;
        Ok(request)
    }

    /// Re-enables the button and, on success only, resets the form.
    pub fn finish_submit(&mut self, outcome: &Result<SendResult, String>) -> Vec<Notice> {
        self.sending = false;
        if matches!(outcome, Ok(res) if res.success) {
            self.clear();
        }
        send_outcome_notices(outcome)
    }

    fn clear(&mut self) {
        self.phone.clear();
        self.message.clear();
        self.warning = None;
    }
}

/// Notices to show for a finished send, in display order.
pub fn send_outcome_notices(outcome: &Result<SendResult, String>) -> Vec<Notice> {
    match outcome {
        Ok(res) if res.success => {
            let mut notices = vec![Notice::success("✅ SMS sent successfully!")];
            if let Some(preview) = res.converted_preview() {
                notices.push(Notice::success(format!(
                    "SMS sent. Special characters were converted. Sent as: \"{preview}\""
                )));
            }
            notices
        }
        Ok(res) => vec![error_notice(res.error.as_deref().unwrap_or("unknown error"))],
        Err(transport) => vec![error_notice(transport)],
    }
}

pub fn error_notice(reason: &str) -> Notice {
    Notice::error(format!("❌ Error: {reason}"))
}
