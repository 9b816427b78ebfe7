use std::fmt;

pub const SUBMIT_DELAY_MS: u32 = 1_500;
pub const RESET_DELAY_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

impl FormPhase {
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Idle => "Send Message",
            Self::Submitting => "Sending...",
            Self::Submitted => "Message Sent!",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::MissingName);
        }
        if !looks_like_email(self.email.trim()) {
            return Err(DraftError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(DraftError::MissingMessage);
        }
        Ok(())
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || value.chars().any(char::is_whitespace) {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftError {
    MissingName,
    InvalidEmail,
    MissingMessage,
}

impl DraftError {
    pub fn field(self) -> ContactField {
        match self {
            Self::MissingName => ContactField::Name,
            Self::InvalidEmail => ContactField::Email,
            Self::MissingMessage => ContactField::Message,
        }
    }
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::MissingName => "Please enter your name.",
            Self::InvalidEmail => "Please enter a valid email address.",
            Self::MissingMessage => "Please write a message.",
        };
        f.write_str(message)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRejection {
    Busy(FormPhase),
    Invalid(DraftError),
}

impl fmt::Display for SubmitRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Busy(phase) => write!(f, "form is not idle ({phase:?})"),
            Self::Invalid(error) => error.fmt(f),
        }
    }
}

/// Contact form state. There is no delivery; the submitting phase only
/// simulates latency before the confirmation is shown.
///
/// The schedule is driven by [`ContactForm::advance`]: `Submitting` lasts
/// [`SUBMIT_DELAY_MS`], `Submitted` lasts [`RESET_DELAY_MS`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    phase: FormPhase,
    draft: ContactDraft,
    phase_elapsed_ms: u32,
    submission: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    /// Counts accepted submissions.
    pub fn submission(&self) -> u64 {
        self.submission
    }

    /// Time left before the next scheduled transition, `None` while idle.
    pub fn remaining_ms(&self) -> Option<u32> {
        let limit = match self.phase {
            FormPhase::Idle => return None,
            FormPhase::Submitting => SUBMIT_DELAY_MS,
            FormPhase::Submitted => RESET_DELAY_MS,
        };
        Some(limit.saturating_sub(self.phase_elapsed_ms))
    }

    /// Moves the schedule forward by `delta_ms`, crossing as many phases as fit.
    pub fn advance(&mut self, delta_ms: u32) -> FormPhase {
        let mut budget = delta_ms;
        while let Some(remaining) = self.remaining_ms() {
            if budget < remaining {
                self.phase_elapsed_ms += budget;
                break;
            }
            budget -= remaining;
            match self.phase {
                FormPhase::Submitting => self.complete_submit(),
                FormPhase::Submitted => self.reset(),
                FormPhase::Idle => break,
            };
        }
        self.phase
    }

    pub fn is_locked(&self) -> bool {
        self.phase != FormPhase::Idle
    }

    /// Edits are ignored outside `Idle`.
    pub fn update(&mut self, field: ContactField, value: impl Into<String>) -> bool {
        if self.is_locked() {
            return false;
        }
        *self.draft.slot(field) = value.into();
        true
    }

    pub fn begin_submit(&mut self) -> Result<(), SubmitRejection> {
        if self.phase != FormPhase::Idle {
            return Err(SubmitRejection::Busy(self.phase));
        }
        self.draft.validate().map_err(SubmitRejection::Invalid)?;
        self.phase = FormPhase::Submitting;
        self.phase_elapsed_ms = 0;
        self.submission += 1;
        Ok(())
    }

    /// Called once the submit delay elapsed. Clears the draft.
    pub fn complete_submit(&mut self) -> bool {
        if self.phase != FormPhase::Submitting {
            return false;
        }
        self.phase = FormPhase::Submitted;
        self.phase_elapsed_ms = 0;
        self.draft = ContactDraft::default();
        true
    }

    /// Called once the confirmation delay elapsed.
    pub fn reset(&mut self) -> bool {
        if self.phase != FormPhase::Submitted {
            return false;
        }
        self.phase = FormPhase::Idle;
        self.phase_elapsed_ms = 0;
        true
    }
}
