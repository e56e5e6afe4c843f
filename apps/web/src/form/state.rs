//! Form State Holder: one coherent snapshot of the form inputs and the outcome
//! of the latest submission.
//!
//! Inputs are overwritten verbatim by the setters (no keystroke validation).
//! Outcome fields change only through `begin_submission` / `settle`:
//!
//! ```text
//! Idle → validate → Rejected → Idle (error set)
//!                 → Pending  → Succeeded | Failed → Idle (result | error set)
//! ```
//!
//! Each accepted submission gets a sequence number. A settlement carrying an
//! older ticket is discarded, so a slow earlier call can never overwrite the
//! outcome of a later one.

use tracing::debug;

use crate::generation::generator::{generate, GenerationSettings};
use crate::generation::input::{RequiredFields, SubmissionInput};
use crate::generation::GenerateError;
use crate::llm_client::{CompletionProvider, Credential};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Pending,
}

/// Handle for one accepted submission. Carries the input snapshot taken at
/// trigger time so later edits don't leak into an in-flight call.
#[derive(Debug)]
pub struct SubmissionTicket {
    seq: u64,
    pub input: SubmissionInput,
}

#[derive(Debug, Default)]
pub struct FormState {
    credential: Credential,
    job_description: String,
    qualifications: String,
    current_resume: String,

    generated_resume: String,
    error: String,
    is_pending: bool,

    seq: u64,
}

impl FormState {
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn set_credential(&mut self, value: impl Into<String>) {
        self.credential = Credential::new(value);
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn set_job_description(&mut self, value: impl Into<String>) {
        self.job_description = value.into();
    }

    pub fn qualifications(&self) -> &str {
        &self.qualifications
    }

    pub fn set_qualifications(&mut self, value: impl Into<String>) {
        self.qualifications = value.into();
    }

    pub fn current_resume(&self) -> &str {
        &self.current_resume
    }

    pub fn set_current_resume(&mut self, value: impl Into<String>) {
        self.current_resume = value.into();
    }

    pub fn generated_resume(&self) -> &str {
        &self.generated_resume
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn is_pending(&self) -> bool {
        self.is_pending
    }

    pub fn phase(&self) -> Phase {
        if self.is_pending() {
            Phase::Pending
        } else {
            Phase::Idle
        }
    }

    pub fn input(&self) -> SubmissionInput {
        SubmissionInput {
            credential: self.credential.clone(),
            job_description: self.job_description.clone(),
            qualifications: self.qualifications.clone(),
            current_resume: self.current_resume.clone(),
        }
    }

    /// Starts a submission.
    ///
    /// Rejected input sets the validation message and returns `None` without
    /// touching the pending flag. Accepted input clears the previous outcome,
    /// marks the form pending and returns the ticket to settle with.
    pub fn begin_submission(&mut self, required: RequiredFields) -> Option<SubmissionTicket> {
        let input = self.input();

        if let Err(e) = input.validate(required) {
            debug!("Submission rejected: missing {:?}", e.missing);
            self.generated_resume.clear();
            self.error = e.to_string();
            return None;
        }

        self.seq += 1;
        self.generated_resume.clear();
        self.error.clear();
        self.is_pending = true;

        Some(SubmissionTicket {
            seq: self.seq,
            input,
        })
    }

    /// Applies the outcome of a submission and leaves the pending state.
    ///
    /// Returns `false` and changes nothing when the ticket was superseded by a
    /// newer submission.
    pub fn settle(
        &mut self,
        ticket: &SubmissionTicket,
        outcome: Result<String, GenerateError>,
    ) -> bool {
        if ticket.seq != self.seq {
            debug!(
                "Discarding stale outcome for submission {} (current {})",
                ticket.seq, self.seq
            );
            return false;
        }

        match outcome {
            Ok(text) => {
                self.generated_resume = text;
                self.error.clear();
            }
            Err(e) => {
                self.generated_resume.clear();
                self.error = e.user_message();
            }
        }
        self.is_pending = false;
        true
    }

    /// Begin, call the provider once, settle. Pending is cleared as soon as
    /// the call returns, whatever the outcome.
    pub async fn submit(&mut self, provider: &dyn CompletionProvider, settings: GenerationSettings) {
        let Some(ticket) = self.begin_submission(settings.required) else {
            return;
        };

        let outcome = generate(provider, settings, &ticket.input).await;
        self.settle(&ticket, outcome);
    }
}
