//! Submission state machine.
//!
//! ```text
//!   Editing --submit(valid)--> Sending --2xx--> Submitted
//!      ^                          |
//!      +-------- failure ---------+
//! ```
//!
//! One request per click, no retry. A submit while `Sending` is answered
//! with [`SubmitOutcome::Busy`] and never reaches the transport; after
//! `Submitted` the form is closed until the page is reloaded.

use std::cell::Cell;

use tracing::{debug, info, warn};

use crate::notify::Toast;
use crate::record::ContactRecord;
use crate::validate::{ContactDraft, FieldErrors};

/// Where the contact form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Form shown and editable.
    #[default]
    Editing,
    /// Request in flight; controls disabled.
    Sending,
    /// Accepted by the backend; confirmation shown.
    Submitted,
}

impl FormPhase {
    /// A request is in flight.
    pub fn is_loading(self) -> bool {
        self == FormPhase::Sending
    }

    /// The backend accepted the record.
    pub fn is_submitted(self) -> bool {
        self == FormPhase::Submitted
    }

    /// The submit control is usable.
    pub fn accepts_submit(self) -> bool {
        self == FormPhase::Editing
    }
}

/// Storage for the form phase.
///
/// The browser keeps the phase in a reactive signal so the view follows it;
/// tests use a plain [`Cell`].
pub trait PhaseCell {
    /// Current phase.
    fn phase(&self) -> FormPhase;
    /// Replace the phase.
    fn set_phase(&self, phase: FormPhase);
}

impl PhaseCell for Cell<FormPhase> {
    fn phase(&self) -> FormPhase {
        self.get()
    }

    fn set_phase(&self, phase: FormPhase) {
        self.set(phase);
    }
}

/// Why the outbound request did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The record could not be serialized.
    #[error("failed to encode contact record: {0}")]
    Encode(String),
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("contact endpoint returned HTTP {0}")]
    Status(u16),
}

/// Sends a validated record to the backend.
///
/// Success means the backend accepted the record; the response body is
/// not interpreted.
#[allow(async_fn_in_trait)]
pub trait ContactTransport {
    /// Deliver `record` once.
    async fn send(&self, record: &ContactRecord) -> Result<(), TransportError>;
}

/// Result of one click on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Accepted; the form is now closed.
    Sent,
    /// Request failed; the form is editable again.
    Failed(TransportError),
    /// Draft rejected by the schema; nothing was sent.
    Invalid(FieldErrors),
    /// Another submission is in flight; nothing was sent.
    Busy,
    /// Already accepted earlier; nothing was sent.
    AlreadySubmitted,
}

impl SubmitOutcome {
    /// The notice to show for this outcome: exactly one for a failure,
    /// none otherwise.
    pub fn failure_notice(&self, duration_ms: u64) -> Option<Toast> {
        match self {
            SubmitOutcome::Failed(_) => Some(Toast::submission_failed(duration_ms)),
            _ => None,
        }
    }
}

/// Validate `draft` and, if it passes, send it through `transport`.
///
/// Drives `phase` through `Editing -> Sending -> {Submitted | Editing}`.
/// Invalid drafts and submits outside `Editing` leave the phase untouched
/// and make no request.
pub async fn submit_contact<P, T>(phase: &P, transport: &T, draft: &ContactDraft) -> SubmitOutcome
where
    P: PhaseCell + ?Sized,
    T: ContactTransport + ?Sized,
{
    match phase.phase() {
        FormPhase::Sending => {
            debug!("contact submit ignored: request already in flight");
            return SubmitOutcome::Busy;
        }
        FormPhase::Submitted => {
            debug!("contact submit ignored: already submitted");
            return SubmitOutcome::AlreadySubmitted;
        }
        FormPhase::Editing => {}
    }

    let record = match draft.validate() {
        Ok(record) => record,
        Err(errors) => {
            debug!(fields = errors.len(), "contact draft rejected: {errors}");
            return SubmitOutcome::Invalid(errors);
        }
    };

    phase.set_phase(FormPhase::Sending);
    debug!(
        country = %record.country,
        company_size = %record.company_size,
        "sending contact request"
    );

    match transport.send(&record).await {
        Ok(()) => {
            phase.set_phase(FormPhase::Submitted);
            info!("contact request accepted");
            SubmitOutcome::Sent
        }
        Err(err) => {
            phase.set_phase(FormPhase::Editing);
            warn!(error = %err, "contact request failed");
            SubmitOutcome::Failed(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{Field, FieldError};
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    /// Answers every request with a fixed result and records what it got.
    struct FixedTransport {
        result: Result<(), TransportError>,
        sent: RefCell<Vec<ContactRecord>>,
    }

    impl FixedTransport {
        fn ok() -> Self {
            Self::answering(Ok(()))
        }

        fn answering(result: Result<(), TransportError>) -> Self {
            Self {
                result,
                sent: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.sent.borrow().len()
        }
    }

    impl ContactTransport for FixedTransport {
        async fn send(&self, record: &ContactRecord) -> Result<(), TransportError> {
            self.sent.borrow_mut().push(record.clone());
            self.result.clone()
        }
    }

    /// Holds the request open until the test releases it.
    struct GatedTransport {
        gate: RefCell<Option<oneshot::Receiver<Result<(), TransportError>>>>,
        calls: Cell<usize>,
    }

    impl ContactTransport for GatedTransport {
        async fn send(&self, _record: &ContactRecord) -> Result<(), TransportError> {
            self.calls.set(self.calls.get() + 1);
            let rx = self.gate.borrow_mut().take();
            match rx {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(TransportError::Network("gate dropped".into()))),
                None => Err(TransportError::Network("gate already used".into())),
            }
        }
    }

    fn valid_draft() -> ContactDraft {
        let mut draft = ContactDraft::default();
        draft.set(Field::FirstName, "Margaret");
        draft.set(Field::LastName, "Hamilton");
        draft.set(Field::Email, "mh@example.com");
        draft.set(Field::PhoneNumber, "555-0101");
        draft.set(Field::Country, "USA");
        draft.set(Field::CompanySize, "51-200");
        draft
    }

    #[test]
    fn success_closes_the_form() {
        let phase = Cell::new(FormPhase::Editing);
        let transport = FixedTransport::ok();

        let outcome = block_on(submit_contact(&phase, &transport, &valid_draft()));

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(phase.get(), FormPhase::Submitted);
        assert!(!phase.get().accepts_submit());
        assert_eq!(outcome.failure_notice(5000), None);
        assert_eq!(transport.sent.borrow()[0].email, "mh@example.com");
    }

    #[test]
    fn resubmit_after_success_sends_nothing() {
        let phase = Cell::new(FormPhase::Editing);
        let transport = FixedTransport::ok();

        block_on(submit_contact(&phase, &transport, &valid_draft()));
        let again = block_on(submit_contact(&phase, &transport, &valid_draft()));

        assert_eq!(again, SubmitOutcome::AlreadySubmitted);
        assert_eq!(transport.calls(), 1);
    }

    #[test]
    fn non_success_status_reopens_the_form_with_one_notice() {
        let phase = Cell::new(FormPhase::Editing);
        let transport = FixedTransport::answering(Err(TransportError::Status(500)));

        let outcome = block_on(submit_contact(&phase, &transport, &valid_draft()));

        assert_eq!(outcome, SubmitOutcome::Failed(TransportError::Status(500)));
        assert_eq!(phase.get(), FormPhase::Editing);
        assert!(phase.get().accepts_submit());

        let notices: Vec<Toast> = outcome.failure_notice(5000).into_iter().collect();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].description, "Something went wrong");
    }

    #[test]
    fn network_error_is_recoverable() {
        let phase = Cell::new(FormPhase::Editing);
        let failing = FixedTransport::answering(Err(TransportError::Network("offline".into())));

        let first = block_on(submit_contact(&phase, &failing, &valid_draft()));
        assert!(matches!(first, SubmitOutcome::Failed(TransportError::Network(_))));
        assert_eq!(phase.get(), FormPhase::Editing);

        let working = FixedTransport::ok();
        let second = block_on(submit_contact(&phase, &working, &valid_draft()));
        assert_eq!(second, SubmitOutcome::Sent);
    }

    #[test]
    fn invalid_draft_never_reaches_transport() {
        let phase = Cell::new(FormPhase::Editing);
        let transport = FixedTransport::ok();
        let mut draft = valid_draft();
        draft.set(Field::Email, "abc");
        draft.set(Field::PhoneNumber, "");

        let outcome = block_on(submit_contact(&phase, &transport, &draft));

        let errors = match outcome {
            SubmitOutcome::Invalid(errors) => errors,
            other => panic!("expected validation failure, got {other:?}"),
        };
        assert_eq!(errors.get(Field::Email), Some(FieldError::InvalidEmail));
        assert_eq!(errors.get(Field::PhoneNumber), Some(FieldError::Required));
        assert_eq!(transport.calls(), 0);
        assert_eq!(phase.get(), FormPhase::Editing);
    }

    #[test]
    fn second_click_while_in_flight_is_ignored() {
        let phase = Cell::new(FormPhase::Editing);
        let (release, gate) = oneshot::channel();
        let transport = GatedTransport {
            gate: RefCell::new(Some(gate)),
            calls: Cell::new(0),
        };
        let draft = valid_draft();

        let (first, second, ()) = block_on(async {
            futures::join!(
                submit_contact(&phase, &transport, &draft),
                async {
                    // first submit is parked on the gate by now
                    assert!(phase.get().is_loading());
                    submit_contact(&phase, &transport, &draft).await
                },
                async move {
                    let _ = release.send(Ok(()));
                },
            )
        });

        assert_eq!(first, SubmitOutcome::Sent);
        assert_eq!(second, SubmitOutcome::Busy);
        assert_eq!(transport.calls.get(), 1);
        assert_eq!(phase.get(), FormPhase::Submitted);
    }

    #[test]
    fn works_through_a_trait_object_cell() {
        let phase = Cell::new(FormPhase::Editing);
        let cell: &dyn PhaseCell = &phase;
        let transport = FixedTransport::ok();

        let outcome = block_on(submit_contact(cell, &transport, &valid_draft()));
        assert_eq!(outcome, SubmitOutcome::Sent);
    }

    #[test]
    fn phase_flags() {
        assert!(FormPhase::Editing.accepts_submit());
        assert!(FormPhase::Sending.is_loading());
        assert!(!FormPhase::Sending.accepts_submit());
        assert!(FormPhase::Submitted.is_submitted());
        assert!(!FormPhase::Submitted.is_loading());
    }
}
