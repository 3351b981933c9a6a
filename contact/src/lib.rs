//! # bird-contact
//!
//! The contact form behind the Bird marketing site, without the browser.
//!
//! Everything the form does that is not markup lives here, so it can be
//! exercised natively with `cargo test`:
//!
//! - [`record`] - the contact record and its two enumeration fields
//! - [`validate`] - the editable draft and the schema check that turns it
//!   into a record
//! - [`submit`] - the submission state machine and the transport seam
//! - [`notify`] - the bounded toast queue used for failure notices
//! - [`config`] - endpoint and notification settings
//!
//! ## Quick Start
//!
//! ```rust
//! use bird_contact::{ContactDraft, Field};
//!
//! let mut draft = ContactDraft::default();
//! draft.set(Field::FirstName, "Ada");
//! draft.set(Field::LastName, "Lovelace");
//! draft.set(Field::Email, "ada@example.com");
//! draft.set(Field::PhoneNumber, "+1 555 0100");
//!
//! let record = draft.validate().expect("draft is complete");
//! let body = serde_json::to_string(&record).unwrap();
//! assert!(body.contains(r#""country":"India""#));
//! ```
//!
//! The browser side (`bird-site`) wires [`submit::submit_contact`] to a
//! reactive signal and a `fetch` transport.

#![warn(missing_docs)]

pub mod config;
pub mod notify;
pub mod record;
pub mod submit;
pub mod validate;

pub use config::ContactConfig;
pub use notify::{Toast, ToastId, Toasts};
pub use record::{CompanySize, ContactRecord, Country, UnknownOption};
pub use submit::{
    ContactTransport, FormPhase, PhaseCell, SubmitOutcome, TransportError, submit_contact,
};
pub use validate::{ContactDraft, Field, FieldError, FieldErrors};
