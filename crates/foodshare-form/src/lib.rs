//! Event registration form.
//!
//! [`EventForm`] holds the values and per-input states of one form. Input
//! schedules a debounced validation pass covering every field touched
//! during the burst plus the fields linked to them; [`EventForm::tick`] runs
//! it once the quiet period has elapsed. Submission goes through a
//! confirmation step before the form is sent with an [`EventApi`].
//!
//! [`EventApi`]: foodshare_client::EventApi

mod config;
mod debounce;
mod error;
mod form;

pub use config::{FormConfig, MAX_IMAGE_SLOTS};
pub use debounce::Debouncer;
pub use error::{FormError, Result};
pub use form::{EventForm, SOCIAL_URL_PREFIX, SubmitPhase};
