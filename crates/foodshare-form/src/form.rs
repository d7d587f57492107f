//! The event registration form.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

use chrono::{NaiveDateTime, TimeDelta};
use foodshare_client::EventApi;
use foodshare_model::{
    EventSubmission, FieldFeedback, FieldName, FieldState, ImageUpload, ReferenceData,
    RegistrationResponse, SocialNetworkInput, SubmissionOutcome, format_date_time,
};
use foodshare_validate::{FormValidator, ValidationReport};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::{FormConfig, MAX_IMAGE_SLOTS};
use crate::debounce::Debouncer;
use crate::error::{FormError, Result};

/// Value pre-filled in a freshly added social network input.
pub const SOCIAL_URL_PREFIX: &str = "https://";

/// Where the form is in the submission flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitPhase {
    #[default]
    Editing,
    /// Client checks passed; waiting for the user to confirm.
    AwaitingConfirmation,
    /// The backend accepted and stored the event.
    Submitted,
}

/// One registration form: values, per-input states and the pending
/// instant validation.
#[derive(Debug, Clone)]
pub struct EventForm {
    validator: FormValidator,
    config: FormConfig,
    submission: EventSubmission,
    states: BTreeMap<FieldName, FieldState>,
    image_states: Vec<FieldState>,
    social_states: Vec<FieldState>,
    debouncer: Debouncer<BTreeSet<FieldName>>,
    phase: SubmitPhase,
}

impl EventForm {
    pub fn new(reference: ReferenceData, config: FormConfig) -> Self {
        Self::with_validator(FormValidator::new(reference), config)
    }

    pub fn with_validator(validator: FormValidator, config: FormConfig) -> Self {
        let debouncer = Debouncer::new(config.debounce());
        let mut form = Self {
            validator,
            config,
            submission: EventSubmission::default(),
            states: BTreeMap::new(),
            image_states: Vec::new(),
            social_states: Vec::new(),
            debouncer,
            phase: SubmitPhase::Editing,
        };
        form.reset();
        form
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn reference(&self) -> &ReferenceData {
        self.validator.reference()
    }

    pub fn submission(&self) -> &EventSubmission {
        &self.submission
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Current value of a singular input.
    pub fn value(&self, field: FieldName) -> Option<&str> {
        self.submission.text(field)
    }

    /// State of a singular input; `None` for list inputs.
    pub fn state(&self, field: FieldName) -> Option<&FieldState> {
        self.states.get(&field)
    }

    pub fn image_states(&self) -> &[FieldState] {
        &self.image_states
    }

    pub fn social_states(&self) -> &[FieldState] {
        &self.social_states
    }

    /// States of every input in form order, one per entry for lists.
    pub fn field_states(&self) -> Vec<(FieldName, Vec<FieldState>)> {
        FieldName::ALL
            .into_iter()
            .map(|field| {
                let states = match field {
                    FieldName::Images => self.image_states.clone(),
                    FieldName::SocialNetworks => self.social_states.clone(),
                    _ => self.states.get(&field).cloned().into_iter().collect(),
                };
                (field, states)
            })
            .collect()
    }

    /// Comunas offered for the selected region.
    pub fn comuna_options(&self) -> &[String] {
        self.reference()
            .comunas_of(&self.submission.region)
            .unwrap_or_default()
    }

    /// Record input on a singular field and schedule instant validation.
    pub fn set_value(
        &mut self,
        field: FieldName,
        value: impl Into<String>,
        now: Instant,
    ) -> Result<()> {
        self.expect_phase(SubmitPhase::Editing, "edit a field")?;
        let slot = self
            .submission
            .text_mut(field)
            .ok_or(FormError::ListField(field))?;
        *slot = value.into();
        self.touch(field, now);
        Ok(())
    }

    /// Fill start with `now` and end with `now` plus the configured duration.
    ///
    /// A duration that does not fit the calendar falls back to the default.
    pub fn default_dates(&mut self, now: NaiveDateTime) -> Result<()> {
        self.expect_phase(SubmitPhase::Editing, "edit a field")?;
        let default_hours = FormConfig::default().default_duration_hours;
        let end = TimeDelta::try_hours(self.config.default_duration_hours)
            .and_then(|duration| now.checked_add_signed(duration))
            .or_else(|| {
                warn!(
                    hours = self.config.default_duration_hours,
                    "event duration out of range, using default"
                );
                TimeDelta::try_hours(default_hours)
                    .and_then(|duration| now.checked_add_signed(duration))
            })
            .unwrap_or(now);
        self.submission.start_date = format_date_time(&now);
        self.submission.end_date = format_date_time(&end);
        Ok(())
    }

    pub fn image_slot_count(&self) -> usize {
        self.submission.images.len()
    }

    /// Add an empty image input; returns its index.
    pub fn add_image_slot(&mut self) -> Result<usize> {
        self.expect_phase(SubmitPhase::Editing, "add an image input")?;
        if self.submission.images.len() >= MAX_IMAGE_SLOTS {
            return Err(FormError::ImageSlotLimit {
                max: MAX_IMAGE_SLOTS,
            });
        }
        self.submission.images.push(None);
        self.image_states.push(FieldState::Untested);
        Ok(self.submission.images.len() - 1)
    }

    /// Remove an image input. The last remaining input is never removed.
    pub fn remove_image_slot(&mut self, index: usize) -> Result<bool> {
        self.expect_phase(SubmitPhase::Editing, "remove an image input")?;
        if self.submission.images.len() <= 1 || index >= self.submission.images.len() {
            return Ok(false);
        }
        self.submission.images.remove(index);
        self.image_states.remove(index);
        Ok(true)
    }

    /// Choose (or clear) the file of an image input.
    pub fn set_image(
        &mut self,
        index: usize,
        image: Option<ImageUpload>,
        now: Instant,
    ) -> Result<()> {
        self.expect_phase(SubmitPhase::Editing, "choose an image")?;
        let slot = self
            .submission
            .images
            .get_mut(index)
            .ok_or(FormError::NoSuchImageSlot { index })?;
        *slot = image;
        self.touch(FieldName::Images, now);
        Ok(())
    }

    /// Networks that already have an input, in the order they were added.
    pub fn added_networks(&self) -> impl Iterator<Item = &str> {
        self.submission
            .social_networks
            .iter()
            .map(|input| input.network.as_str())
    }

    /// Add an input for a network, pre-filled with `https://`.
    ///
    /// Returns `false` when the network already has one.
    pub fn add_social_network(&mut self, network: &str) -> Result<bool> {
        self.expect_phase(SubmitPhase::Editing, "add a social network")?;
        if !self.reference().is_social_network(network) {
            return Err(FormError::UnknownNetwork(network.to_string()));
        }
        if self.social_index(network).is_some() {
            return Ok(false);
        }
        self.submission
            .social_networks
            .push(SocialNetworkInput::new(network, SOCIAL_URL_PREFIX));
        self.social_states.push(FieldState::Untested);
        Ok(true)
    }

    pub fn remove_social_network(&mut self, network: &str) -> Result<bool> {
        self.expect_phase(SubmitPhase::Editing, "remove a social network")?;
        let Some(index) = self.social_index(network) else {
            return Ok(false);
        };
        self.submission.social_networks.remove(index);
        self.social_states.remove(index);
        Ok(true)
    }

    pub fn set_social_url(
        &mut self,
        network: &str,
        url: impl Into<String>,
        now: Instant,
    ) -> Result<()> {
        self.expect_phase(SubmitPhase::Editing, "edit a social network")?;
        let index = self
            .social_index(network)
            .ok_or_else(|| FormError::NetworkNotAdded(network.to_string()))?;
        self.submission.social_networks[index].url = url.into();
        self.touch(FieldName::SocialNetworks, now);
        Ok(())
    }

    fn social_index(&self, network: &str) -> Option<usize> {
        self.submission
            .social_networks
            .iter()
            .position(|input| input.network == network)
    }

    /// Add `field` to the pending validation pass and restart its delay.
    fn touch(&mut self, field: FieldName, now: Instant) {
        let mut fields = self.debouncer.cancel().unwrap_or_default();
        fields.insert(field);
        self.debouncer.schedule(now, fields);
    }

    /// Whether instant validation is waiting to run.
    pub fn has_pending_validation(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Run the pending validation pass once its delay has elapsed.
    ///
    /// Returns the fields whose state was recomputed.
    pub fn tick(&mut self, now: Instant) -> Vec<FieldName> {
        let Some(touched) = self.debouncer.poll(now) else {
            return Vec::new();
        };
        let report = self.validator.validate_touched(&self.submission, touched);
        self.apply_report(&report);
        report.fields().collect()
    }

    /// Validate every input now, dropping any pending pass.
    ///
    /// Returns whether the form passes the client checks.
    pub fn validate(&mut self) -> bool {
        self.debouncer.cancel();
        let report = self.validator.validate_all(&self.submission);
        self.apply_report(&report);
        let valid = report.is_valid();
        debug!(valid, "form validated");
        valid
    }

    fn apply_report(&mut self, report: &ValidationReport) {
        for (field, outcome) in report.iter() {
            let states = outcome.states();
            match field {
                FieldName::Images => {
                    self.image_states = fit(states, self.submission.images.len());
                }
                FieldName::SocialNetworks => {
                    self.social_states = fit(states, self.submission.social_networks.len());
                }
                _ => {
                    if let Some(state) = states.into_iter().next() {
                        self.states.insert(field, state);
                    }
                }
            }
        }
    }

    /// Clear every value and state, leaving one empty image input.
    pub fn reset(&mut self) {
        self.debouncer.cancel();
        self.submission = EventSubmission {
            images: vec![None],
            ..EventSubmission::default()
        };
        self.states = FieldName::ALL
            .into_iter()
            .filter(|field| !field.is_list())
            .map(|field| (field, FieldState::Untested))
            .collect();
        self.image_states = vec![FieldState::Untested];
        self.social_states.clear();
        self.phase = SubmitPhase::Editing;
    }

    /// Replace every value at once, as when restoring a saved draft.
    ///
    /// States start untested; nothing is validated until the next pass.
    pub fn fill(&mut self, mut submission: EventSubmission) -> Result<()> {
        if submission.images.len() > MAX_IMAGE_SLOTS {
            return Err(FormError::ImageSlotLimit {
                max: MAX_IMAGE_SLOTS,
            });
        }
        let mut seen = BTreeSet::new();
        for input in &submission.social_networks {
            if !self.reference().is_social_network(&input.network) {
                return Err(FormError::UnknownNetwork(input.network.clone()));
            }
            if !seen.insert(input.network.as_str()) {
                return Err(FormError::DuplicateNetwork(input.network.clone()));
            }
        }
        if submission.images.is_empty() {
            submission.images.push(None);
        }
        self.reset();
        self.image_states = vec![FieldState::Untested; submission.images.len()];
        self.social_states = vec![FieldState::Untested; submission.social_networks.len()];
        self.submission = submission;
        Ok(())
    }

    /// Run the client checks and, when they pass, wait for confirmation.
    pub fn request_submit(&mut self) -> Result<bool> {
        self.expect_phase(SubmitPhase::Editing, "request submission")?;
        let valid = self.validate();
        if valid {
            self.phase = SubmitPhase::AwaitingConfirmation;
        }
        Ok(valid)
    }

    /// Back out of the confirmation step.
    pub fn cancel_submit(&mut self) -> Result<()> {
        self.expect_phase(SubmitPhase::AwaitingConfirmation, "cancel submission")?;
        self.phase = SubmitPhase::Editing;
        Ok(())
    }

    /// Send the confirmed form and apply the backend's verdicts.
    ///
    /// The form ends [`SubmitPhase::Submitted`] when the event was stored and
    /// returns to editing otherwise, including on network failure.
    pub fn confirm<A>(&mut self, api: &A) -> Result<SubmissionOutcome>
    where
        A: EventApi + ?Sized,
    {
        self.expect_phase(SubmitPhase::AwaitingConfirmation, "confirm submission")?;
        let outcome = match api.register(&self.submission) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(error = %err, "registration failed");
                self.phase = SubmitPhase::Editing;
                return Err(err.into());
            }
        };
        self.apply_server_response(outcome.response());
        if outcome.saved() {
            info!("event registered");
            self.phase = SubmitPhase::Submitted;
        } else {
            info!("registration rejected by server checks");
            self.phase = SubmitPhase::Editing;
        }
        Ok(outcome)
    }

    /// Map per-field server verdicts onto the input states.
    pub fn apply_server_response(&mut self, response: &RegistrationResponse) {
        for (field, feedback) in response.fields() {
            match field {
                FieldName::Images => {
                    let len = self.submission.images.len();
                    self.image_states = fit(feedback_states(feedback, len), len);
                }
                FieldName::SocialNetworks => {
                    let len = self.submission.social_networks.len();
                    self.social_states = fit(feedback_states(feedback, len), len);
                }
                _ => {
                    if let Some(state) = feedback_states(feedback, 1).into_iter().next() {
                        self.states.insert(field, state);
                    }
                }
            }
        }
        for field in response.unknown_fields() {
            warn!(field, "ignoring verdict for unknown field");
        }
    }

    fn expect_phase(&self, expected: SubmitPhase, action: &'static str) -> Result<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(FormError::OutOfPhase {
                action,
                phase: self.phase,
            })
        }
    }
}

/// States for `len` entries from a verdict. A single verdict on a list
/// applies to every entry; a group verdict on a singular input keeps its
/// overall validity and first message.
fn feedback_states(feedback: &FieldFeedback, len: usize) -> Vec<FieldState> {
    match feedback {
        FieldFeedback::Single(valid, message) => {
            vec![FieldState::from_verdict(*valid, message); len.max(1)]
        }
        FieldFeedback::Group(valid, entries) if len == 1 && entries.len() != 1 => {
            let message = entries
                .iter()
                .find(|(entry_valid, _)| !entry_valid)
                .map_or("", |(_, message)| message.as_str());
            vec![FieldState::from_verdict(*valid, message)]
        }
        FieldFeedback::Group(_, entries) => entries
            .iter()
            .map(|(valid, message)| FieldState::from_verdict(*valid, message))
            .collect(),
    }
}

/// Resize to `len` entries; missing entries stay untested.
fn fit(mut states: Vec<FieldState>, len: usize) -> Vec<FieldState> {
    states.resize(len, FieldState::Untested);
    states
}
