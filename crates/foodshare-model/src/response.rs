//! Per-field verdicts returned by the registration endpoint.
//!
//! Singular inputs come back as `[valid, message]`; the image and social
//! network inputs as `[overall_valid, [[valid, message], ...]]` with one
//! entry per input, in form order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::FieldName;

/// Verdict for one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldFeedback {
    Single(bool, String),
    Group(bool, Vec<(bool, String)>),
}

impl FieldFeedback {
    pub fn valid() -> Self {
        Self::Single(true, String::new())
    }

    pub fn is_valid(&self) -> bool {
        match self {
            Self::Single(valid, _) | Self::Group(valid, _) => *valid,
        }
    }
}

/// Verdicts keyed by wire field name.
///
/// Keys are kept as strings so that fields this client does not know about
/// survive a round trip; [`RegistrationResponse::fields`] skips them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrationResponse {
    entries: BTreeMap<String, FieldFeedback>,
}

impl RegistrationResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldName, feedback: FieldFeedback) {
        self.entries.insert(field.as_str().to_string(), feedback);
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldFeedback> {
        self.entries.get(field.as_str())
    }

    /// Known fields with their feedback, in form order.
    pub fn fields(&self) -> impl Iterator<Item = (FieldName, &FieldFeedback)> {
        FieldName::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|feedback| (field, feedback)))
    }

    /// Wire names the client does not recognise.
    pub fn unknown_fields(&self) -> impl Iterator<Item = &str> {
        self.entries
            .keys()
            .map(String::as_str)
            .filter(|key| key.parse::<FieldName>().is_err())
    }

    /// True when every known field was accepted.
    pub fn is_valid(&self) -> bool {
        self.fields().all(|(_, feedback)| feedback.is_valid())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Body returned by the registration endpoint.
///
/// Older deployments answer with the bare per-field map; newer ones wrap it
/// as `[saved, map]` where `saved` tells whether the event was stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmissionOutcome {
    Envelope(bool, RegistrationResponse),
    Bare(RegistrationResponse),
}

impl SubmissionOutcome {
    pub fn response(&self) -> &RegistrationResponse {
        match self {
            Self::Envelope(_, response) | Self::Bare(response) => response,
        }
    }

    /// Whether the backend stored the event.
    ///
    /// A bare map is taken as stored when every field was accepted.
    pub fn saved(&self) -> bool {
        match self {
            Self::Envelope(saved, response) => *saved && response.is_valid(),
            Self::Bare(response) => response.is_valid(),
        }
    }
}
