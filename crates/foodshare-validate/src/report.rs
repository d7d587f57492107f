//! Result of validating a submission.

use std::collections::BTreeMap;

use foodshare_model::{FieldFeedback, FieldName, FieldState, RegistrationResponse};

use crate::checks::CheckResult;
use crate::issue::Issue;

/// Verdict for one field: a single result, or one per list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Single(CheckResult),
    Group(Vec<CheckResult>),
}

impl Outcome {
    /// A group is valid only when every entry is.
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Single(result) => result.is_ok(),
            Self::Group(results) => results.iter().all(Result::is_ok),
        }
    }

    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        let results: &[CheckResult] = match self {
            Self::Single(result) => std::slice::from_ref(result),
            Self::Group(results) => results,
        };
        results.iter().filter_map(|result| result.as_ref().err())
    }

    /// Field states, one per entry for groups.
    pub fn states(&self) -> Vec<FieldState> {
        match self {
            Self::Single(result) => vec![state_of(result)],
            Self::Group(results) => results.iter().map(state_of).collect(),
        }
    }

    /// Wire form: `[valid, message]` or `[valid, [[valid, message], ...]]`.
    pub fn to_feedback(&self) -> FieldFeedback {
        match self {
            Self::Single(result) => {
                let (valid, message) = verdict_of(result);
                FieldFeedback::Single(valid, message)
            }
            Self::Group(results) => {
                FieldFeedback::Group(self.is_valid(), results.iter().map(verdict_of).collect())
            }
        }
    }
}

fn state_of(result: &CheckResult) -> FieldState {
    match result {
        Ok(()) => FieldState::Valid,
        Err(issue) => FieldState::invalid(issue.message()),
    }
}

fn verdict_of(result: &CheckResult) -> (bool, String) {
    match result {
        Ok(()) => (true, String::new()),
        Err(issue) => (false, issue.message()),
    }
}

/// Outcomes keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    outcomes: BTreeMap<FieldName, Outcome>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldName, outcome: Outcome) {
        self.outcomes.insert(field, outcome);
    }

    pub fn get(&self, field: FieldName) -> Option<&Outcome> {
        self.outcomes.get(&field)
    }

    /// Whether a field was evaluated and accepted.
    pub fn is_field_valid(&self, field: FieldName) -> bool {
        self.get(field).is_some_and(Outcome::is_valid)
    }

    /// True when every evaluated field was accepted.
    pub fn is_valid(&self) -> bool {
        self.outcomes.values().all(Outcome::is_valid)
    }

    /// Evaluated fields in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &Outcome)> {
        self.outcomes.iter().map(|(field, outcome)| (*field, outcome))
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.outcomes.keys().copied()
    }

    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.outcomes.values().flat_map(Outcome::issues)
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Convert to the per-field map the registration endpoint returns.
    pub fn to_response(&self) -> RegistrationResponse {
        let mut response = RegistrationResponse::new();
        for (field, outcome) in self.iter() {
            response.insert(field, outcome.to_feedback());
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_is_invalid_when_any_entry_fails() {
        let outcome = Outcome::Group(vec![Ok(()), Err(Issue::ImageMissing)]);
        assert!(!outcome.is_valid());
        assert_eq!(outcome.issues().count(), 1);
        assert_eq!(
            outcome.to_feedback(),
            FieldFeedback::Group(
                false,
                vec![
                    (true, String::new()),
                    (false, "Debe subir una imagen.".to_string())
                ]
            )
        );
    }

    #[test]
    fn report_validity() {
        let mut report = ValidationReport::new();
        assert!(report.is_valid());
        report.insert(FieldName::Email, Outcome::Single(Ok(())));
        report.insert(FieldName::Phone, Outcome::Single(Err(Issue::PhoneFormat)));
        assert!(!report.is_valid());
        assert!(report.is_field_valid(FieldName::Email));
        assert!(!report.is_field_valid(FieldName::Region));
        assert_eq!(
            report.get(FieldName::Phone).map(Outcome::states),
            Some(vec![FieldState::invalid(
                "Número de celular no válido, ver ejemplo."
            )])
        );
    }
}
