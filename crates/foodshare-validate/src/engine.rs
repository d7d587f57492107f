//! Dependency-ordered validation of a whole submission.

use foodshare_model::{EventSubmission, FieldName, ReferenceData};

use crate::checks::{
    check_description, check_email, check_food_type, check_images, check_name, check_phone,
    check_region, check_sector, check_social_networks, check_start_date, comuna_given_region,
    end_date_given_start,
};
use crate::graph::FieldGraph;
use crate::issue::Issue;
use crate::report::{Outcome, ValidationReport};

/// Validates submissions against reference data.
///
/// Fields are evaluated in the graph's topological order. A dependent field
/// consumes the verdict its dependency already produced in the same pass.
#[derive(Debug, Clone)]
pub struct FormValidator {
    reference: ReferenceData,
    graph: FieldGraph,
}

impl FormValidator {
    /// Validator over the registration form graph.
    pub fn new(reference: ReferenceData) -> Self {
        Self::with_graph(reference, FieldGraph::form())
    }

    /// Validator with a custom dependency graph.
    pub fn with_graph(reference: ReferenceData, graph: FieldGraph) -> Self {
        Self { reference, graph }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn graph(&self) -> &FieldGraph {
        &self.graph
    }

    /// Validate every field.
    pub fn validate_all(&self, submission: &EventSubmission) -> ValidationReport {
        self.run(submission, self.graph.order())
    }

    /// Validate the given fields and whatever they depend on.
    pub fn validate_fields(
        &self,
        submission: &EventSubmission,
        fields: impl IntoIterator<Item = FieldName>,
    ) -> ValidationReport {
        let fields = self.graph.with_dependencies(fields);
        self.run(submission, &fields)
    }

    /// Validate what changed after the user touched `fields`: their
    /// dependencies, the fields themselves and their dependents.
    pub fn validate_touched(
        &self,
        submission: &EventSubmission,
        touched: impl IntoIterator<Item = FieldName>,
    ) -> ValidationReport {
        let fields = self.graph.revalidation_set_of(touched);
        self.run(submission, &fields)
    }

    fn run(&self, submission: &EventSubmission, order: &[FieldName]) -> ValidationReport {
        let mut report = ValidationReport::new();
        for &field in order {
            let outcome = self.evaluate(field, submission, &report);
            tracing::debug!(
                field = %field,
                valid = outcome.is_valid(),
                issues = ?outcome.issues().map(Issue::code).collect::<Vec<_>>(),
                "field validated"
            );
            report.insert(field, outcome);
        }
        report
    }

    fn evaluate(
        &self,
        field: FieldName,
        submission: &EventSubmission,
        report: &ValidationReport,
    ) -> Outcome {
        let reference = &self.reference;
        let s = submission;
        match field {
            FieldName::Region => Outcome::Single(check_region(&s.region, reference)),
            FieldName::Comuna => {
                let region_valid = self.dependency_valid(FieldName::Region, s, report);
                Outcome::Single(comuna_given_region(
                    &s.comuna,
                    &s.region,
                    region_valid,
                    reference,
                ))
            }
            FieldName::Sector => Outcome::Single(check_sector(&s.sector)),
            FieldName::Name => Outcome::Single(check_name(&s.name)),
            FieldName::Email => Outcome::Single(check_email(&s.email)),
            FieldName::Phone => Outcome::Single(check_phone(&s.phone)),
            FieldName::StartDate => Outcome::Single(check_start_date(&s.start_date)),
            FieldName::EndDate => {
                let start_valid = self.dependency_valid(FieldName::StartDate, s, report);
                Outcome::Single(end_date_given_start(
                    &s.end_date,
                    &s.start_date,
                    start_valid,
                ))
            }
            FieldName::Description => Outcome::Single(check_description(&s.description)),
            FieldName::FoodType => Outcome::Single(check_food_type(&s.food_type, reference)),
            FieldName::Images => Outcome::Group(check_images(&s.images)),
            FieldName::SocialNetworks => Outcome::Group(check_social_networks(
                &s.social_networks,
                &reference.social_networks,
            )),
        }
    }

    /// Verdict of a dependency: taken from this pass when already computed,
    /// evaluated on the spot otherwise.
    fn dependency_valid(
        &self,
        dependency: FieldName,
        submission: &EventSubmission,
        report: &ValidationReport,
    ) -> bool {
        match report.get(dependency) {
            Some(outcome) => outcome.is_valid(),
            None => self.evaluate(dependency, submission, report).is_valid(),
        }
    }
}
