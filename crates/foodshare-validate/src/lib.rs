//! Validation of event registration submissions.
//!
//! - [`checks`]: one pure check per input, returning the first [`Issue`]
//! - [`FieldGraph`]: dependencies between inputs and their evaluation order
//! - [`FormValidator`]: validates a submission in dependency order and
//!   produces a [`ValidationReport`]

pub mod checks;
mod engine;
mod graph;
pub mod issue;
mod patterns;
mod report;

pub use checks::{
    CheckResult, check_comuna, check_description, check_email, check_end_date, check_food_type,
    check_image, check_images, check_name, check_phone, check_region, check_sector,
    check_social_network, check_social_networks, check_start_date, comuna_given_region,
    end_date_given_start, parse_date_time, resolve_network,
};
pub use engine::FormValidator;
pub use graph::{FieldGraph, GraphError};
pub use issue::{Issue, MAX_IMAGE_SIZE, MIN_IMAGE_SIZE};
pub use report::{Outcome, ValidationReport};
