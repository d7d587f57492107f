//! Data model shared by the food-sharing event crates.
//!
//! - [`FieldName`] / [`FieldState`]: inputs of the registration form
//! - [`EventSubmission`]: values the user submits
//! - [`ReferenceData`]: allowed values of the select inputs
//! - [`Event`], [`EventPage`] and the aggregate counts: read-only display data
//! - [`RegistrationResponse`]: per-field verdicts returned by the backend

pub mod error;
pub mod event;
pub mod field;
pub mod reference;
pub mod response;
pub mod stats;
pub mod submission;

pub use error::{ModelError, Result};
pub use event::{Event, EventImage, EventPage, SocialLink};
pub use field::{FieldName, FieldState};
pub use reference::{OTHER_NETWORK, ReferenceData, RegionsAndComunas, is_other_network};
pub use response::{FieldFeedback, RegistrationResponse, SubmissionOutcome};
pub use stats::{ComunaCoordinates, ComunaImageCount, DayCount, FoodTypeCount, MonthDaypartCounts};
pub use submission::{EventSubmission, ImageUpload, SocialNetworkInput};

/// Date-time format of the start and end inputs (`YYYY-MM-DD HH:mm`).
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format a date-time the way the start and end inputs expect it.
pub fn format_date_time(value: &chrono::NaiveDateTime) -> String {
    value.format(DATE_TIME_FORMAT).to_string()
}
