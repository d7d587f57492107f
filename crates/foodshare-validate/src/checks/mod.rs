//! Per-field checks.
//!
//! Every check is pure: it takes the current value (plus reference data or
//! the dependency's value where needed) and returns `Ok(())` or the first
//! [`Issue`] found, in the order the form reports them.

mod contact;
mod food;
mod images;
mod location;
mod schedule;
mod social;
mod text;

pub use contact::{check_email, check_name, check_phone};
pub use food::check_food_type;
pub use images::{check_image, check_images};
pub use location::{check_comuna, check_region, comuna_given_region};
pub use schedule::{check_end_date, check_start_date, end_date_given_start, parse_date_time};
pub use social::{check_social_network, check_social_networks, resolve_network};
pub use text::{check_description, check_sector};

use crate::issue::Issue;

/// Verdict of a single check.
pub type CheckResult = std::result::Result<(), Issue>;
