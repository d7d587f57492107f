//! Optional free-text inputs bounded by length.

use foodshare_model::FieldName;

use super::CheckResult;
use crate::issue::Issue;

/// The sector is optional but bounded in length.
pub fn check_sector(sector: &str) -> CheckResult {
    check_max_length(FieldName::Sector, sector)
}

/// The description is optional but bounded in length.
pub fn check_description(description: &str) -> CheckResult {
    check_max_length(FieldName::Description, description)
}

fn check_max_length(field: FieldName, value: &str) -> CheckResult {
    let Some((_, max)) = field.length_bounds() else {
        return Ok(());
    };
    let length = value.chars().count();
    if length > max {
        return Err(Issue::TooLong { field, length, max });
    }
    Ok(())
}
