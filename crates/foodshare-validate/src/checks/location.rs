//! Region and comuna selects.

use foodshare_model::ReferenceData;

use super::CheckResult;
use crate::issue::Issue;

/// The region must be one of the reference regions.
pub fn check_region(region: &str, reference: &ReferenceData) -> CheckResult {
    if region.is_empty() {
        return Err(Issue::RegionMissing);
    }
    if !reference.is_region(region) {
        return Err(Issue::RegionUnknown {
            region: region.to_string(),
        });
    }
    Ok(())
}

/// Check a comuna, re-checking its region first.
pub fn check_comuna(comuna: &str, region: &str, reference: &ReferenceData) -> CheckResult {
    let region_valid = check_region(region, reference).is_ok();
    comuna_given_region(comuna, region, region_valid, reference)
}

/// Check a comuna against an already computed region verdict.
pub fn comuna_given_region(
    comuna: &str,
    region: &str,
    region_valid: bool,
    reference: &ReferenceData,
) -> CheckResult {
    if comuna.is_empty() {
        return Err(Issue::ComunaMissing);
    }
    if !region_valid {
        return Err(Issue::RegionRejected);
    }
    let known = reference
        .comunas_of(region)
        .is_some_and(|comunas| comunas.iter().any(|c| c == comuna));
    if !known {
        return Err(Issue::ComunaUnknown {
            region: region.to_string(),
            comuna: comuna.to_string(),
        });
    }
    Ok(())
}
