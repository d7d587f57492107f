//! Contact name, email and phone.

use foodshare_model::FieldName;

use super::CheckResult;
use crate::issue::Issue;
use crate::patterns::{EMAIL_REGEX, PHONE_REGEX};

/// The organizer name is required and bounded in length.
pub fn check_name(name: &str) -> CheckResult {
    if name.is_empty() {
        return Err(Issue::NameMissing);
    }
    let length = name.chars().count();
    if let Some((min, max)) = FieldName::Name.length_bounds()
        && !(min..=max).contains(&length)
    {
        return Err(Issue::NameLength { length });
    }
    Ok(())
}

/// The email is required and must look like `user@host.tld`.
pub fn check_email(email: &str) -> CheckResult {
    if email.is_empty() {
        return Err(Issue::EmailMissing);
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(Issue::EmailFormat);
    }
    Ok(())
}

/// The phone is optional; only a non-empty value is checked.
pub fn check_phone(phone: &str) -> CheckResult {
    if phone.is_empty() || PHONE_REGEX.is_match(phone) {
        Ok(())
    } else {
        Err(Issue::PhoneFormat)
    }
}
