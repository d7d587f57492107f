//! Compiled patterns shared by the field checks.

use std::sync::LazyLock;

use regex::Regex;

/// RFC 5322 approximation used by the registration form.
pub static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("Invalid email regex")
});

/// Chilean mobile number: `+` then 11 digits, single spaces allowed between digits.
pub static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+(?:[0-9] ?){10}[0-9]$").expect("Invalid phone regex"));

/// Shape of the start and end inputs: `YYYY-MM-DD HH:mm`.
pub static DATE_TIME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}$")
        .expect("Invalid date-time regex")
});

/// Accepted image file extensions.
pub static IMAGE_EXT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\.jpg|\.jpeg|\.png)$").expect("Invalid image regex"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_pattern() {
        for ok in [
            "juan@example.cl",
            "juan.perez@mail.example.com",
            "\"juan perez\"@example.cl",
            "x@[192.168.0.1]",
        ] {
            assert!(EMAIL_REGEX.is_match(ok), "{ok}");
        }
        for bad in ["juan", "juan@", "juan@cl", "ju an@example.cl", "a@b.c", "a..b@example.cl"] {
            assert!(!EMAIL_REGEX.is_match(bad), "{bad}");
        }
    }

    #[test]
    fn phone_pattern() {
        assert!(PHONE_REGEX.is_match("+56912345678"));
        assert!(PHONE_REGEX.is_match("+56 9 1234 5678"));
        assert!(!PHONE_REGEX.is_match("56912345678"));
        assert!(!PHONE_REGEX.is_match("+56  912345678"));
        assert!(!PHONE_REGEX.is_match("+5691234567"));
        assert!(!PHONE_REGEX.is_match("+56 912345678 "));
    }

    #[test]
    fn date_time_shape() {
        assert!(DATE_TIME_REGEX.is_match("2024-01-01 10:00"));
        assert!(!DATE_TIME_REGEX.is_match("2024-1-01 10:00"));
        assert!(!DATE_TIME_REGEX.is_match("2024-01-01T10:00"));
        assert!(!DATE_TIME_REGEX.is_match("2024-01-01 10:00:00"));
    }

    #[test]
    fn image_extension_pattern() {
        assert!(IMAGE_EXT_REGEX.is_match("plato.JPG"));
        assert!(IMAGE_EXT_REGEX.is_match("a.jpeg"));
        assert!(!IMAGE_EXT_REGEX.is_match("a.gif"));
        assert!(!IMAGE_EXT_REGEX.is_match("a.png.txt"));
    }
}
