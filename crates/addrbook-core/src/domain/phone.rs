use crate::error::CoreError;
use std::fmt;

const MIN_DIGITS: usize = 10;
const MAX_DIGITS: usize = 12;

/// Phone number in `+<digits>` form with 10 to 12 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        normalize_phone(raw).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn normalize_phone(raw: &str) -> Result<String, CoreError> {
    let (prefixed, digits) = match raw.strip_prefix('+') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };

    if !digits.bytes().all(|b| b.is_ascii_digit())
        || !(MIN_DIGITS..=MAX_DIGITS).contains(&digits.len())
    {
        return Err(CoreError::InvalidPhone);
    }

    if prefixed {
        return Ok(raw.to_string());
    }

    let prefix = match digits.len() {
        10 => "+38",
        11 => "+3",
        _ => "+",
    };
    Ok(format!("{prefix}{digits}"))
}

#[cfg(test)]
mod tests {
    use super::PhoneNumber;
    use crate::error::CoreError;

    #[test]
    fn phone_prefixes_by_length() {
        assert_eq!(
            PhoneNumber::new("1234567890").unwrap().as_str(),
            "+381234567890"
        );
        assert_eq!(
            PhoneNumber::new("81234567890").unwrap().as_str(),
            "+381234567890"
        );
        assert_eq!(
            PhoneNumber::new("381234567890").unwrap().as_str(),
            "+381234567890"
        );
    }

    #[test]
    fn phone_pads_bare_digits_to_twelve() {
        for raw in ["0501234567", "05012345678", "050123456789"] {
            let phone = PhoneNumber::new(raw).unwrap();
            let digits = phone.as_str().trim_start_matches('+');
            assert!(phone.as_str().starts_with('+'));
            assert_eq!(digits.len(), 12, "{raw}");
            assert!(digits.ends_with(raw), "{raw}");
        }
    }

    #[test]
    fn phone_normalization_is_idempotent() {
        for raw in ["0501234567", "05012345678", "050123456789"] {
            let once = PhoneNumber::new(raw).unwrap();
            let twice = PhoneNumber::new(once.as_str()).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn phone_accepts_prefixed_values() {
        assert_eq!(
            PhoneNumber::new("+491512345678").unwrap().as_str(),
            "+491512345678"
        );
        assert_eq!(
            PhoneNumber::new("+1234567890").unwrap().as_str(),
            "+1234567890"
        );
    }

    #[test]
    fn phone_rejects_invalid_values() {
        for raw in [
            "",
            "+",
            "123456789",
            "1234567890123",
            "+4915123456789",
            "12345 67890",
            "12345-67890",
            "+12345abcde",
            "++1234567890",
        ] {
            assert_eq!(
                PhoneNumber::new(raw).unwrap_err(),
                CoreError::InvalidPhone,
                "{raw}"
            );
        }
    }
}
