use crate::error::CoreError;
use std::fmt;

/// Contact name, stored capitalized so it can double as the lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        if raw.starts_with(char::is_whitespace) {
            return Err(CoreError::NameLeadingWhitespace);
        }
        if raw.chars().count() < 2 {
            return Err(CoreError::NameTooShort);
        }
        Ok(Self(capitalize(raw)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// First character upper-cased, the rest lower-cased.
pub fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(raw.len());
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{capitalize, Name};
    use crate::error::CoreError;

    #[test]
    fn name_is_capitalized() {
        assert_eq!(Name::new("john").unwrap().as_str(), "John");
        assert_eq!(Name::new("mARY").unwrap().as_str(), "Mary");
        assert_eq!(Name::new("jo").unwrap().as_str(), "Jo");
    }

    #[test]
    fn name_rejects_short_values() {
        assert_eq!(Name::new("j").unwrap_err(), CoreError::NameTooShort);
        assert_eq!(Name::new("").unwrap_err(), CoreError::NameTooShort);
    }

    #[test]
    fn name_rejects_leading_whitespace() {
        assert_eq!(
            Name::new(" john").unwrap_err(),
            CoreError::NameLeadingWhitespace
        );
    }

    #[test]
    fn name_counts_chars_not_bytes() {
        assert_eq!(Name::new("é").unwrap_err(), CoreError::NameTooShort);
        assert_eq!(Name::new("éva").unwrap().as_str(), "Éva");
    }

    #[test]
    fn capitalize_handles_digits_and_empty() {
        assert_eq!(capitalize("123"), "123");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("ohn"), "Ohn");
    }
}
