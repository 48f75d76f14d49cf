use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Name should have more than 1 char")]
    NameTooShort,
    #[error("Name should start with a letter")]
    NameLeadingWhitespace,
    #[error("Phone number should have 10-12 numbers without space")]
    InvalidPhone,
    #[error("Invalid birthday format. Please use YYYY-MM-DD format.")]
    InvalidBirthday,
    #[error("Contact {0} not found")]
    ContactNotFound(String),
    #[error("Phone {0} not found")]
    PhoneNotFound(String),
    #[error("Contact {0} already exists")]
    DuplicateContact(String),
    #[error("Phone {0} already exists")]
    DuplicatePhone(String),
}

