use crate::domain::{BirthDate, Name, PhoneNumber};
use crate::error::CoreError;
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<PhoneNumber>,
    birthday: Option<BirthDate>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn with_phone(name: Name, phone: PhoneNumber) -> Self {
        let mut record = Self::new(name);
        record.add_phone(phone);
        record
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&BirthDate> {
        self.birthday.as_ref()
    }

    pub fn has_phone(&self, phone: &PhoneNumber) -> bool {
        self.phones.contains(phone)
    }

    /// Appends without a duplicate check; callers decide whether a repeat is an error.
    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    pub fn delete_phone(&mut self, phone: &PhoneNumber) -> Result<(), CoreError> {
        let index = self
            .phones
            .iter()
            .position(|existing| existing == phone)
            .ok_or_else(|| CoreError::PhoneNotFound(phone.to_string()))?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replaces the first occurrence of `old`. Returns `false` when it is absent.
    pub fn change_phone(&mut self, old: &PhoneNumber, new: PhoneNumber) -> bool {
        match self.phones.iter_mut().find(|existing| **existing == *old) {
            Some(slot) => {
                *slot = new;
                true
            }
            None => false,
        }
    }

    pub fn set_birthday(&mut self, birthday: BirthDate) {
        self.birthday = Some(birthday);
    }

    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday
            .as_ref()
            .and_then(|birthday| birthday.days_until_next(today))
    }

    pub fn phones_label(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub(crate) fn set_name(&mut self, name: Name) {
        self.name = name;
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.phones.is_empty() {
            write!(f, " | Phones: {}", self.phones_label())?;
        }
        if let Some(birthday) = &self.birthday {
            write!(f, " | Birthday: {}", birthday)?;
        }
        Ok(())
    }
}
