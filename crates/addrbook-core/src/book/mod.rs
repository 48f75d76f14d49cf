mod pages;

pub use pages::{Pages, DEFAULT_PAGE_SIZE};

use crate::domain::{capitalize, Name, Record};
use crate::error::CoreError;
use indexmap::IndexMap;

/// Contacts keyed by normalized name, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: IndexMap<Name, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &Name) -> bool {
        self.records.contains_key(name)
    }

    pub fn get(&self, name: &Name) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn get_mut(&mut self, name: &Name) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn require(&self, name: &Name) -> Result<&Record, CoreError> {
        self.get(name)
            .ok_or_else(|| CoreError::ContactNotFound(name.to_string()))
    }

    pub fn require_mut(&mut self, name: &Name) -> Result<&mut Record, CoreError> {
        self.records
            .get_mut(name)
            .ok_or_else(|| CoreError::ContactNotFound(name.to_string()))
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Inserts under the record's name, replacing any record already stored there.
    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name().clone(), record);
    }

    pub fn delete_record(&mut self, name: &Name) -> Result<Record, CoreError> {
        self.records
            .shift_remove(name)
            .ok_or_else(|| CoreError::ContactNotFound(name.to_string()))
    }

    /// Moves a record to a new key, keeping its position, phones and birthday.
    pub fn rename_record(&mut self, old: &Name, new: Name) -> Result<(), CoreError> {
        if !self.records.contains_key(old) {
            return Err(CoreError::ContactNotFound(old.to_string()));
        }
        if *old == new {
            return Ok(());
        }
        if self.records.contains_key(&new) {
            return Err(CoreError::DuplicateContact(new.to_string()));
        }

        let Some((index, _, mut record)) = self.records.shift_remove_full(old) else {
            return Err(CoreError::ContactNotFound(old.to_string()));
        };
        record.set_name(new.clone());
        self.records.shift_insert(index, new, record);
        Ok(())
    }

    /// Union match over birthday, phone and name.
    ///
    /// A numeric query matches the birth year exactly; any other query matches
    /// the full `YYYY-MM-DD` birthday. Either kind also matches when it is a
    /// substring of a phone or when the capitalized query occurs in the name.
    pub fn find(&self, query: &str) -> Vec<&Record> {
        let numeric = !query.is_empty() && query.bytes().all(|b| b.is_ascii_digit());
        let capitalized = capitalize(query);

        self.records
            .values()
            .filter(|record| {
                let birthday_hit = record.birthday().is_some_and(|birthday| {
                    if numeric {
                        birthday.year().to_string() == query
                    } else {
                        birthday.to_string() == query
                    }
                });
                birthday_hit
                    || record
                        .phones()
                        .iter()
                        .any(|phone| phone.as_str().contains(query))
                    || record.name().as_str().starts_with(&capitalized)
                    || record.name().as_str().contains(&capitalized)
            })
            .collect()
    }

    /// Lazily renders the book as fixed-width tables of `page_size` rows.
    pub fn paginate(&self, page_size: usize) -> Pages<'_> {
        Pages::new(self.records.values(), page_size)
    }
}
