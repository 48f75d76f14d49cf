use crate::domain::{Name, Record};
use indexmap::map::Values;

pub const DEFAULT_PAGE_SIZE: usize = 5;

const CONTACT_WIDTH: usize = 20;
const PHONES_WIDTH: usize = 45;
const BIRTHDAY_WIDTH: usize = 10;

/// Pre-rendered table pages over an [`AddressBook`](super::AddressBook).
///
/// Every page after the first starts with a blank line before its header.
pub struct Pages<'a> {
    records: Values<'a, Name, Record>,
    page_size: usize,
    started: bool,
}

impl<'a> Pages<'a> {
    pub(crate) fn new(records: Values<'a, Name, Record>, page_size: usize) -> Self {
        Self {
            records,
            page_size: page_size.max(1),
            started: false,
        }
    }
}

impl Iterator for Pages<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let rows: Vec<&Record> = self.records.by_ref().take(self.page_size).collect();
        if rows.is_empty() {
            return None;
        }

        let mut page = String::new();
        if self.started {
            page.push('\n');
        }
        self.started = true;

        page.push_str(&format_row("Contact", "Phones", "Birthday"));
        page.push_str(&"-".repeat(CONTACT_WIDTH + PHONES_WIDTH + BIRTHDAY_WIDTH + 6));
        page.push('\n');
        for record in rows {
            let birthday = record
                .birthday()
                .map(ToString::to_string)
                .unwrap_or_default();
            page.push_str(&format_row(
                record.name().as_str(),
                &record.phones_label(),
                &birthday,
            ));
        }
        Some(page)
    }
}

fn format_row(contact: &str, phones: &str, birthday: &str) -> String {
    format!(
        "{:<cw$} | {:<pw$} | {:<bw$}\n",
        contact,
        phones,
        birthday,
        cw = CONTACT_WIDTH,
        pw = PHONES_WIDTH,
        bw = BIRTHDAY_WIDTH,
    )
}
