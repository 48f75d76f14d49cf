use crate::error::Result;
use addrbook_core::{AddressBook, BirthDate, Name, PhoneNumber, Record};
use rusqlite::{params, Connection};

pub fn load_book(conn: &Connection) -> Result<AddressBook> {
    let mut contacts =
        conn.prepare("SELECT name, birthday FROM contacts ORDER BY position ASC;")?;
    let mut phones = conn.prepare(
        "SELECT phone FROM contact_phones WHERE contact_name = ?1 ORDER BY position ASC;",
    )?;

    let rows = contacts.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, Option<String>>(1)?))
    })?;

    let mut book = AddressBook::new();
    for row in rows {
        let (stored_name, birthday) = row?;
        let mut record = Record::new(Name::new(&stored_name)?);

        let stored_phones = phones.query_map([&stored_name], |row| row.get::<_, String>(0))?;
        for phone in stored_phones {
            record.add_phone(PhoneNumber::new(&phone?)?);
        }
        if let Some(raw) = birthday {
            record.set_birthday(BirthDate::parse(&raw)?);
        }
        book.add_record(record);
    }
    Ok(book)
}

/// Replaces everything on disk with the current book in a single transaction.
pub fn save_book(conn: &Connection, book: &AddressBook) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute("DELETE FROM contact_phones;", [])?;
    tx.execute("DELETE FROM contacts;", [])?;

    {
        let mut insert_contact = tx.prepare(
            "INSERT INTO contacts (name, position, birthday) VALUES (?1, ?2, ?3);",
        )?;
        let mut insert_phone = tx.prepare(
            "INSERT INTO contact_phones (contact_name, position, phone) VALUES (?1, ?2, ?3);",
        )?;

        for (position, record) in book.records().enumerate() {
            let name = record.name().as_str();
            let birthday = record.birthday().map(ToString::to_string);
            insert_contact.execute(params![name, position as i64, birthday])?;
            for (phone_position, phone) in record.phones().iter().enumerate() {
                insert_phone.execute(params![name, phone_position as i64, phone.as_str()])?;
            }
        }
    }

    tx.commit()?;
    Ok(())
}

pub fn count_records(conn: &Connection) -> Result<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM contacts;", [], |row| row.get(0))?;
    Ok(count)
}
