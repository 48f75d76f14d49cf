use addrbook_core::{AddressBook, BirthDate, Name, PhoneNumber, Record};
use addrbook_store::error::{StoreError, StoreErrorKind};
use addrbook_store::{paths, Store};
use tempfile::TempDir;

fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();

    let mut john = Record::with_phone(
        Name::new("john").expect("name"),
        PhoneNumber::new("1234567890").expect("phone"),
    );
    john.add_phone(PhoneNumber::new("+380671112233").expect("phone"));
    john.set_birthday(BirthDate::parse("1990-05-17").expect("birthday"));
    book.add_record(john);

    book.add_record(Record::new(Name::new("jill").expect("name")));

    let bob = Record::with_phone(
        Name::new("bob").expect("name"),
        PhoneNumber::new("380509998877").expect("phone"),
    );
    book.add_record(bob);
    book
}

fn snapshot(book: &AddressBook) -> Vec<Record> {
    book.records().cloned().collect()
}

#[test]
fn save_then_load_preserves_order_phones_and_birthdays() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    let book = sample_book();
    store.save_book(&book).expect("save");
    let loaded = store.load_book().expect("load");

    assert_eq!(snapshot(&loaded), snapshot(&book));
    assert_eq!(store.record_count().expect("count"), 3);
}

#[test]
fn save_overwrites_previous_snapshot() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    let mut book = sample_book();
    store.save_book(&book).expect("save");

    book.delete_record(&Name::new("john").unwrap()).expect("delete");
    book.rename_record(&Name::new("jill").unwrap(), Name::new("jane").unwrap())
        .expect("rename");
    store.save_book(&book).expect("save again");

    let loaded = store.load_book().expect("load");
    let names: Vec<_> = loaded.records().map(|r| r.name().to_string()).collect();
    assert_eq!(names, vec!["Jane", "Bob"]);
    let phone_rows: i64 = store
        .connection()
        .query_row("SELECT COUNT(*) FROM contact_phones;", [], |row| row.get(0))
        .expect("count phones");
    assert_eq!(phone_rows, 1);
}

#[test]
fn empty_store_loads_empty_book() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");
    assert!(store.load_book().expect("load").is_empty());
}

#[test]
fn reopened_file_round_trips() {
    let temp = TempDir::new().expect("temp dir");
    let path = paths::book_path_in(temp.path());

    {
        let store = Store::open(&path).expect("open");
        store.migrate().expect("migrate");
        store.save_book(&sample_book()).expect("save");
    }

    let store = Store::open(&path).expect("reopen");
    store.migrate().expect("migrate");
    assert_eq!(store.schema_version().expect("version"), 1);
    let loaded = store.load_book().expect("load");
    assert_eq!(snapshot(&loaded), snapshot(&sample_book()));
}

#[test]
fn corrupt_rows_surface_as_core_errors() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");
    store
        .connection()
        .execute(
            "INSERT INTO contacts (name, position, birthday) VALUES ('John', 0, '17.05.1990');",
            [],
        )
        .expect("insert");

    let err = store.load_book().expect_err("load should fail");
    assert_eq!(err.kind(), StoreErrorKind::Core);
    assert!(matches!(err, StoreError::Core(_)));
}

#[test]
fn discard_removes_database_and_sidecars() {
    let temp = TempDir::new().expect("temp dir");
    let path = paths::book_path_in(temp.path());

    let store = Store::open(&path).expect("open");
    store.migrate().expect("migrate");
    store.save_book(&sample_book()).expect("save");
    assert!(path.exists());

    store.discard(&path).expect("discard");
    assert!(!path.exists());
    assert!(!temp.path().join("addrbook.sqlite3-wal").exists());
    assert!(!temp.path().join("addrbook.sqlite3-shm").exists());
}

#[test]
fn resolve_book_path_creates_parent_dir() {
    let temp = TempDir::new().expect("temp dir");
    let custom = temp.path().join("nested").join("book.sqlite3");
    let resolved = paths::resolve_book_path(Some(custom.clone())).expect("resolve");
    assert_eq!(resolved, custom);
    assert!(temp.path().join("nested").is_dir());
}
