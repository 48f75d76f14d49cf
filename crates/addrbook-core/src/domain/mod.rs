pub mod birthday;
pub mod name;
pub mod phone;
pub mod record;

pub use birthday::{BirthDate, BIRTHDAY_FORMAT};
pub use name::{capitalize, Name};
pub use phone::PhoneNumber;
pub use record::Record;
