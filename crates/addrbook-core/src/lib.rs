pub mod book;
pub mod domain;
pub mod error;

pub use book::{AddressBook, Pages, DEFAULT_PAGE_SIZE};
pub use domain::*;
pub use error::CoreError;
