//! In-memory domain model for contacts and interviews.
//!
//! # Responsibility
//! - Define validated value objects and the `Person`/`Interview` entities.
//! - Hold the live collections and their filtered views.
//!
//! # Invariants
//! - Value objects are valid from construction onwards.
//! - Collections never contain two "same" entities.

pub mod contact_book;
pub mod field;
pub mod filtered;
pub mod interview;
pub mod manager;
pub mod person;
pub mod unique_list;
pub mod user_prefs;

pub use contact_book::{ContactBook, ContactBookData, ContactBookDataError};
pub use field::FieldError;
pub use filtered::FilteredList;
pub use interview::{Header, Interview, Location};
pub use manager::{ModelError, ModelManager, ModelResult};
pub use person::{Category, Email, Name, Organisation, Person, Phone, Role};
pub use unique_list::{Identity, UniqueList, UniqueListError};
pub use user_prefs::UserPrefs;
