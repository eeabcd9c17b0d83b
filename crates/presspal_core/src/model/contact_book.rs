//! Contact book aggregate: every person and interview known to the app.
//!
//! # Invariants
//! - Persons and interviews are each free of duplicates.
//! - Deserialization rejects data that would break the invariant above.

use crate::model::interview::Interview;
use crate::model::person::Person;
use crate::model::unique_list::{UniqueList, UniqueListError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Persisted shape of a contact book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactBookData {
    #[serde(default)]
    pub persons: Vec<Person>,
    #[serde(default)]
    pub interviews: Vec<Interview>,
}

/// Raised when raw data would put duplicates into a contact book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactBookDataError {
    DuplicatePerson,
    DuplicateInterview,
}

impl Display for ContactBookDataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicatePerson => write!(f, "Persons list contains duplicate person(s)."),
            Self::DuplicateInterview => {
                write!(f, "Interviews list contains duplicate interview(s).")
            }
        }
    }
}

impl Error for ContactBookDataError {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContactBookData", into = "ContactBookData")]
pub struct ContactBook {
    persons: UniqueList<Person>,
    interviews: UniqueList<Interview>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn persons(&self) -> &[Person] {
        self.persons.as_slice()
    }

    pub fn interviews(&self) -> &[Interview] {
        self.interviews.as_slice()
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.contains(person)
    }

    pub fn add_person(&mut self, person: Person) -> Result<(), UniqueListError> {
        self.persons.add(person)
    }

    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), UniqueListError> {
        self.persons.set(target, edited)
    }

    pub fn remove_person(&mut self, target: &Person) -> Result<Person, UniqueListError> {
        self.persons.remove(target)
    }

    pub fn has_interview(&self, interview: &Interview) -> bool {
        self.interviews.contains(interview)
    }

    pub fn add_interview(&mut self, interview: Interview) -> Result<(), UniqueListError> {
        self.interviews.add(interview)
    }

    pub fn set_interview(
        &mut self,
        target: &Interview,
        edited: Interview,
    ) -> Result<(), UniqueListError> {
        self.interviews.set(target, edited)
    }

    pub fn remove_interview(&mut self, target: &Interview) -> Result<Interview, UniqueListError> {
        self.interviews.remove(target)
    }
}

impl TryFrom<ContactBookData> for ContactBook {
    type Error = ContactBookDataError;

    fn try_from(value: ContactBookData) -> Result<Self, Self::Error> {
        let persons = UniqueList::from_vec(value.persons)
            .map_err(|_| ContactBookDataError::DuplicatePerson)?;
        let interviews = UniqueList::from_vec(value.interviews)
            .map_err(|_| ContactBookDataError::DuplicateInterview)?;
        Ok(Self {
            persons,
            interviews,
        })
    }
}

impl From<ContactBook> for ContactBookData {
    fn from(value: ContactBook) -> Self {
        Self {
            persons: value.persons.into_vec(),
            interviews: value.interviews.into_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactBook, ContactBookDataError};
    use crate::model::unique_list::UniqueListError;
    use crate::model::Person;

    fn person(name: &str) -> Person {
        serde_json::from_value(serde_json::json!({
            "name": name,
            "phone": "98765432",
            "email": "someone@example.com",
            "organisation": "ABC Corp"
        }))
        .unwrap()
    }

    #[test]
    fn add_then_has_person() {
        let mut book = ContactBook::new();
        assert!(!book.has_person(&person("Bob")));

        book.add_person(person("Bob")).unwrap();
        assert!(book.has_person(&person("Bob")));
        assert_eq!(
            book.add_person(person("Bob")),
            Err(UniqueListError::Duplicate)
        );
    }

    #[test]
    fn deserialize_rejects_duplicate_persons() {
        let value = serde_json::json!({
            "persons": [
                serde_json::to_value(person("Bob")).unwrap(),
                serde_json::to_value(person("Bob")).unwrap(),
            ]
        });

        let err = serde_json::from_value::<ContactBook>(value).unwrap_err();
        assert!(
            err.to_string()
                .contains(&ContactBookDataError::DuplicatePerson.to_string()),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn serialized_shape_has_both_collections() {
        let mut book = ContactBook::new();
        book.add_person(person("Bob")).unwrap();

        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["persons"][0]["name"], "Bob");
        assert_eq!(json["interviews"], serde_json::json!([]));
    }
}
