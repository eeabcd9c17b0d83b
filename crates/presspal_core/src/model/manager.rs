//! In-memory model shared by command execution.
//!
//! # Responsibility
//! - Own the contact book, user preferences and the displayed views.
//! - Apply mutations requested by commands.
//!
//! # Invariants
//! - Filtered views are recomputed on read; no refresh step exists.
//! - A predicate stays active across mutations until replaced. Adding an
//!   entity replaces it with "show all" so the new entry is visible.

use crate::index::Index;
use crate::model::contact_book::ContactBook;
use crate::model::filtered::FilteredList;
use crate::model::interview::Interview;
use crate::model::person::Person;
use crate::model::unique_list::UniqueListError;
use crate::model::user_prefs::UserPrefs;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelError {
    DuplicatePerson,
    PersonNotFound,
    DuplicateInterview,
    InterviewNotFound,
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicatePerson => write!(f, "person already exists"),
            Self::PersonNotFound => write!(f, "person not found"),
            Self::DuplicateInterview => write!(f, "interview already exists"),
            Self::InterviewNotFound => write!(f, "interview not found"),
        }
    }
}

impl Error for ModelError {}

fn person_error(err: UniqueListError) -> ModelError {
    match err {
        UniqueListError::Duplicate => ModelError::DuplicatePerson,
        UniqueListError::NotFound => ModelError::PersonNotFound,
    }
}

fn interview_error(err: UniqueListError) -> ModelError {
    match err {
        UniqueListError::Duplicate => ModelError::DuplicateInterview,
        UniqueListError::NotFound => ModelError::InterviewNotFound,
    }
}

#[derive(Debug, Default)]
pub struct ModelManager {
    contact_book: ContactBook,
    user_prefs: UserPrefs,
    filtered_persons: FilteredList<Person>,
    filtered_interviews: FilteredList<Interview>,
}

impl ModelManager {
    pub fn new(contact_book: ContactBook, user_prefs: UserPrefs) -> Self {
        debug!(
            "event=model_init module=model status=ok persons={} interviews={} contact_book_file={}",
            contact_book.persons().len(),
            contact_book.interviews().len(),
            user_prefs.contact_book_file_path().display()
        );
        Self {
            contact_book,
            user_prefs,
            filtered_persons: FilteredList::show_all(),
            filtered_interviews: FilteredList::show_all(),
        }
    }

    // User prefs

    pub fn user_prefs(&self) -> &UserPrefs {
        &self.user_prefs
    }

    pub fn set_user_prefs(&mut self, user_prefs: UserPrefs) {
        self.user_prefs = user_prefs;
    }

    pub fn contact_book_file_path(&self) -> &Path {
        self.user_prefs.contact_book_file_path()
    }

    pub fn set_contact_book_file_path(&mut self, path: impl Into<PathBuf>) {
        self.user_prefs.set_contact_book_file_path(path);
    }

    // Contact book

    pub fn contact_book(&self) -> &ContactBook {
        &self.contact_book
    }

    /// Replaces all data. Active predicates are kept.
    pub fn set_contact_book(&mut self, contact_book: ContactBook) {
        self.contact_book = contact_book;
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.contact_book.has_person(person)
    }

    pub fn add_person(&mut self, person: Person) -> ModelResult<()> {
        self.contact_book.add_person(person).map_err(person_error)?;
        self.filtered_persons.reset();
        Ok(())
    }

    pub fn delete_person(&mut self, target: &Person) -> ModelResult<Person> {
        self.contact_book.remove_person(target).map_err(person_error)
    }

    /// Replaces `target` in place with `edited`.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> ModelResult<()> {
        self.contact_book
            .set_person(target, edited)
            .map_err(person_error)
    }

    pub fn has_interview(&self, interview: &Interview) -> bool {
        self.contact_book.has_interview(interview)
    }

    pub fn add_interview(&mut self, interview: Interview) -> ModelResult<()> {
        self.contact_book
            .add_interview(interview)
            .map_err(interview_error)?;
        self.filtered_interviews.reset();
        Ok(())
    }

    pub fn delete_interview(&mut self, target: &Interview) -> ModelResult<Interview> {
        self.contact_book
            .remove_interview(target)
            .map_err(interview_error)
    }

    pub fn set_interview(&mut self, target: &Interview, edited: Interview) -> ModelResult<()> {
        self.contact_book
            .set_interview(target, edited)
            .map_err(interview_error)
    }

    // Filtered views

    pub fn filtered_person_list(&self) -> Vec<&Person> {
        self.filtered_persons.view(self.contact_book.persons())
    }

    pub fn filtered_person(&self, index: Index) -> Option<&Person> {
        self.filtered_persons.get(self.contact_book.persons(), index)
    }

    pub fn update_filtered_person_list(&mut self, predicate: impl Fn(&Person) -> bool + 'static) {
        self.filtered_persons.set_predicate(predicate);
    }

    pub fn filtered_interview_list(&self) -> Vec<&Interview> {
        self.filtered_interviews.view(self.contact_book.interviews())
    }

    pub fn filtered_interview(&self, index: Index) -> Option<&Interview> {
        self.filtered_interviews
            .get(self.contact_book.interviews(), index)
    }

    pub fn update_filtered_interview_list(
        &mut self,
        predicate: impl Fn(&Interview) -> bool + 'static,
    ) {
        self.filtered_interviews.set_predicate(predicate);
    }
}
