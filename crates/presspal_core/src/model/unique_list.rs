//! Insertion-ordered list that rejects duplicate entities.
//!
//! # Invariants
//! - No two items satisfy `Identity::is_same` with each other.
//! - Replacement keeps the position of the replaced item.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Domain-specific "same entity" rule, looser than `PartialEq`.
pub trait Identity {
    fn is_same(&self, other: &Self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueListError {
    /// Operation would leave two "same" items in the list.
    Duplicate,
    /// Target item is not in the list.
    NotFound,
}

impl Display for UniqueListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Duplicate => write!(f, "operation would result in duplicate entries"),
            Self::NotFound => write!(f, "entry not found"),
        }
    }
}

impl Error for UniqueListError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueList<T> {
    items: Vec<T>,
}

impl<T> Default for UniqueList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identity + PartialEq> UniqueList<T> {
    /// Builds a list, rejecting input that already contains duplicates.
    pub fn from_vec(items: Vec<T>) -> Result<Self, UniqueListError> {
        let mut list = Self::default();
        for item in items {
            list.add(item)?;
        }
        Ok(list)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|existing| existing.is_same(item))
    }

    pub fn add(&mut self, item: T) -> Result<(), UniqueListError> {
        if self.contains(&item) {
            return Err(UniqueListError::Duplicate);
        }
        self.items.push(item);
        Ok(())
    }

    /// Replaces `target` with `edited` in place.
    ///
    /// `edited` may be the "same" entity as `target` (an in-place edit), but
    /// must not collide with any other entry.
    pub fn set(&mut self, target: &T, edited: T) -> Result<(), UniqueListError> {
        let position = self
            .items
            .iter()
            .position(|existing| existing == target)
            .ok_or(UniqueListError::NotFound)?;

        if !target.is_same(&edited) && self.contains(&edited) {
            return Err(UniqueListError::Duplicate);
        }

        self.items[position] = edited;
        Ok(())
    }

    pub fn remove(&mut self, target: &T) -> Result<T, UniqueListError> {
        let position = self
            .items
            .iter()
            .position(|existing| existing == target)
            .ok_or(UniqueListError::NotFound)?;
        Ok(self.items.remove(position))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}
