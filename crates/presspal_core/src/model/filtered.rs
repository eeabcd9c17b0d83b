//! Predicate-restricted projection over a backing collection.
//!
//! The projection holds no items, only the predicate. Reading it against the
//! current backing slice always reflects the latest mutations.

use crate::index::Index;
use std::fmt::{Debug, Formatter};

pub type Predicate<T> = Box<dyn Fn(&T) -> bool>;

pub struct FilteredList<T> {
    predicate: Predicate<T>,
}

impl<T> FilteredList<T> {
    /// Creates a projection that shows every item.
    pub fn show_all() -> Self {
        Self {
            predicate: Box::new(|_: &T| true),
        }
    }

    /// Replaces the active predicate. It stays in force until replaced again.
    pub fn set_predicate(&mut self, predicate: impl Fn(&T) -> bool + 'static) {
        self.predicate = Box::new(predicate);
    }

    pub fn reset(&mut self) {
        self.set_predicate(|_| true);
    }

    pub fn matches(&self, item: &T) -> bool {
        (self.predicate)(item)
    }

    pub fn view<'a>(&self, source: &'a [T]) -> Vec<&'a T> {
        source.iter().filter(|item| self.matches(item)).collect()
    }

    /// Resolves a displayed index against `source`.
    pub fn get<'a>(&self, source: &'a [T], index: Index) -> Option<&'a T> {
        source
            .iter()
            .filter(|item| self.matches(item))
            .nth(index.zero_based())
    }

    pub fn len(&self, source: &[T]) -> usize {
        source.iter().filter(|item| self.matches(item)).count()
    }
}

impl<T> Default for FilteredList<T> {
    fn default() -> Self {
        Self::show_all()
    }
}

impl<T> Debug for FilteredList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilteredList").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::FilteredList;
    use crate::index::Index;

    #[test]
    fn predicate_applies_to_later_source_states() {
        let mut filtered = FilteredList::<u32>::show_all();
        filtered.set_predicate(|value| value % 2 == 0);

        let mut source = vec![1, 2, 3];
        assert_eq!(filtered.view(&source), vec![&2]);

        source.push(4);
        assert_eq!(filtered.len(&source), 2);
        assert_eq!(filtered.get(&source, Index::from_zero_based(1)), Some(&4));
        assert_eq!(filtered.get(&source, Index::from_zero_based(2)), None);

        filtered.reset();
        assert_eq!(filtered.len(&source), 4);
    }
}
