//! Mock implementation with essentially the same API as [`QuickList`], but backed by a vector
//!
//! [`QuickList`]: crate::QuickList

use crate::Error;
use std::cmp::Ordering;

/// A mock, inefficient implementation of the [`QuickList`](crate::QuickList) interface
///
/// Every operation reports the same errors as the list does, so the two can be driven side by
/// side and compared after each step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mock<T> {
    elems: Vec<T>,
}

impl<T> Mock<T> {
    pub fn new_empty() -> Self {
        Mock { elems: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elems
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elems.iter()
    }

    pub fn get(&self, index: usize) -> Result<&T, Error> {
        self.elems.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    pub fn replace(&mut self, index: usize, value: T) -> Result<T, Error> {
        let len = self.len();
        match self.elems.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(Error::IndexOutOfRange { index, len }),
        }
    }

    /// Appends `value`, returning its index
    pub fn push(&mut self, value: T) -> usize {
        self.elems.push(value);
        self.elems.len() - 1
    }

    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        if self.elems.is_empty() && index != 0 {
            return Err(Error::InvalidArgument { index });
        } else if index > self.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }

        self.elems.insert(index, value);
        Ok(())
    }

    pub fn delete(&mut self, index: usize) -> Result<T, Error> {
        if index >= self.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }

        Ok(self.elems.remove(index))
    }

    /// Moves a cursor at position `pos` forward by `stride`, returning the new position
    ///
    /// Mirrors [`Cursor::advance`](crate::Cursor::advance): a cursor that's already past the end,
    /// or that would land past the end, produces [`Error::RangeError`].
    pub fn advance(&self, pos: usize, stride: usize) -> Result<usize, Error> {
        if pos >= self.len() {
            return Err(Error::RangeError);
        }

        match pos.checked_add(stride) {
            Some(p) if p < self.len() => Ok(p),
            _ => Err(Error::RangeError),
        }
    }

    pub fn set_insert_by<F>(&mut self, value: T, mut cmp: F) -> bool
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match self.elems.binary_search_by(|e| cmp(e, &value)) {
            Ok(_) => false,
            Err(i) => {
                self.elems.insert(i, value);
                true
            }
        }
    }

    /// Returns the index of the element equal to `target`, if there is one
    pub fn set_find_by<F>(&self, target: &T, mut cmp: F) -> Option<usize>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.elems.binary_search_by(|e| cmp(e, target)).ok()
    }

    pub fn set_remove_by<F>(&mut self, value: &T, mut cmp: F) -> Option<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let i = self.elems.binary_search_by(|e| cmp(e, value)).ok()?;
        Some(self.elems.remove(i))
    }
}

impl<T> Default for Mock<T> {
    fn default() -> Self {
        Mock::new_empty()
    }
}

impl<T> FromIterator<T> for Mock<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Mock {
            elems: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Mock;
    use crate::Error;

    #[test]
    fn errors_match_the_list() {
        let mut mock: Mock<char> = Mock::new_empty();
        assert_eq!(mock.insert(1, 'a'), Err(Error::InvalidArgument { index: 1 }));
        assert_eq!(mock.insert(0, 'a'), Ok(()));
        assert_eq!(
            mock.insert(2, 'b'),
            Err(Error::IndexOutOfRange { index: 2, len: 1 })
        );
        assert_eq!(
            mock.delete(1),
            Err(Error::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(mock.get(0), Ok(&'a'));
        assert_eq!(mock.replace(0, 'z'), Ok('a'));
        assert_eq!(mock.delete(0), Ok('z'));
        assert!(mock.is_empty());
    }

    #[test]
    fn advance() {
        let mock: Mock<u8> = (0..10).collect();
        assert_eq!(mock.advance(0, 0), Ok(0));
        assert_eq!(mock.advance(3, 6), Ok(9));
        assert_eq!(mock.advance(3, 7), Err(Error::RangeError));
        assert_eq!(mock.advance(10, 0), Err(Error::RangeError));
        assert_eq!(mock.advance(1, usize::MAX), Err(Error::RangeError));
    }

    #[test]
    fn sorted_ops() {
        let mut mock = Mock::new_empty();
        for v in [3, 1, 2, 3] {
            mock.set_insert_by(v, u32::cmp);
        }
        assert_eq!(mock.as_slice(), [1, 2, 3]);
        assert_eq!(mock.set_find_by(&2, u32::cmp), Some(1));
        assert_eq!(mock.set_remove_by(&2, u32::cmp), Some(2));
        assert_eq!(mock.set_remove_by(&2, u32::cmp), None);
    }
}
