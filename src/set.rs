//! Wrapper module for [`QuickSet`]

use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use crate::order::{Natural, Order};
use crate::{Cursor, Error, Iter, QuickList};

/// A sorted set stored in a [`QuickList`], ordered by `O`
///
/// This is a thin wrapper around the list's `set_*` methods that fixes the ordering at the type
/// level, so that it can't accidentally change between calls. The default ordering is
/// [`Natural`], i.e. the elements' [`Ord`] implementation; see the [`order`] module for the
/// others.
///
/// Lookups skip whole nodes at a time, but are still linear in the number of nodes -- this is a
/// compact set, not a search tree.
///
/// ```
/// use quicklist::QuickSet;
///
/// let mut set = QuickSet::<u32>::new();
/// assert_eq!(set.insert(5), Ok(true));
/// assert_eq!(set.insert(1), Ok(true));
/// assert_eq!(set.insert(3), Ok(true));
/// assert_eq!(set.insert(3), Ok(false));
///
/// assert!(set.contains(&3));
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 3, 5]);
/// ```
///
/// [`order`]: crate::order
pub struct QuickSet<T, O = Natural> {
    list: QuickList<T>,
    order: PhantomData<fn() -> O>,
}

impl<T, O: Order<T>> QuickSet<T, O> {
    /// Creates a new, empty set
    pub const fn new() -> Self {
        QuickSet {
            list: QuickList::new(),
            order: PhantomData,
        }
    }

    /// Returns the number of elements in the set
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the set contains no elements
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Adds `value` to the set, returning `false` if an equal element was already present
    ///
    /// ## Errors
    ///
    /// Returns [`Error::AllocationFailure`] if a node was needed and could not be allocated.
    pub fn insert(&mut self, value: T) -> Result<bool, Error> {
        self.list.set_insert_by(value, <O as Order<T>>::cmp)
    }

    /// Returns `true` if the set contains an element equal to `value`
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Returns a [`Cursor`] at the element equal to `value`, if there is one
    pub fn find(&self, value: &T) -> Option<Cursor<'_, T>> {
        self.list.set_find_by(value, <O as Order<T>>::cmp)
    }

    /// Removes the element equal to `value` from the set, returning it if it was present
    pub fn remove(&mut self, value: &T) -> Option<T> {
        self.list.set_remove_by(value, <O as Order<T>>::cmp)
    }

    /// Removes every element from the set
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Returns an iterator over the elements of the set, in ascending order
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }

    /// Returns the list backing the set
    pub fn as_list(&self) -> &QuickList<T> {
        &self.list
    }

    /// Consumes the set, returning the sorted list backing it
    pub fn into_list(self) -> QuickList<T> {
        self.list
    }

    /// (*Test-only*) Validates the backing list, including the order of its elements
    #[cfg(any(test, feature = "fuzz"))]
    pub fn validate(&self) {
        self.list.validate_sorted_by(<O as Order<T>>::cmp);
    }
}

impl<T, O: Order<T>> Default for QuickSet<T, O> {
    fn default() -> Self {
        QuickSet::new()
    }
}

impl<T: Clone, O> Clone for QuickSet<T, O> {
    fn clone(&self) -> Self {
        QuickSet {
            list: self.list.clone(),
            order: PhantomData,
        }
    }
}

impl<T: Debug, O> Debug for QuickSet<T, O> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_set().entries(self.list.iter()).finish()
    }
}

impl<T: PartialEq, O> PartialEq for QuickSet<T, O> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<T: Eq, O> Eq for QuickSet<T, O> {}

impl<T, O: Order<T>> Extend<T> for QuickSet<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if self.insert(value).is_err() {
                std::alloc::handle_alloc_error(crate::list::node_layout::<T>());
            }
        }
    }
}

impl<T, O: Order<T>> FromIterator<T> for QuickSet<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = QuickSet::new();
        set.extend(iter);
        set
    }
}

impl<'t, T, O> IntoIterator for &'t QuickSet<T, O> {
    type Item = &'t T;
    type IntoIter = Iter<'t, T>;

    fn into_iter(self) -> Iter<'t, T> {
        self.list.iter()
    }
}

impl<T, O> IntoIterator for QuickSet<T, O> {
    type Item = T;
    type IntoIter = crate::IntoIter<T>;

    fn into_iter(self) -> crate::IntoIter<T> {
        self.list.into_iter()
    }
}

#[cfg(feature = "fuzz")]
impl<'d, T, O> arbitrary::Arbitrary<'d> for QuickSet<T, O>
where
    T: arbitrary::Arbitrary<'d>,
    O: Order<T>,
{
    fn arbitrary(u: &mut arbitrary::Unstructured<'d>) -> arbitrary::Result<Self> {
        let mut set = QuickSet::new();
        for value in u.arbitrary_iter::<T>()? {
            if set.insert(value?).is_err() {
                return Err(arbitrary::Error::NotEnoughData);
            }
        }

        Ok(set)
    }
}
