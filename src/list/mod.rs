//! Wrapper module containing the list itself

use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};

use crate::{Cursor, Error};

mod insert;
mod iter;
mod node;
mod remove;
mod set;
#[cfg(test)]
mod tests;

#[cfg(any(feature = "serde", feature = "fuzz"))]
pub(crate) use insert::{append_into_link, seek_append};
pub use iter::{IntoIter, Iter, Nodes};
pub(crate) use node::node_layout;
pub use node::{Node, LIMIT, MAXSIZE};

use node::Link;

/// An unrolled singly-linked list
///
/// Instead of one element per allocation, each node of the list stores a small array of up to
/// [`MAXSIZE`] elements. Compared to a classic linked list, this means far fewer allocations and
/// much better locality; compared to a `Vec`, insertion and removal in the middle only ever shift
/// the elements of a single node.
///
/// The price is that positional access walks the chain of nodes, so [`get`], [`insert`] and
/// friends are linear in the number of *nodes*. Every node except the last is kept at least half
/// full (see [`LIMIT`]), which bounds that walk at `len / LIMIT` steps.
///
/// The list can also be used as a sorted set, with the [`set_insert`], [`set_find`] and
/// [`set_remove`] family of methods (or the [`QuickSet`] wrapper, which fixes the ordering).
///
/// ## Examples
///
/// ```
/// use quicklist::QuickList;
///
/// let mut list = QuickList::new();
/// list.push('a').unwrap();
/// list.push('b').unwrap();
/// list.push('c').unwrap();
/// list.insert(1, 'x').unwrap();
/// assert_eq!(list.iter().collect::<String>(), "axbc");
///
/// assert_eq!(list.delete(0), Ok('a'));
/// assert_eq!(list.get(0), Ok(&'x'));
/// assert_eq!(list.len(), 3);
/// ```
///
/// [`get`]: Self::get
/// [`insert`]: Self::insert
/// [`set_insert`]: Self::set_insert
/// [`set_find`]: Self::set_find
/// [`set_remove`]: Self::set_remove
/// [`QuickSet`]: crate::QuickSet
pub struct QuickList<T> {
    pub(crate) head: Link<T>,
}

impl<T> QuickList<T> {
    /// Creates a new, empty list
    ///
    /// This does not allocate; the first node is only created by the first insertion.
    pub const fn new() -> Self {
        QuickList { head: None }
    }

    /// Returns the number of elements in the list
    ///
    /// This is a sum over the nodes, so it takes time linear in the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes().map(Node::len).sum()
    }

    /// Returns `true` if the list contains no elements (and therefore no nodes)
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of nodes in the chain
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Returns a reference to the element at `index`
    ///
    /// ## Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= self.len()`.
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        let (node, offset) = self.locate(index)?;
        Ok(&node.elems[offset])
    }

    /// Returns a mutable reference to the element at `index`
    ///
    /// ## Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= self.len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let mut offset = index;
        let mut link = self.head.as_deref_mut();

        while let Some(node) = link {
            if offset < node.elems.len() {
                return Ok(&mut node.elems[offset]);
            }

            offset -= node.elems.len();
            link = node.next.as_deref_mut();
        }

        Err(Error::IndexOutOfRange {
            index,
            len: index - offset,
        })
    }

    /// Replaces the element at `index` with `value`, returning the previous element
    ///
    /// ## Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= self.len()`. In that case, `value` is
    /// dropped.
    pub fn replace(&mut self, index: usize, value: T) -> Result<T, Error> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Returns a [`Cursor`] at the first element of the list
    ///
    /// If the list is empty, the cursor is already past the end.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.head.as_deref(), 0)
    }

    /// Returns a [`Cursor`] at the element at `index`
    ///
    /// ## Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= self.len()`.
    pub fn cursor_at(&self, index: usize) -> Result<Cursor<'_, T>, Error> {
        let (node, offset) = self.locate(index)?;
        Ok(Cursor::new(Some(node), offset))
    }

    /// Removes every element from the list, freeing all of its nodes
    ///
    /// The chain is freed one node at a time, so this is safe to call on arbitrarily long lists.
    /// This is also what the list's destructor does.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }

    /// Finds the node containing the element at `index`, and the element's offset in it
    fn locate(&self, index: usize) -> Result<(&Node<T>, usize), Error> {
        let mut offset = index;
        let mut link = self.head.as_deref();

        while let Some(node) = link {
            if offset < node.len() {
                return Ok((node, offset));
            }

            offset -= node.len();
            link = node.next();
        }

        Err(Error::IndexOutOfRange {
            index,
            len: index - offset,
        })
    }
}

impl<T> Default for QuickList<T> {
    fn default() -> Self {
        QuickList::new()
    }
}

#[cfg(not(feature = "nightly"))]
impl<T> Drop for QuickList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(feature = "nightly")]
unsafe impl<#[may_dangle] T> Drop for QuickList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for QuickList<T> {
    /// Clones the list node by node, preserving its exact layout
    fn clone(&self) -> Self {
        let mut new = QuickList::new();
        let mut tail = &mut new.head;

        for node in self.nodes() {
            let copy = Box::new(Node {
                elems: node.elems.clone(),
                next: None,
            });
            tail = &mut tail.insert(copy).next;
        }

        new
    }
}

impl<T: Debug> Debug for QuickList<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for QuickList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for QuickList<T> {}

impl<T: Hash> Hash for QuickList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for elem in self.iter() {
            elem.hash(state);
        }
    }
}

#[cfg(feature = "fuzz")]
impl<'d, T: arbitrary::Arbitrary<'d>> arbitrary::Arbitrary<'d> for QuickList<T> {
    fn arbitrary(u: &mut arbitrary::Unstructured<'d>) -> arbitrary::Result<Self> {
        let mut list = QuickList::new();
        let mut link = &mut list.head;
        for value in u.arbitrary_iter::<T>()? {
            link = seek_append(link);
            if append_into_link(link, value?).is_err() {
                return Err(arbitrary::Error::NotEnoughData);
            }
        }

        Ok(list)
    }
}

#[cfg(any(test, feature = "fuzz"))]
impl<T> QuickList<T> {
    /// (*Test-only*) Validates the chain, panicking if any node breaks the density invariants
    ///
    /// Every node must be non-empty, and every node except the last must hold at least [`LIMIT`]
    /// elements. The panic message names the index of the offending node.
    pub fn validate(&self) {
        for (idx, node) in self.nodes().enumerate() {
            valid_assert!(idx: !node.is_empty());
            valid_assert!(idx: node.len() <= MAXSIZE);
            if node.next.is_some() {
                valid_assert!(idx: node.len() >= LIMIT);
            }
        }
    }

    /// (*Test-only*) Like [`validate`](Self::validate), but additionally checks that the elements
    /// are strictly ascending according to `cmp`
    pub fn validate_sorted_by<F>(&self, mut cmp: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        self.validate();

        let mut prev: Option<&T> = None;
        for (idx, elem) in self.iter().enumerate() {
            if let Some(p) = prev {
                valid_assert!(idx: cmp(p, elem) == std::cmp::Ordering::Less);
            }
            prev = Some(elem);
        }
    }
}
