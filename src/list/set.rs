//! Sorted-set operations over the node chain
//!
//! All of these assume that the list is already sorted and free of duplicates according to the
//! supplied comparison -- which is guaranteed if it's only ever modified through these methods
//! (or [`delete`](QuickList::delete), which can't break either property).

use std::cmp::Ordering;

use super::insert::{append_into_link, insert_into_link};
use super::node::{walk_while, Node};
use super::QuickList;
use crate::{Cursor, Error};

impl<T> QuickList<T> {
    /// Inserts `value` into the sorted list, returning `false` if an equal element is already
    /// present
    ///
    /// The search skips forward node by node while the value belongs past a node's last element.
    /// If the node it stops at has room and its last element is less than `value`, the value is
    /// appended there directly; otherwise it's inserted before the first greater element in that
    /// node (possibly splitting it). When the value is already present, the list is unchanged and
    /// `value` is dropped.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::AllocationFailure`] if a node was needed and could not be allocated.
    pub fn set_insert_by<F>(&mut self, value: T, mut cmp: F) -> Result<bool, Error>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let link = walk_while(&mut self.head, |node| belongs_after(node, &value, &mut cmp));

        let node = match link {
            Some(node) => node,
            None => {
                append_into_link(link, value)?;
                return Ok(true);
            }
        };

        let appends = match node.elems.last() {
            Some(last) => cmp(last, &value) == Ordering::Less,
            None => true,
        };
        if appends {
            // `belongs_after` already ruled out a full node here
            node.elems.push(value);
            return Ok(true);
        }

        let mut offset = node.elems.len();
        for (i, elem) in node.elems.iter().enumerate() {
            match cmp(&value, elem) {
                Ordering::Greater => (),
                Ordering::Equal => return Ok(false),
                Ordering::Less => {
                    offset = i;
                    break;
                }
            }
        }

        insert_into_link(link, offset, value)?;
        Ok(true)
    }

    /// Finds `target` in the sorted list, returning a [`Cursor`] at it if it's present
    ///
    /// Whole nodes are skipped while their last element is less than `target`, so this only
    /// scans the elements of a single node.
    pub fn set_find_by<F>(&self, target: &T, mut cmp: F) -> Option<Cursor<'_, T>>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut link = self.head.as_deref();
        while let Some(node) = link {
            match node.elems.last() {
                Some(last) if cmp(last, target) == Ordering::Less => link = node.next(),
                _ => break,
            }
        }

        let node = link?;
        for (i, elem) in node.elems.iter().enumerate() {
            match cmp(elem, target) {
                Ordering::Less => (),
                Ordering::Equal => return Some(Cursor::new(Some(node), i)),
                Ordering::Greater => return None,
            }
        }

        None
    }

    /// Removes the element equal to `value` from the list, returning it if it was present
    ///
    /// This scans the list element by element, so unlike [`set_find_by`], it doesn't rely on the
    /// list being sorted.
    ///
    /// [`set_find_by`]: Self::set_find_by
    pub fn set_remove_by<F>(&mut self, value: &T, mut cmp: F) -> Option<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let index = self
            .iter()
            .position(|elem| cmp(elem, value) == Ordering::Equal)?;

        self.delete(index).ok()
    }
}

impl<T: Ord> QuickList<T> {
    /// [`set_insert_by`](Self::set_insert_by), ordering elements with their [`Ord`]
    /// implementation
    pub fn set_insert(&mut self, value: T) -> Result<bool, Error> {
        self.set_insert_by(value, T::cmp)
    }

    /// [`set_find_by`](Self::set_find_by), ordering elements with their [`Ord`] implementation
    pub fn set_find(&self, target: &T) -> Option<Cursor<'_, T>> {
        self.set_find_by(target, T::cmp)
    }

    /// [`set_remove_by`](Self::set_remove_by), comparing elements with their [`Ord`]
    /// implementation
    pub fn set_remove(&mut self, value: &T) -> Option<T> {
        self.set_remove_by(value, T::cmp)
    }
}

/// Returns true if `value` belongs in some node after `node`
///
/// That's the case when the node's last element is less than `value` and either the node is full
/// or the next node starts at or before `value`.
fn belongs_after<T, F>(node: &Node<T>, value: &T, cmp: &mut F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    let past_last = match node.elems.last() {
        Some(last) => cmp(last, value) == Ordering::Less,
        None => false,
    };

    past_last
        && (node.is_full()
            || node
                .next()
                .and_then(|next| next.elems.first())
                .map_or(false, |first| cmp(first, value) != Ordering::Greater))
}
