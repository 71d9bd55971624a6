//! Appending and positional insertion, including node splits

use super::node::{walk_while, Link, Node, LIMIT, MAXSIZE};
use super::QuickList;
use crate::{Cursor, Error};

impl<T> QuickList<T> {
    /// Appends `value` to the end of the list, returning a [`Cursor`] at the new element
    ///
    /// A new node is only allocated if the last node is full (or there are no nodes yet).
    ///
    /// ## Errors
    ///
    /// Returns [`Error::AllocationFailure`] if a new node was needed and could not be allocated,
    /// in which case `value` is dropped.
    pub fn push(&mut self, value: T) -> Result<Cursor<'_, T>, Error> {
        let link = seek_append(&mut self.head);
        let (node, offset) = append_into_link(link, value)?;
        Ok(Cursor::new(Some(node), offset))
    }

    /// Inserts `value` at position `index`, shifting every later element back by one
    ///
    /// An index equal to [`self.len()`](Self::len) appends to the list. If the node the element
    /// lands in is full, it is split in two: the last `MAXSIZE - LIMIT` elements move into a new
    /// node directly after it, and the element goes into whichever half now contains `index`.
    ///
    /// ## Errors
    ///
    /// * [`Error::InvalidArgument`] if the list is empty and `index != 0`
    /// * [`Error::IndexOutOfRange`] if the list is non-empty and `index > self.len()`; `len` in
    ///   the error is the full length of the list
    /// * [`Error::AllocationFailure`] if a node was needed and could not be allocated
    ///
    /// The list is unchanged in every case.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        if self.head.is_none() && index != 0 {
            return Err(Error::InvalidArgument { index });
        }

        let len = self.len();
        if index > len {
            return Err(Error::IndexOutOfRange { index, len });
        }

        // Descend by capacity rather than by count: the target is the first node where the
        // offset falls within `MAXSIZE`, even if that's past the node's current end. That can
        // only leave the offset past the end when there's a later node, so we keep walking
        // by count in that case.
        let mut offset = index;
        let link = walk_while(&mut self.head, |node| {
            let past = offset >= MAXSIZE || offset > node.len();
            if past {
                offset -= node.len();
            }
            past
        });

        insert_into_link(link, offset, value)
    }

    /// Appends every element of `iter` to the list, stopping at the first allocation failure
    ///
    /// Unlike repeated calls to [`push`](Self::push), the end of the chain is only searched for
    /// once.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::AllocationFailure`] if a node could not be allocated. Elements appended
    /// before the failure stay in the list; the rest of `iter` is not consumed.
    pub fn try_extend<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), Error> {
        let mut link = &mut self.head;
        for value in iter {
            link = seek_append(link);
            append_into_link(link, value)?;
        }

        Ok(())
    }
}

impl<T> Extend<T> for QuickList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        if self.try_extend(iter).is_err() {
            std::alloc::handle_alloc_error(super::node_layout::<T>());
        }
    }
}

impl<T> FromIterator<T> for QuickList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = QuickList::new();
        list.extend(iter);
        list
    }
}

/// Walks from `link` to the place an appended element belongs
///
/// This is either the last node (if it has room) or the empty link after it. Starting from the
/// list's head, that's the end of the list; starting from a link that was previously returned by
/// this function, it's at most one step further.
pub(crate) fn seek_append<T>(link: &mut Link<T>) -> &mut Link<T> {
    walk_while(link, |node| node.next.is_some() || node.is_full())
}

/// Appends `value` to the node at `link`, allocating that node if the link is empty
///
/// The node at `link` must not be full. Returns the node the value was added to, along with the
/// value's offset in it.
pub(crate) fn append_into_link<T>(
    link: &mut Link<T>,
    value: T,
) -> Result<(&Node<T>, usize), Error> {
    let node = match link {
        Some(node) => node,
        None => link.insert(Node::try_boxed()?),
    };

    node.elems.push(value);
    let offset = node.elems.len() - 1;
    let node: &Node<T> = node;
    Ok((node, offset))
}

/// Inserts `value` at `offset` within the node at `link`, splitting the node if it's full
///
/// If `link` is empty, `offset` must be zero and a new node is allocated for the value.
/// Otherwise, `offset` must not be greater than the node's length.
pub(super) fn insert_into_link<T>(
    link: &mut Link<T>,
    offset: usize,
    value: T,
) -> Result<(), Error> {
    let node = match link {
        Some(node) => node,
        None => {
            debug_assert_eq!(offset, 0);
            append_into_link(link, value)?;
            return Ok(());
        }
    };

    if !node.is_full() {
        node.elems.insert(offset, value);
        return Ok(());
    }

    debug_println!("splitting full node for insertion at offset {offset}");

    // Allocate first, so that a failure leaves the node as it was
    let mut sibling = Node::try_boxed()?;
    sibling.elems.extend(node.elems.drain(LIMIT..));

    if offset <= LIMIT {
        node.elems.insert(offset, value);
    } else {
        sibling.elems.insert(offset - LIMIT, value);
    }

    sibling.next = node.next.take();
    node.next = Some(sibling);
    Ok(())
}
