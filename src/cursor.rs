//! Wrapper module for [`Cursor`]

use std::fmt::{self, Debug, Formatter};

use crate::{Error, Node};

/// A position in a [`QuickList`], stored as a node and an offset into it
///
/// Cursors allow resumable, skip-ahead traversal: [`advance`] moves forward from the current
/// node, rather than descending from the head of the list each time like [`QuickList::get`]
/// does. They're produced by [`QuickList::cursor`], [`QuickList::cursor_at`],
/// [`QuickList::push`], and [`QuickList::set_find`].
///
/// A cursor borrows the list, so the list can't change while a cursor into it exists.
///
/// ## Examples
///
/// ```
/// use quicklist::QuickList;
///
/// let list: QuickList<u32> = (0..40).collect();
/// let mut cursor = list.cursor();
/// let mut seen = Vec::new();
/// while let Some(&v) = cursor.get() {
///     seen.push(v);
///     if cursor.advance(15).is_err() {
///         break;
///     }
/// }
///
/// assert_eq!(seen, [0, 15, 30]);
/// assert!(cursor.is_end());
/// ```
///
/// [`advance`]: Self::advance
/// [`QuickList`]: crate::QuickList
/// [`QuickList::get`]: crate::QuickList::get
/// [`QuickList::cursor`]: crate::QuickList::cursor
/// [`QuickList::cursor_at`]: crate::QuickList::cursor_at
/// [`QuickList::push`]: crate::QuickList::push
/// [`QuickList::set_find`]: crate::QuickList::set_find
pub struct Cursor<'t, T> {
    node: Option<&'t Node<T>>,
    index: usize,
}

// Manual implementations, so that they don't require `T: Clone`/`T: Copy`
impl<'t, T> Clone for Cursor<'t, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'t, T> Copy for Cursor<'t, T> {}

impl<'t, T> Cursor<'t, T> {
    pub(crate) fn new(node: Option<&'t Node<T>>, index: usize) -> Self {
        Cursor { node, index }
    }

    /// Returns the element at the cursor, or `None` if the cursor is past the end of the list
    pub fn get(&self) -> Option<&'t T> {
        self.node?.as_slice().get(self.index)
    }

    /// Returns the node the cursor is in, or `None` if it's past the end of the list
    pub fn node(&self) -> Option<&'t Node<T>> {
        self.node
    }

    /// Returns the cursor's offset within its node
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` if the cursor has moved past the last node of the list
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Moves the cursor forward by `stride` elements, crossing into later nodes as needed
    ///
    /// Only the nodes between the old and new positions are visited, regardless of where the
    /// cursor is in the list. A stride of zero leaves a valid cursor where it is.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::RangeError`] if the cursor was already past the end of the list, or if
    /// moving by `stride` runs off the end. In the second case, the cursor is left past the end.
    pub fn advance(&mut self, stride: usize) -> Result<(), Error> {
        let mut node = self.node.ok_or(Error::RangeError)?;
        let mut index = self.index.checked_add(stride).ok_or(Error::RangeError)?;

        while index >= node.len() {
            index -= node.len();
            match node.next() {
                Some(next) => node = next,
                None => {
                    self.node = None;
                    self.index = index;
                    return Err(Error::RangeError);
                }
            }
        }

        self.node = Some(node);
        self.index = index;
        Ok(())
    }
}

impl<'t, T: Debug> Debug for Cursor<'t, T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("elem", &self.get())
            .finish()
    }
}
