//! Management of nodes
//!
//! Each [`Node`] is a fixed-capacity run of up to [`MAXSIZE`] elements, plus the owning link to
//! the node after it. All of the chain's topology lives in these links: the list itself only
//! holds the link to the first node, and an empty list holds no node at all.
//!
//! Nodes are aligned to a cache line. With pointer-sized elements, a node is exactly two cache
//! lines; the count and the link share the second line with the tail of the array.

use arrayvec::ArrayVec;
use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::ptr::NonNull;

use crate::Error;

/// The maximum number of elements stored in a single node
pub const MAXSIZE: usize = 14;

/// Nodes holding this many elements or fewer after a removal are merged with their successor
///
/// This is also the size of the left half of a split, so every node except the last always holds
/// at least `LIMIT` elements.
pub const LIMIT: usize = 7;

/// An owning link to the next node in the chain, or `None` at the end of it
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single block of elements in a [`QuickList`](crate::QuickList)
///
/// Nodes are only ever handed out by shared reference, through [`Cursor::node`] or
/// [`QuickList::nodes`]; they're mostly useful for inspecting how the elements are laid out.
///
/// [`Cursor::node`]: crate::Cursor::node
/// [`QuickList::nodes`]: crate::QuickList::nodes
#[repr(align(64))]
pub struct Node<T> {
    pub(crate) elems: ArrayVec<T, MAXSIZE>,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// Allocates a new, empty node
    ///
    /// Unlike `Box::new`, running out of memory is reported as an [`Error::AllocationFailure`]
    /// instead of aborting.
    pub(crate) fn try_boxed() -> Result<Box<Self>, Error> {
        alloc_node(Node {
            elems: ArrayVec::new(),
            next: None,
        })
    }

    /// Returns the number of elements in the node
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// Returns `true` if the node holds no elements
    ///
    /// Nodes reachable from a list are never empty; this only exists for completeness.
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Returns `true` if the node holds [`MAXSIZE`] elements
    pub fn is_full(&self) -> bool {
        self.elems.is_full()
    }

    /// Returns the elements stored in this node, in order
    pub fn as_slice(&self) -> &[T] {
        &self.elems
    }

    /// Returns the node after this one, if there is one
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    /// Restores the density of the chain after an element has been removed from this node
    ///
    /// If the node has a successor and is now at or below [`LIMIT`], it either absorbs the whole
    /// successor (when both fit into one node) or takes the successor's first element. The caller
    /// is responsible for unlinking the node if it became empty.
    pub(super) fn rebalance(&mut self) {
        let next_len = match self.next.as_deref() {
            Some(next) => next.len(),
            None => return,
        };

        let len = self.elems.len();
        if len == 0 || len > LIMIT {
            return;
        }

        if len + next_len <= MAXSIZE {
            debug_println!("merging node of {len} with successor of {next_len}");
            if let Some(mut absorbed) = self.next.take() {
                self.elems.extend(absorbed.elems.drain(..));
                self.next = absorbed.next.take();
            }
        } else if let Some(next) = self.next.as_deref_mut() {
            debug_println!("moving one element from successor of {next_len} into node of {len}");
            let moved = next.elems.remove(0);
            self.elems.push(moved);
        }
    }
}

impl<T: Debug> Debug for Node<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_list().entries(self.elems.iter()).finish()
    }
}

/// Follows the chain from `link` for as long as `step` returns true for the node there
///
/// Returns the first link whose node was rejected by `step`, or the empty link at the end of the
/// chain. `step` only sees each node by shared reference, so it's free to count or compare.
pub(crate) fn walk_while<T, F>(mut link: &mut Link<T>, mut step: F) -> &mut Link<T>
where
    F: FnMut(&Node<T>) -> bool,
{
    loop {
        let advance = match link.as_deref() {
            Some(node) => step(node),
            None => false,
        };
        if !advance {
            return link;
        }

        if let Some(node) = link {
            link = &mut node.next;
        }
    }
}

/// Heap-allocates `node`, returning an error instead of aborting if the allocator fails
fn alloc_node<T>(node: Node<T>) -> Result<Box<Node<T>>, Error> {
    let layout = Layout::new::<Node<T>>();

    // SAFETY: `alloc` may produce UB if `layout` has a size of zero. A `Node` always contains the
    // array's length and the link to the next node, so its size is never zero.
    let maybe_null_ptr = unsafe { alloc::alloc(layout) } as *mut Node<T>;

    match NonNull::new(maybe_null_ptr) {
        Some(p) => {
            // SAFETY: `.write()` requires that `p.as_ptr()` is valid for writes, and is properly
            // aligned. This is guaranteed by a non-null return from `alloc::alloc()`.
            unsafe { p.as_ptr().write(node) };
            // SAFETY: the pointer was allocated by the global allocator with the layout of
            // `Node<T>` and now holds an initialized value, which is exactly what `Box` requires.
            Ok(unsafe { Box::from_raw(p.as_ptr()) })
        }
        None => Err(Error::AllocationFailure {
            size: layout.size(),
        }),
    }
}

/// Layout of a single node, for reporting allocation failures where no `Result` is available
pub(crate) fn node_layout<T>() -> Layout {
    Layout::new::<Node<T>>()
}

#[cfg(test)]
const _: () = {
    assert!(LIMIT * 2 == MAXSIZE);
    assert!(std::mem::align_of::<Node<&u8>>() == 64);
    assert!(std::mem::size_of::<Node<&u8>>() == 128);
};
