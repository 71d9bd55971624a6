//! Wrapper module for [`QuickList`] iterator types -- [`Iter`], [`IntoIter`], and [`Nodes`]

use std::iter::FusedIterator;
use std::{mem, slice};

use arrayvec::ArrayVec;

use super::node::{Node, MAXSIZE};
use super::QuickList;

impl<T> QuickList<T> {
    /// Calls `visit` on every element of the list, in order
    ///
    /// This is a single forward pass over the chain. The list is borrowed for the whole pass, so
    /// `visit` can't change it.
    pub fn for_each<F: FnMut(&T)>(&self, mut visit: F) {
        for node in self.nodes() {
            for elem in node.elems.iter() {
                visit(elem);
            }
        }
    }

    /// Returns an iterator over references to the elements of the list
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next_node: self.head.as_deref(),
            current: <&[T]>::default().iter(),
        }
    }

    /// Returns an iterator over the nodes of the list, from first to last
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes {
            next: self.head.as_deref(),
        }
    }
}

/// An iterator over the elements of a [`QuickList`], produced by [`QuickList::iter`]
pub struct Iter<'t, T> {
    next_node: Option<&'t Node<T>>,
    current: slice::Iter<'t, T>,
}

impl<'t, T> Clone for Iter<'t, T> {
    fn clone(&self) -> Self {
        Iter {
            next_node: self.next_node,
            current: self.current.clone(),
        }
    }
}

impl<'t, T> Iterator for Iter<'t, T> {
    type Item = &'t T;

    fn next(&mut self) -> Option<&'t T> {
        loop {
            if let Some(elem) = self.current.next() {
                return Some(elem);
            }

            let node = self.next_node?;
            self.current = node.elems.iter();
            self.next_node = node.next();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower = self.current.len();
        match self.next_node {
            None => (lower, Some(lower)),
            Some(_) => (lower, None),
        }
    }
}

impl<'t, T> FusedIterator for Iter<'t, T> {}

impl<'t, T> IntoIterator for &'t QuickList<T> {
    type Item = &'t T;
    type IntoIter = Iter<'t, T>;

    fn into_iter(self) -> Iter<'t, T> {
        self.iter()
    }
}

/// An iterator over the nodes of a [`QuickList`], produced by [`QuickList::nodes`]
pub struct Nodes<'t, T> {
    next: Option<&'t Node<T>>,
}

impl<'t, T> Iterator for Nodes<'t, T> {
    type Item = &'t Node<T>;

    fn next(&mut self) -> Option<&'t Node<T>> {
        let node = self.next?;
        self.next = node.next();
        Some(node)
    }
}

impl<'t, T> FusedIterator for Nodes<'t, T> {}

/// An owning iterator over the elements of a [`QuickList`]
///
/// Nodes are freed as soon as their last element has been yielded.
pub struct IntoIter<T> {
    rest: QuickList<T>,
    current: arrayvec::IntoIter<T, MAXSIZE>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if let Some(elem) = self.current.next() {
                return Some(elem);
            }

            let mut node = self.rest.head.take()?;
            self.rest.head = node.next.take();
            self.current = mem::take(&mut node.elems).into_iter();
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for QuickList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            rest: self,
            current: ArrayVec::new().into_iter(),
        }
    }
}
