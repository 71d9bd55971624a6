//! Positional removal, with the merging that keeps the chain dense

use super::node::walk_while;
use super::QuickList;
use crate::Error;

impl<T> QuickList<T> {
    /// Removes and returns the element at `index`, shifting every later element forward by one
    ///
    /// After the removal, the node it came from is rebalanced:
    ///
    /// * If the node is now empty, it's unlinked from the chain and freed.
    /// * If it has a successor and holds [`LIMIT`] or fewer elements, it absorbs the entire
    ///   successor when both fit in a single node, or otherwise takes just the successor's first
    ///   element.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= self.len()`, leaving the list unchanged.
    ///
    /// [`LIMIT`]: crate::LIMIT
    pub fn delete(&mut self, index: usize) -> Result<T, Error> {
        let mut offset = index;
        let link = walk_while(&mut self.head, |node| {
            let past = offset >= node.len();
            if past {
                offset -= node.len();
            }
            past
        });

        let node = match link {
            Some(node) => node,
            None => {
                return Err(Error::IndexOutOfRange {
                    index,
                    len: index - offset,
                })
            }
        };

        let removed = node.elems.remove(offset);

        if node.elems.is_empty() {
            debug_println!("freeing emptied node");
            let next = node.next.take();
            *link = next;
        } else {
            node.rebalance();
        }

        Ok(removed)
    }

    /// Removes and returns the last element of the list, or `None` if it's empty
    pub fn pop(&mut self) -> Option<T> {
        let len = self.len();
        match len {
            0 => None,
            _ => self.delete(len - 1).ok(),
        }
    }
}
