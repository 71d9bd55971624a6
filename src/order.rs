//! Orderings for the sorted-set layer
//!
//! The sorted-set operations on [`QuickList`] and the [`QuickSet`] wrapper never assume an
//! ordering for their elements; it's always supplied, either as a closure to the `*_by` methods
//! or as a type implementing [`Order`]. This module provides three of those:
//!
//! * [`Natural`] -- the element type's own [`Ord`] implementation (*default*)
//! * [`ByAddress`] -- the address that a reference or pointer points to, for sets of handles
//!   that should be compared by identity rather than by value
//! * [`Reverse`] -- any other ordering, reversed
//!
//! ```
//! use quicklist::order::ByAddress;
//! use quicklist::QuickSet;
//!
//! let values = [10, 10, 10];
//! let mut set: QuickSet<&i32, ByAddress> = QuickSet::new();
//! for v in &values {
//!     assert_eq!(set.insert(v), Ok(true));
//! }
//!
//! // All three are equal by value, but they're distinct objects
//! assert_eq!(set.len(), 3);
//! assert_eq!(set.insert(&values[1]), Ok(false));
//! ```
//!
//! [`QuickList`]: crate::QuickList
//! [`QuickSet`]: crate::QuickSet

use std::cmp::Ordering;
use std::marker::PhantomData;
use std::ptr::NonNull;
use std::rc::Rc;
use std::sync::Arc;

/// A total order over `T`, selected at the type level
///
/// Implementations must be consistent: if `cmp(a, b)` is `Less`, then `cmp(b, a)` is `Greater`,
/// and so on. Inconsistent orderings won't cause undefined behavior, but the sorted-set
/// operations may then fail to find elements or accept duplicates.
pub trait Order<T: ?Sized> {
    /// Compares `lhs` with `rhs`
    fn cmp(lhs: &T, rhs: &T) -> Ordering;
}

/// Orders values by their [`Ord`] implementation (*default*)
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Order<T> for Natural {
    fn cmp(lhs: &T, rhs: &T) -> Ordering {
        lhs.cmp(rhs)
    }
}

/// Orders references and pointers by the address they point to
///
/// Two handles are equal under this ordering exactly when they point to the same place. For
/// unsized pointees, only the address is compared; any metadata is ignored.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct ByAddress;

fn cmp_addr<U: ?Sized>(lhs: *const U, rhs: *const U) -> Ordering {
    lhs.cast::<()>().cmp(&rhs.cast::<()>())
}

impl<'r, U: ?Sized> Order<&'r U> for ByAddress {
    fn cmp(lhs: &&'r U, rhs: &&'r U) -> Ordering {
        cmp_addr::<U>(*lhs, *rhs)
    }
}

impl<'r, U: ?Sized> Order<&'r mut U> for ByAddress {
    fn cmp(lhs: &&'r mut U, rhs: &&'r mut U) -> Ordering {
        cmp_addr::<U>(&**lhs, &**rhs)
    }
}

impl<U: ?Sized> Order<*const U> for ByAddress {
    fn cmp(lhs: &*const U, rhs: &*const U) -> Ordering {
        cmp_addr::<U>(*lhs, *rhs)
    }
}

impl<U: ?Sized> Order<*mut U> for ByAddress {
    fn cmp(lhs: &*mut U, rhs: &*mut U) -> Ordering {
        cmp_addr::<U>(*lhs, *rhs)
    }
}

impl<U: ?Sized> Order<NonNull<U>> for ByAddress {
    fn cmp(lhs: &NonNull<U>, rhs: &NonNull<U>) -> Ordering {
        cmp_addr::<U>(lhs.as_ptr(), rhs.as_ptr())
    }
}

impl<U: ?Sized> Order<Box<U>> for ByAddress {
    fn cmp(lhs: &Box<U>, rhs: &Box<U>) -> Ordering {
        cmp_addr::<U>(&**lhs, &**rhs)
    }
}

impl<U: ?Sized> Order<Rc<U>> for ByAddress {
    fn cmp(lhs: &Rc<U>, rhs: &Rc<U>) -> Ordering {
        cmp_addr(Rc::as_ptr(lhs), Rc::as_ptr(rhs))
    }
}

impl<U: ?Sized> Order<Arc<U>> for ByAddress {
    fn cmp(lhs: &Arc<U>, rhs: &Arc<U>) -> Ordering {
        cmp_addr(Arc::as_ptr(lhs), Arc::as_ptr(rhs))
    }
}

/// Reverses another ordering
///
/// `QuickSet<T, Reverse>` keeps its elements in descending order.
pub struct Reverse<O = Natural>(PhantomData<fn() -> O>);

impl<T: ?Sized, O: Order<T>> Order<T> for Reverse<O> {
    fn cmp(lhs: &T, rhs: &T) -> Ordering {
        <O as Order<T>>::cmp(rhs, lhs)
    }
}
