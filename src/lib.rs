//! # Quicklist -- an unrolled singly-linked list
//!
//! A [`QuickList`] is a sequence container whose nodes each store a small, fixed-capacity array of
//! elements instead of a single one. Every node is aligned to a cache line and holds up to
//! [`MAXSIZE`] elements, so a list needs far fewer allocations than a classic linked list, and a
//! walk through it touches far fewer cache lines.
//!
//! ### Notable features
//!
//! * Positional access, insertion, and removal -- all linear in the number of *nodes*, because
//!     every node except the last is kept at least half full
//! * Automatic rebalancing -- full nodes are split on insertion, and sparse nodes are merged with
//!     their successor on removal
//! * [`Cursor`]s -- resumable positions that can skip ahead without re-walking the chain from the
//!     head
//! * A sorted-set layer on the same chain, with the ordering supplied by the caller (see
//!     [`QuickSet`] and the [`order`] module)
//! * Fallible allocation -- running out of memory for a node is reported as an [`Error`] rather
//!     than aborting
//!
//! ### Feature flags
//!
//! * `serde` -- `Serialize` and `Deserialize` for [`QuickList`] and [`QuickSet`], both as plain
//!     sequences
//! * `nightly` -- implements `Drop` for [`QuickList`] with `#[may_dangle]`, but requires nightly
//!     rustc
//! * `fuzz` -- exposes the `mock` module, the `validate` methods, and `Arbitrary`
//!     implementations, for use by the fuzzing harness

#![deny(unsafe_op_in_unsafe_fn)]
#![cfg_attr(feature = "nightly", feature(dropck_eyepatch))]

#[macro_use]
mod macros;

pub mod order;

mod cursor;
mod error;
mod list;
mod set;

#[cfg(feature = "serde")]
mod serde;

#[cfg(any(test, feature = "fuzz"))]
pub mod mock;

pub use cursor::Cursor;
pub use error::Error;
pub use list::{IntoIter, Iter, Node, Nodes, QuickList, LIMIT, MAXSIZE};
pub use set::QuickSet;
