// This file is part of bounded-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `bounded-stack`
//!
//! A `no_std` (+ `alloc`), bounded, generic last-in-first-out container
//! with pluggable backing storage, **with no `unsafe`**.
//!
//! The core type, [`BoundedStack<T>`], enforces a capacity limit (its
//! *depth*, fixed at construction and possibly unbounded) on every
//! mutation, and delegates physical storage to a swappable collaborator
//! behind the [`StorageView`] trait. The stack itself only does capacity
//! accounting: the view owns the elements.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You want a stack that refuses to grow past a configured ceiling and
//!   reports the violation as a typed error rather than panicking or
//!   reallocating.
//! - You want to substitute the backing storage (a different container,
//!   an instrumented view for testing) without touching stack logic.
//! - You are in a `no_std` environment with an allocator.
//!
//! It may not be the best fit if:
//!
//! - You just need a growable stack; use `Vec` directly.
//! - You need compile-time capacities and inline storage; use a
//!   fixed-capacity array vector instead.
//!
//! ## High-level semantics
//!
//! - Depth is fixed at construction ([`Depth::Finite`] or
//!   [`Depth::Unbounded`]) and validated at the host boundary:
//!   a missing depth is [`Error::MissingArgument`], a negative one is
//!   [`Error::NegativeDepth`]. Zero is valid (the stack is permanently
//!   both empty and full, and the first push overflows).
//! - [`push`](BoundedStack::push) on a full stack is [`Error::Overflow`];
//!   [`pop`](BoundedStack::pop) on an empty stack is [`Error::Underflow`].
//!   A failed operation changes nothing.
//! - [`clear`](BoundedStack::clear) on an **empty** stack is also
//!   [`Error::Underflow`]. This is deliberate and part of the contract:
//!   clearing is "pop everything", and popping nothing is an underflow.
//!   It is *not* a no-op, unlike most collection APIs.
//! - The storage view is bound **at most once**: either explicitly via
//!   [`bind_view`](BoundedStack::bind_view) before first use, or lazily
//!   with a default `Vec`-backed view on first access. Lazy
//!   materialization counts as the one-time binding, so a later explicit
//!   bind fails with [`Error::AlreadyBound`].
//! - Iteration is **destructive**: every step pops the top element, so a
//!   full iteration yields the elements in LIFO order and leaves the
//!   stack empty. See [`IntoIter`] and [`Drain`].
//!
//! ## Thread safety
//!
//! None. The design assumes single-threaded, synchronous access: every
//! operation runs to completion, there is no internal locking, and no
//! concurrent-mutation guarantees are made. Callers sharing a stack
//! across execution contexts must serialize access externally.
//!
//! ## Features
//!
//! - `serde`
//!   - `Serialize` / `Deserialize` for [`Depth`].
//!   - `Deserialize` for [`BoundedStack<T>`] from a sequence, with
//!     [`from_sequence`](BoundedStack::from_sequence) semantics.
//!   - `Serialize` for the stack is intentionally absent; see the
//!     `serde` module docs.
//!
//! ## Example
//!
//! ```rust
//! use bounded_stack::{BoundedStack, Error};
//!
//! let mut stack = BoundedStack::new(3)?;
//! stack.push("a")?;
//! stack.push("b")?;
//! stack.push("c")?;
//! assert_eq!(stack.push("d"), Err(Error::Overflow));
//!
//! assert_eq!(stack.pop()?, "c");
//! let rest: Vec<_> = stack.drain().collect();
//! assert_eq!(rest, ["b", "a"]);
//! assert!(stack.is_empty());
//! # Ok::<(), Error>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod depth;
mod error;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod stack;
mod view;

// Public exports (crate API surface)
pub use depth::Depth;
pub use error::Error;
pub use iter::{Drain, IntoIter};
pub use stack::BoundedStack;
pub use view::StorageView;
