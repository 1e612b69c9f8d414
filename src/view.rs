// This file is part of bounded-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The storage-view capability: the collaborator that physically holds a
//! stack's elements.
//!
//! [`BoundedStack`](crate::BoundedStack) never touches element storage
//! itself; it delegates to whatever implements [`StorageView`]: the
//! default `Vec`-backed view, a different container, or an instrumented
//! view for testing. The trait is deliberately minimal: push and pop,
//! nothing else. All capacity enforcement stays in the stack.

// Alloc imports
use alloc::vec::Vec;

/// The minimal push/pop capability a stack's backing storage must provide.
///
/// Contract: `pop` removes and returns the most recently pushed element
/// still held. The stack checks its own emptiness before delegating, so a
/// conforming view returns `Some` whenever the pushes it has received
/// outnumber the pops. A `None` out of turn is reported by the stack as
/// [`Underflow`](crate::Error::Underflow) rather than a panic.
pub trait StorageView<T> {
    /// Appends `item` on top.
    fn push(&mut self, item: T);

    /// Removes and returns the top element, or `None` if none is held.
    fn pop(&mut self) -> Option<T>;
}

/// `Vec` is the default array-like storage.
impl<T> StorageView<T> for Vec<T> {
    #[inline]
    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }
}
