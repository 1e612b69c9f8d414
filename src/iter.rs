// This file is part of bounded-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Destructive iterator support for [`BoundedStack`](crate::BoundedStack).
//!
//! Both iterators implement the same protocol: every `next` pops the top
//! element, and iteration ends at emptiness without raising `Underflow`.
//! Iteration is single-pass and not restartable: after a full pass the
//! source stack is empty, and a second pass yields nothing. A partial
//! pass leaves the unpopped remainder in place.
//!
//! - [`IntoIter<T>`] consumes the stack (`stack.into_iter()`).
//! - [`Drain<'_, T>`] pops through a mutable borrow
//!   ([`drain`](crate::BoundedStack::drain), or `for item in &mut stack`).
//!
//! Both support `ExactSizeIterator` and `FusedIterator`; the remaining
//! length is always known exactly.

// Crate imports
use crate::stack::BoundedStack;

// Core imports
use core::iter::FusedIterator;

/// Owned destructive iterator returned by `BoundedStack::into_iter()`.
///
/// Pops elements in LIFO order until the stack is empty.
pub struct IntoIter<T> {
    stack: BoundedStack<T>,
}

impl<T: 'static> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.stack.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.stack.len();
        (rem, Some(rem))
    }
}

impl<T: 'static> ExactSizeIterator for IntoIter<T> {}
impl<T: 'static> FusedIterator for IntoIter<T> {}

/// Borrowed destructive iterator returned by
/// [`BoundedStack::drain`](crate::BoundedStack::drain).
///
/// Pops elements in LIFO order until the stack is empty. Dropping the
/// iterator early leaves the remaining elements in the stack.
pub struct Drain<'a, T> {
    stack: &'a mut BoundedStack<T>,
}

impl<'a, T> Drain<'a, T> {
    #[inline]
    pub(crate) fn new(stack: &'a mut BoundedStack<T>) -> Self {
        Self { stack }
    }
}

impl<T: 'static> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.stack.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.stack.len();
        (rem, Some(rem))
    }
}

impl<T: 'static> ExactSizeIterator for Drain<'_, T> {}
impl<T: 'static> FusedIterator for Drain<'_, T> {}

impl<T: 'static> IntoIterator for BoundedStack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { stack: self }
    }
}

impl<'a, T: 'static> IntoIterator for &'a mut BoundedStack<T> {
    type Item = T;
    type IntoIter = Drain<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Drain::new(self)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::BoundedStack;
    use alloc::vec::Vec;

    #[test]
    fn test_into_iter_yields_lifo_order() {
        let mut stack = BoundedStack::new(3).unwrap();
        for item in [1, 2, 3] {
            stack.push(item).unwrap();
        }
        let collected: Vec<_> = stack.into_iter().collect();
        assert_eq!(collected, [3, 2, 1]);
    }

    #[test]
    fn test_drain_empties_the_stack() {
        let mut stack = BoundedStack::from_sequence([10, 20, 30]);
        let collected: Vec<_> = stack.drain().collect();
        assert_eq!(collected, [30, 20, 10]);
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_second_drain_yields_nothing() {
        let mut stack = BoundedStack::from_sequence([1, 2]);
        assert_eq!(stack.drain().count(), 2);
        assert_eq!(stack.drain().count(), 0);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_partial_drain_leaves_the_remainder() {
        let mut stack = BoundedStack::from_sequence([1, 2, 3, 4]);
        {
            let mut drain = stack.drain();
            assert_eq!(drain.next(), Some(4));
            assert_eq!(drain.next(), Some(3));
        }
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop(), Ok(2));
    }

    #[test]
    fn test_for_loop_over_mut_borrow_is_destructive() {
        let mut stack = BoundedStack::from_sequence(['a', 'b', 'c']);
        let mut seen = Vec::new();
        for item in &mut stack {
            seen.push(item);
        }
        assert_eq!(seen, ['c', 'b', 'a']);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_size_hint_tracks_consumption() {
        let mut stack = BoundedStack::from_sequence([1, 2, 3]);
        let mut drain = stack.drain();
        assert_eq!(drain.size_hint(), (3, Some(3)));
        assert_eq!(drain.len(), 3);
        assert_eq!(drain.next(), Some(3));
        assert_eq!(drain.size_hint(), (2, Some(2)));
        assert_eq!(drain.next(), Some(2));
        assert_eq!(drain.next(), Some(1));
        assert_eq!(drain.size_hint(), (0, Some(0)));
        assert_eq!(drain.next(), None);
    }

    #[test]
    fn test_iterator_is_fused_at_emptiness() {
        let mut stack: BoundedStack<i32> = BoundedStack::new(2).unwrap();
        stack.push(1).unwrap();
        let mut iter = stack.into_iter();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_empty_stack_iterates_zero_elements() {
        let stack: BoundedStack<i32> = BoundedStack::new(5).unwrap();
        assert_eq!(stack.into_iter().count(), 0);
    }

    #[test]
    fn test_drain_pops_through_a_custom_view() {
        use crate::StorageView;
        use alloc::boxed::Box;

        let mut stack = BoundedStack::new(3).unwrap();
        stack
            .bind_view(Box::new(Vec::new()) as Box<dyn StorageView<i32>>)
            .unwrap();
        stack.push(1).unwrap();
        stack.push(2).unwrap();

        let collected: Vec<_> = stack.drain().collect();
        assert_eq!(collected, [2, 1]);
        assert!(stack.is_empty());
    }
}
