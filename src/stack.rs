// This file is part of bounded-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `BoundedStack` type and its inherent API.
//!
//! `BoundedStack<T>` is a depth-limited LIFO stack. It owns three things:
//! the immutable [`Depth`], a length counter kept in sync with every
//! push/pop, and an optional boxed [`StorageView`] that physically holds
//! the elements. Capacity violations are typed errors, never panics, and
//! a failed operation changes nothing.

// Crate imports
use crate::{depth::Depth, error::Error, iter::Drain, view::StorageView};

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

// Core imports
use core::fmt;

/// A bounded, generic LIFO stack with pluggable backing storage.
///
/// # Capacity and accounting
///
/// The depth is fixed at construction and may be finite or unbounded.
/// `length` is redundant bookkeeping: the storage view owns the ordered
/// elements, and the stack keeps its counter in sync with every
/// delegated push and pop. The invariant `0 <= length <= depth` holds
/// whenever the depth is finite.
///
/// # The storage view
///
/// The view starts **unset**. It is bound at most once:
///
/// - explicitly, via [`bind_view`](Self::bind_view), which must happen
///   before anything triggers lazy materialization; or
/// - implicitly, on the first call to [`view`](Self::view) (which `push`
///   and `pop` use internally), binding a default `Vec`-backed view,
///   preallocated to the depth when finite and empty when unbounded.
///
/// Either way, the binding is final: any later explicit bind fails with
/// [`Error::AlreadyBound`].
///
/// # Clearing an empty stack is an error
///
/// [`clear`](Self::clear) pops every element; invoked on an already-empty
/// stack it returns [`Error::Underflow`] instead of being a no-op. This
/// is a deliberate part of the contract and a common surprise; check
/// [`is_empty`](Self::is_empty) first if you want "clear if non-empty".
///
/// # Thread safety
///
/// None; see the crate docs. Access must be serialized externally.
///
/// # Element bounds
///
/// The boxed view is a `'static` trait object, so element types must be
/// `'static`. No other bounds are required; elements need not be `Copy`
/// or `Clone`.
///
/// # Example
///
/// ```rust
/// use bounded_stack::{BoundedStack, Error};
///
/// let mut stack = BoundedStack::new(2)?;
/// stack.push(1)?;
/// stack.push(2)?;
/// assert!(stack.is_full());
/// assert_eq!(stack.push(3), Err(Error::Overflow));
/// assert_eq!(stack.pop()?, 2);
/// # Ok::<(), Error>(())
/// ```
pub struct BoundedStack<T> {
    depth: Depth,
    length: usize,
    view: Option<Box<dyn StorageView<T>>>,
}

impl<T: 'static> BoundedStack<T> {
    /// Constructs an empty stack, validating a raw host-supplied depth.
    ///
    /// - `None` → [`Error::MissingArgument`] (`"depth"`).
    /// - Negative → [`Error::NegativeDepth`].
    /// - Zero is valid: the stack is permanently empty *and* full.
    ///
    /// For an already-validated [`Depth`] (including
    /// [`Depth::Unbounded`]), use [`with_depth`](Self::with_depth).
    ///
    /// ```rust
    /// use bounded_stack::{BoundedStack, Error};
    ///
    /// assert!(BoundedStack::<u8>::new(5).is_ok());
    /// assert_eq!(
    ///     BoundedStack::<u8>::new(None).unwrap_err(),
    ///     Error::MissingArgument("depth"),
    /// );
    /// assert_eq!(
    ///     BoundedStack::<u8>::new(-10).unwrap_err(),
    ///     Error::NegativeDepth,
    /// );
    /// ```
    pub fn new(depth: impl Into<Option<i64>>) -> Result<Self, Error> {
        let raw = depth.into().ok_or(Error::MissingArgument("depth"))?;
        Ok(Self::with_depth(Depth::try_from(raw)?))
    }

    /// Constructs an empty stack with the given depth. The storage view
    /// is left unset.
    #[inline]
    pub const fn with_depth(depth: Depth) -> Self {
        Self {
            depth,
            length: 0,
            view: None,
        }
    }

    /// Constructs an empty stack with no capacity ceiling.
    #[inline]
    pub const fn unbounded() -> Self {
        Self::with_depth(Depth::Unbounded)
    }

    /// Bulk construction: a stack whose depth equals the number of items,
    /// holding every item in its original order.
    ///
    /// The collected storage is bound as the view, which counts as the
    /// one-time binding. The resulting stack is full, and draining it
    /// yields the items in the **reverse** of input order; the last
    /// item in is the first out:
    ///
    /// ```rust
    /// use bounded_stack::BoundedStack;
    ///
    /// let mut stack = BoundedStack::from_sequence([1, 2, 3, 4, 5]);
    /// assert_eq!(stack.len(), 5);
    /// let drained: Vec<_> = stack.drain().collect();
    /// assert_eq!(drained, [5, 4, 3, 2, 1]);
    /// ```
    pub fn from_sequence(items: impl IntoIterator<Item = T>) -> Self {
        let items: Vec<T> = items.into_iter().collect();
        Self {
            depth: Depth::Finite(items.len()),
            length: items.len(),
            view: Some(Box::new(items)),
        }
    }

    /// Returns the configured depth.
    #[inline]
    pub const fn depth(&self) -> Depth {
        self.depth
    }

    /// Returns the current number of held elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if no elements are held.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns `true` if the depth is reached. Always `false` for an
    /// unbounded stack.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.depth.reached_by(self.length)
    }

    /// Returns `true` if a storage view is bound, whether explicitly or
    /// by lazy materialization. No side effects.
    #[inline]
    pub const fn has_view(&self) -> bool {
        self.view.is_some()
    }

    /// Returns the bound storage view, materializing and binding the
    /// default one on first access.
    ///
    /// The default is `Vec`-backed: preallocated to the depth when
    /// finite, empty when unbounded. Materialization counts as the
    /// one-time binding, so a later [`bind_view`](Self::bind_view) fails
    /// with [`Error::AlreadyBound`]. Idempotent afterwards: always the
    /// same bound instance.
    pub fn view(&mut self) -> &mut dyn StorageView<T> {
        let depth = self.depth;
        self.view
            .get_or_insert_with(|| match depth {
                Depth::Finite(n) => Box::new(Vec::with_capacity(n)),
                Depth::Unbounded => Box::new(Vec::new()),
            })
            .as_mut()
    }

    /// Binds a caller-supplied storage view, at most once.
    ///
    /// - `None` → [`Error::MissingArgument`] (`"view"`), regardless of
    ///   the current binding state.
    /// - Already bound (explicitly or lazily) → [`Error::AlreadyBound`].
    ///
    /// To take effect, the bind must happen before anything reads
    /// [`view`](Self::view), including the first `push` or `pop`, which
    /// would materialize the default.
    ///
    /// ```rust
    /// use bounded_stack::{BoundedStack, Error, StorageView};
    ///
    /// let mut stack = BoundedStack::new(4)?;
    /// stack.bind_view(Box::new(Vec::new()) as Box<dyn StorageView<i32>>)?;
    /// assert_eq!(
    ///     stack.bind_view(Box::new(Vec::new()) as Box<dyn StorageView<i32>>),
    ///     Err(Error::AlreadyBound),
    /// );
    /// # Ok::<(), Error>(())
    /// ```
    pub fn bind_view(
        &mut self,
        view: impl Into<Option<Box<dyn StorageView<T>>>>,
    ) -> Result<(), Error> {
        let view = view.into().ok_or(Error::MissingArgument("view"))?;
        if self.view.is_some() {
            return Err(Error::AlreadyBound);
        }
        self.view = Some(view);
        Ok(())
    }

    /// Pushes `item`, or returns [`Error::Overflow`] if the stack is
    /// full. On error nothing changes, neither the length nor the view.
    pub fn push(&mut self, item: T) -> Result<(), Error> {
        if self.is_full() {
            return Err(Error::Overflow);
        }
        self.view().push(item);
        self.length += 1;
        Ok(())
    }

    /// Pops the most recently pushed element still held, or returns
    /// [`Error::Underflow`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T, Error> {
        if self.is_empty() {
            return Err(Error::Underflow);
        }
        // A conforming view holds `length` elements here; a None means
        // the view broke the push/pop contract.
        let item = self.view().pop().ok_or(Error::Underflow)?;
        self.length -= 1;
        Ok(item)
    }

    /// Pops every element, discarding the values.
    ///
    /// Returns [`Error::Underflow`] if the stack is **already empty**:
    /// clearing an empty stack is an error in this design, not a no-op.
    pub fn clear(&mut self) -> Result<(), Error> {
        if self.is_empty() {
            return Err(Error::Underflow);
        }
        while !self.is_empty() {
            self.pop()?;
        }
        Ok(())
    }

    /// Returns a destructive iterator over the stack: every step pops
    /// the top element. After a full iteration the stack is empty; see
    /// [`Drain`].
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain::new(self)
    }
}

impl<T: 'static> From<Vec<T>> for BoundedStack<T> {
    /// See [`BoundedStack::from_sequence`].
    fn from(items: Vec<T>) -> Self {
        Self::from_sequence(items)
    }
}

impl<T: 'static> FromIterator<T> for BoundedStack<T> {
    /// See [`BoundedStack::from_sequence`].
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_sequence(iter)
    }
}

impl<T> fmt::Debug for BoundedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Elements are not shown: the view only exposes push/pop.
        f.debug_struct("BoundedStack")
            .field("depth", &self.depth)
            .field("length", &self.length)
            .field("view_bound", &self.view.is_some())
            .finish()
    }
}
