// This file is part of bounded-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `Depth` type: a stack's capacity limit, finite or unbounded.
//!
//! `Depth` is fixed at construction of a [`BoundedStack`](crate::BoundedStack)
//! and never changes afterwards. Raw host input is validated through
//! [`TryFrom<i64>`], which rejects negatives with
//! [`Error::NegativeDepth`](crate::Error::NegativeDepth).

// Crate imports
use crate::error::Error;

// Core imports
use core::fmt;

/// The maximum number of elements a stack may hold simultaneously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Depth {
    /// A fixed ceiling. `Finite(0)` is valid: such a stack is both empty
    /// and full at all times, and the first push overflows.
    Finite(usize),
    /// No ceiling; the stack never reports itself full.
    Unbounded,
}

impl Depth {
    /// Returns `true` if this depth imposes no ceiling.
    #[inline]
    pub const fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// Returns the ceiling as `Some(n)` when finite, `None` when unbounded.
    #[inline]
    pub const fn as_finite(&self) -> Option<usize> {
        match self {
            Self::Finite(n) => Some(*n),
            Self::Unbounded => None,
        }
    }

    /// Returns `true` if a stack holding `len` elements has reached this
    /// depth. Never true for [`Depth::Unbounded`].
    #[inline]
    pub(crate) const fn reached_by(&self, len: usize) -> bool {
        match self {
            Self::Finite(n) => len == *n,
            Self::Unbounded => false,
        }
    }
}

impl From<usize> for Depth {
    #[inline]
    fn from(n: usize) -> Self {
        Self::Finite(n)
    }
}

impl TryFrom<i64> for Depth {
    type Error = Error;

    /// Validates a raw signed depth, rejecting negatives.
    fn try_from(raw: i64) -> Result<Self, Error> {
        usize::try_from(raw)
            .map(Self::Finite)
            .map_err(|_| Error::NegativeDepth)
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(n) => write!(f, "{n}"),
            Self::Unbounded => f.write_str("unbounded"),
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::Depth;
    use crate::Error;
    use alloc::string::ToString;

    #[test]
    fn test_try_from_accepts_non_negative() {
        // Typed literals: `From<usize>` also supplies a blanket
        // `TryFrom<usize>`, so untyped literals are ambiguous here.
        assert_eq!(Depth::try_from(0i64), Ok(Depth::Finite(0)));
        assert_eq!(Depth::try_from(5i64), Ok(Depth::Finite(5)));
    }

    #[test]
    fn test_try_from_rejects_negative() {
        assert_eq!(Depth::try_from(-1i64), Err(Error::NegativeDepth));
        assert_eq!(Depth::try_from(-10i64), Err(Error::NegativeDepth));
    }

    #[test]
    fn test_queries_and_reached_by() {
        let finite = Depth::Finite(3);
        assert!(!finite.is_unbounded());
        assert_eq!(finite.as_finite(), Some(3));
        assert!(!finite.reached_by(2));
        assert!(finite.reached_by(3));

        let unbounded = Depth::Unbounded;
        assert!(unbounded.is_unbounded());
        assert_eq!(unbounded.as_finite(), None);
        assert!(!unbounded.reached_by(usize::MAX));
    }

    #[test]
    fn test_from_usize_and_display() {
        assert_eq!(Depth::from(4), Depth::Finite(4));
        assert_eq!(Depth::Finite(4).to_string(), "4");
        assert_eq!(Depth::Unbounded.to_string(), "unbounded");
    }
}
