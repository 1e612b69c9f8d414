// This file is part of bounded-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `BoundedStack`.
//!
//! These errors represent argument, binding, and capacity conditions.
//! Every one is raised synchronously at the violated precondition and
//! returned to the immediate caller; a failed operation leaves the stack
//! unchanged. They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`BoundedStack`](crate::BoundedStack).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A required argument was absent. Carries the argument name
    /// (`"depth"` for construction, `"view"` for storage-view binding).
    MissingArgument(&'static str),
    /// The constructor was given a negative depth.
    NegativeDepth,
    /// An explicit storage-view binding was attempted after a view was
    /// already bound, whether explicitly or by lazy materialization.
    AlreadyBound,
    /// A push was attempted while the stack held `depth` elements.
    Overflow,
    /// A pop or clear was attempted while the stack was empty.
    Underflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArgument(name) => write!(f, "required argument `{name}` is missing"),
            Self::NegativeDepth => f.write_str("stack depth is negative"),
            Self::AlreadyBound => f.write_str("storage view is already bound"),
            Self::Overflow => f.write_str("stack overflow"),
            Self::Underflow => f.write_str("stack underflow"),
        }
    }
}

impl CoreError for Error {}
