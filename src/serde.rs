// This file is part of bounded-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support.
//!
//! - [`Depth`]: **Serialize** and **Deserialize**. A finite depth is an
//!   integer, an unbounded one as null/`None`.
//! - [`BoundedStack<T>`]: **Deserialize** only, from any sequence, with
//!   [`from_sequence`](BoundedStack::from_sequence) semantics: the depth
//!   equals the element count, the stack comes back full, and draining
//!   yields the reverse of the serialized order.
//!
//! # Why the stack has no `Serialize`
//!
//! The storage-view capability is push and pop, nothing else, so the
//! stack cannot observe its contents without destroying them. A
//! `Serialize` impl over `&self` is therefore impossible without
//! widening the view contract. Drain the stack and serialize the drained
//! elements if you need to persist one.

// Crate imports
use crate::{depth::Depth, stack::BoundedStack};

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

impl Serialize for Depth {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self.as_finite() {
            Some(n) => s.serialize_some(&(n as u64)),
            None => s.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Depth {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        match Option::<u64>::deserialize(d)? {
            Some(n) => usize::try_from(n)
                .map(Depth::Finite)
                .map_err(|_| de::Error::custom("depth does not fit in usize")),
            None => Ok(Depth::Unbounded),
        }
    }
}

struct StackVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de> + 'static> de::Visitor<'de> for StackVisitor<T> {
    type Value = BoundedStack<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of stack elements")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut items: Vec<T> = Vec::with_capacity(a.size_hint().unwrap_or(0));
        while let Some(elem) = a.next_element::<T>()? {
            items.push(elem);
        }
        Ok(BoundedStack::from_sequence(items))
    }
}

impl<'de, T: Deserialize<'de> + 'static> Deserialize<'de> for BoundedStack<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(StackVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{BoundedStack, Depth};
    use alloc::vec::Vec;

    #[test]
    fn test_depth_roundtrip_json() {
        let s = serde_json::to_string(&Depth::Finite(5)).unwrap();
        assert_eq!(s, "5");
        let back: Depth = serde_json::from_str(&s).unwrap();
        assert_eq!(back, Depth::Finite(5));

        let s = serde_json::to_string(&Depth::Unbounded).unwrap();
        assert_eq!(s, "null");
        let back: Depth = serde_json::from_str(&s).unwrap();
        assert_eq!(back, Depth::Unbounded);
    }

    #[test]
    fn test_stack_deserializes_with_from_sequence_semantics() {
        let mut stack: BoundedStack<i32> = serde_json::from_str("[1,2,3]").unwrap();
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.depth(), Depth::Finite(3));
        assert!(stack.is_full());

        let drained: Vec<_> = stack.drain().collect();
        assert_eq!(drained, [3, 2, 1]);
    }

    #[test]
    fn test_stack_deserializes_empty_sequence() {
        let stack: BoundedStack<i32> = serde_json::from_str("[]").unwrap();
        assert!(stack.is_empty());
        assert_eq!(stack.depth(), Depth::Finite(0));
    }

    #[test]
    fn test_stack_visitor_expecting_message() {
        let err = serde_json::from_str::<BoundedStack<i32>>(r#"{"not":"a sequence"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(
            msg.contains("a sequence of stack elements"),
            "unexpected error message: {msg}"
        );
    }
}
