#![no_std]

//! `SlackVec`: a double-ended dynamic array over an owned byte arena.
//!
//! The engine, [`ByteVec`], stores fixed-size elements as opaque bytes inside a
//! single backing store and tracks where the first element lives. Unused slots
//! before the first element (front slack) and after the last element (back
//! slack) are both reused, so pushing and popping at either end is amortized
//! O(1) and inserting or removing in the middle is O(n) with the minimal amount
//! of copying the current slack allows.
//!
//! [`SlackVec<T>`] is the typed layer: it fixes the element size to
//! `size_of::<T>()` for any plain-old-data `T` and forwards every call to the
//! byte engine.
//!
//! Buffer layout: `[front slack][elements][back slack]`
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `push()`, `pop()`: amortized O(1)
//! - `unshift()`, `shift()`: amortized O(1); the front slack left by `shift()` is
//!   reused by `unshift()` without moving any bytes
//! - `insert()`, `remove()`: O(n) worst case
//! - `get()`: O(1)
//! - `shrink_to_fit()`: O(n)
//!
//! ## Growth
//! - An empty vector allocates `INITIAL_CAPACITY` slots on first use
//! - After that, capacity grows geometrically; every step is overflow-checked and
//!   nothing is allocated when the arithmetic overflows
//! - Freed slots are kept as slack until `shrink_to_fit()` or `release()`
//!
//! ## `no_std` Compatibility
//!
//! This crate is `no_std` and only needs `alloc`. Enable the optional `std`
//! feature to build the error type against `std`:
//! ```toml
//! [dependencies]
//! slackvec = { version = "0.1", features = ["std"] }
//! ```
//!
//! # Deque Interface
//!
//! ```
//! # use slackvec::SlackVec;
//! let mut vec: SlackVec<u32> = SlackVec::new();
//!
//! vec.push(2).unwrap();
//! vec.push(3).unwrap();
//! vec.unshift(1).unwrap();
//!
//! assert_eq!(vec.first(), Some(1));
//! assert_eq!(vec.last(), Some(3));
//!
//! assert_eq!(vec.shift(), Some(1));
//! assert_eq!(vec.pop(), Some(3));
//! assert_eq!(vec.pop(), Some(2));
//! assert_eq!(vec.pop(), None);
//! ```
//!
//! # Middle Insertion And Removal
//!
//! ```
//! # use slackvec::SlackVec;
//! let mut vec = SlackVec::try_from(&[1u32, 2, 3][..]).unwrap();
//!
//! vec.insert(1, 0).unwrap();
//! assert_eq!(vec.to_vec(), [1, 0, 2, 3]);
//!
//! let mut removed = [0u32; 2];
//! vec.remove_into(1, &mut removed).unwrap();
//! assert_eq!(vec.to_vec(), [1, 3]);
//! assert_eq!(removed, [0, 2]);
//! ```
//!
//! # Byte Engine
//!
//! The untyped engine takes the element size on every call. It must stay the
//! same for the lifetime of one vector; a mismatch is reported as
//! `InvalidHandle`.
//!
//! ```
//! # use slackvec::{ByteVec, SlackVecError};
//! let mut vec = ByteVec::new();
//!
//! vec.push(b"aabbcc", 2).unwrap();
//! vec.insert(1, b"xx", 2).unwrap();
//! assert_eq!(vec.as_bytes(2).unwrap(), b"aaxxbbcc");
//!
//! let mut out = [0u8; 4];
//! vec.remove(1, 2, Some(&mut out), 2).unwrap();
//! assert_eq!(&out, b"xxbb");
//!
//! assert!(matches!(
//!     vec.reserve(1, 3),
//!     Err(SlackVecError::InvalidHandle { .. })
//! ));
//! ```
//!
//! # Iterator Support
//!
//! ```
//! # use slackvec::SlackVec;
//! let mut vec: SlackVec<i16> = SlackVec::new();
//! vec.push_slice(&[1, 2, 3]).unwrap();
//!
//! let total: i16 = vec.iter().sum();
//! assert_eq!(total, 6);
//!
//! let reversed: Vec<_> = vec.iter().rev().collect();
//! assert_eq!(reversed, [3, 2, 1]);
//! ```

extern crate alloc;

mod buffer;
mod compact;
pub mod config;
mod error;
mod hole;
mod iter;
mod ops;
mod remove;
mod swap;
mod typed;

// Re-export public types and traits
pub use buffer::ByteVec;
pub use error::SlackVecError;
pub use iter::{Elements, Iter};
pub use typed::SlackVec;
