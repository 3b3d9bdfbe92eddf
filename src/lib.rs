#![no_std]
#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/ringdeque/0.1.0")]

//! A growable double-ended queue backed by a ring buffer.
//!
//! [`RingDeque`] keeps its elements in a single contiguous block of slots
//! read as a circular array, giving O(1) insertion and removal at both ends,
//! O(1) indexing, and amortized O(1) growth when the block fills up.
//!
//! ```
//! use ringdeque::RingDeque;
//!
//! let mut deque = RingDeque::with_capacity(2);
//! assert!(deque.try_push_back("A").is_ok());
//! deque.push_front("B");
//! deque.push_back("C"); // full, so the buffer grows
//!
//! assert_eq!(deque.to_string(), "[B, A, C]");
//! assert_eq!(deque.pop_front(), Some("B"));
//! assert_eq!(deque.back(), Some(&"C"));
//! ```
//!
//! # Feature flags
//! * `tracing`: emit [`tracing`](https://docs.rs/tracing) events when the
//!   buffer grows and when a [`Traversal`] detects a modification.
//! * `unstable`: build the nightly-only benchmarks.

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod deque;
pub mod error;
mod storage;
pub mod traversal;

pub use crate::deque::{RingDeque, DEFAULT_CAPACITY};
pub use crate::error::{Error, Result};
pub use crate::traversal::Traversal;
