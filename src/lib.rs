//! This crate provides a circular doubly-linked list, the [`Ring`], anchored at a
//! designated `head` node.
//!
//! Every node links to its successor and its predecessor, and the last node links
//! back to the first, so the ring has no end: the tail is simply `head.prev`.
//! Inserting and removing at either end takes constant time; positional
//! operations and searches walk the ring and take *O*(*n*) time.
//!
//! Here is the classic walk-through showing how the ring works.
//!
//! ```
//! use cyclic_ring::Ring;
//!
//! let mut ring = Ring::new();
//!
//! ring.insert_at_beginning(10);
//! ring.insert_at_end(20);
//! ring.insert_at_end(30);
//! ring.insert_at_position(25, 3).unwrap();
//! assert_eq!(ring.traverse_forward().unwrap().to_string(), "10 20 25 30");
//!
//! ring.delete_at_beginning().unwrap();
//! assert_eq!(ring.traverse_forward().unwrap().to_string(), "20 25 30");
//!
//! ring.delete_at_end().unwrap();
//! ring.delete_by_value(&25).unwrap();
//! assert_eq!(ring.traverse_forward().unwrap().to_string(), "20");
//!
//! ring.insert_at_end(40);
//! ring.insert_at_end(50);
//! assert_eq!(ring.traverse_forward().unwrap().to_string(), "20 40 50");
//! assert_eq!(ring.traverse_backward().unwrap().to_string(), "50 40 20");
//!
//! assert!(ring.search(&50));
//! assert!(!ring.search(&100));
//! ```
//!
//! # Memory Layout
//!
//! The nodes of a ring are stored in an arena of slots, and link to each other by
//! slot index:
//! ```text
//!          ┌────────────────────────────────────────────────────────────┐
//!          ↓                                                            │
//!    ╔═══════════╗           ╔═══════════╗                  ╔═══════════╗  │
//!    ║   next    ║ ────────→ ║   next    ║ ───→ ┄┄ ───────→ ║   next    ║ ─┘
//!    ╟───────────╢           ╟───────────╢                  ╟───────────╢
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←─── ┄┄ ←─────── ║   prev    ║
//! │  ╟───────────╢           ╟───────────╢                  ╟───────────╢
//! │  ║  value T  ║           ║  value T  ║                  ║  value T  ║
//! │  ╚═══════════╝           ╚═══════════╝                  ╚═══════════╝
//! │      head                  head.next                   tail (head.prev)
//! │        ↑                                                    ↑
//! │        └─────────────── Ring.head                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//! The `Ring` contains:
//! - the arena of slots, each either holding a node or vacant;
//! - the head of the free list threading the vacant slots, which insertions reuse;
//! - the index of the `head` node, or `None` when the ring is empty;
//! - a length field `len`. It can be disabled by disabling the `length` feature
//!   in your `Cargo.toml`:
//! ```text
//! [dependencies]
//! cyclic_ring = { default-features = false }
//! ```
//!
//! A ring with a single node links that node to itself in both directions.
//!
//! # Outcomes
//!
//! Operations that can be refused return a [`RingError`] and leave the ring
//! untouched. Its `Display` is the line a console front-end reports:
//!
//! ```
//! use cyclic_ring::{Ring, RingError};
//!
//! let mut ring: Ring = Ring::new();
//! match ring.traverse_forward() {
//!     Ok(traversal) => println!("{}", traversal),
//!     Err(err) => assert_eq!(err.to_string(), "List is empty!"),
//! }
//! assert_eq!(ring.delete_at_position(0), Err(RingError::InvalidPosition));
//! ```
//!
//! # Iteration
//!
//! [`Iter`] walks the ring once from `head` to the tail, and is double-ended and
//! fused. [`Cursor`] instead walks cyclically and never runs out.
//!
//! [`Ring`]: crate::Ring
//! [`RingError`]: crate::RingError
//! [`Iter`]: crate::Iter
//! [`Cursor`]: crate::ring::cursor::Cursor

#[doc(inline)]
pub use error::RingError;
#[doc(inline)]
pub use ring::cursor::Cursor;
#[doc(inline)]
pub use ring::iterator::{Direction, IntoIter, Iter, Traversal};
#[doc(inline)]
pub use ring::Ring;

pub mod ring;

mod error;
