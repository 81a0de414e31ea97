#![no_std]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::inline_always)]
#![allow(clippy::option_if_let_else)]
#![allow(unknown_lints)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(unused_qualifications)]
#![warn(variant_size_differences)]

//! Single-threaded shared-ownership pointers that track their co-owners with
//! an intrusive ring instead of a reference count.
//!
//! The type [`LinkedPtr<T>`] provides shared ownership of a value of type `T`,
//! allocated in the heap. Invoking [`clone`] on [`LinkedPtr`] produces a new
//! pointer to the same value in the heap. When the last pointer to a given
//! value is destroyed, the pointed-to value is also destroyed.
//!
//! [`LinkedPtr<T>`]: crate::LinkedPtr
//! [`clone`]: Clone::clone
//!
//! # Ownership rings
//!
//! Every `LinkedPtr` owns a small node. All nodes of pointers that share a
//! value are linked into a circular doubly-linked list, the _ring_. Cloning
//! splices a new node into the ring, dropping unlinks it again. A pointer is
//! the last owner when its node has no neighbors, so there is no counter to
//! maintain.
//!
//! ```text
//!   ┌───────────┐      ┌───────────┐      ┌───────────┐
//!   │ LinkedPtr │ ───→ │ LinkedPtr │ ───→ │ LinkedPtr │ ──┐
//! ┌─│   node    │ ←─── │   node    │ ←─── │   node    │   │
//! │ └─────┬─────┘      └─────┬─────┘      └─────┬─────┘   │
//! │       └──────────────────┼──────────────────┘         │
//! │                          ↓                            │
//! │                    ┌───────────┐                      │
//! │                    │  pointee  │                      │
//! │                    └───────────┘                      │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! A ring of one pointer has a node with no links at all rather than a node
//! linked to itself.
//!
//! # `linkref` vs. `std::rc`
//!
//! `LinkedPtr` covers most of the shared-ownership API of [`std::rc::Rc`],
//! with a few differences:
//!
//! - A `LinkedPtr` may be empty, like a null shared pointer. Dereferencing
//!   an empty pointer panics.
//! - [`Eq`], [`Ord`] and [`Hash`] compare pointee addresses, not values.
//! - There are no weak pointers.
//! - Counting owners walks the ring, see [`LinkedPtr::owner_count`].
//! - Conversions to trait objects go through the [`upcast!`] macro, since
//!   `CoerceUnsized` cannot be implemented on stable Rust.
//!
//! Like [`std::rc`], [`LinkedPtr`] is not `Send` and is not `Sync`.
//!
//! [`std::rc`]: https://doc.rust-lang.org/stable/std/rc/index.html
//! [`std::rc::Rc`]: https://doc.rust-lang.org/stable/std/rc/struct.Rc.html
//! [`Hash`]: core::hash::Hash
//!
//! # Cargo features
//!
//! - `std` (enabled by default) implements `std::error::Error` for
//!   [`GroupError`].
//!
//! Debug builds verify the ring after every clone and swap and panic if a
//! ring is ever found to be malformed.
//!
//! # Logging
//!
//! `linkref` logs through the [`log`] facade. Releasing a pointee is logged
//! at `debug` level, ring splices at `trace` level.
//!
//! [`log`]: https://docs.rs/log

#![doc(html_root_url = "https://docs.rs/linkref/0.1.0")]

// Ensure code blocks in README.md compile
#[cfg(doctest)]
#[doc = include_str!("../README.md")]
mod readme {}

extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;
#[macro_use]
extern crate log;

mod cmp;
mod cycle;
mod drop;
mod error;
mod hash;
mod link;
mod ptr;
mod upcast;

// Doc modules
#[cfg(all(docsrs, not(doctest)))]
#[path = "doc/sharing_trait_objects.rs"]
/// Examples of sharing trait objects and rearranging ownership with
/// `linkref`.
pub mod sharing_trait_objects;

// Ensure the doc module examples run under `cargo test --doc`
#[cfg(doctest)]
#[path = "doc/sharing_trait_objects.rs"]
/// Examples of sharing trait objects and rearranging ownership with
/// `linkref`.
pub mod sharing_trait_objects;

pub use error::GroupError;
pub use ptr::LinkedPtr;

/// Short alias for [`LinkedPtr`].
pub type LinkRef<T> = LinkedPtr<T>;
