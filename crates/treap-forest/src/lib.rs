//! Arena-based treap indices for dual-tree data structures.
//!
//! A single record can sit in two ordered trees at once: it carries one
//! [`Links`] block per [`Side`], and every tree operation is generic over the
//! side whose links it follows. `treap-bimap` keeps each association in a
//! left-keyed and a right-keyed [`Treap`] this way.
//!
//! All "pointers" are `u32` indices into an [`Arena`]. Callers that hold on
//! to a record from the outside use a generation-checked [`Handle`] instead,
//! which stops resolving once the record is removed.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Side`] tags, [`Links`], the [`TreapNode`] view, [`Compare`] |
//! | [`arena`] | [`Arena`] slots and [`Handle`]s |
//! | [`util`] | `first`, `last`, `next`, `prev` in-order navigation |
//! | [`ValidationError`] | structural defects reported by `validate` |
//! | [`treap`] | [`Treap`] index: insert, erase, find, bounds, merge, split |

pub mod arena;
mod error;
pub mod treap;
pub mod types;
pub mod util;

pub use arena::{Arena, Handle};
pub use error::ValidationError;
pub use treap::Treap;
pub use types::{Compare, LeftSide, Links, Natural, RightSide, Side, TreapNode};
pub use util::{first, last, next, prev};
