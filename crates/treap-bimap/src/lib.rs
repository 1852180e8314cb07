//! Bidirectional map built on two treap indices.
//!
//! Each association is one [`Record`] in an arena, linked into a left-keyed
//! and a right-keyed treap from `treap-forest`. Lookups, bounds and ordered
//! traversal work from either side, and a [`Cursor`] on one side flips to the
//! same record on the other side in O(1).
//!
//! ```
//! use treap_bimap::BiMap;
//!
//! let mut map = BiMap::new();
//! map.insert(1, "a");
//! map.insert(2, "b");
//! map.insert(3, "c");
//!
//! // duplicates on either side are rejected
//! assert!(map.insert(4, "a").is_end());
//!
//! assert_eq!(map.at_left(&2), Ok(&"b"));
//! let c = map.find_right(&"c").flip();
//! assert_eq!(map.value(c), Ok(&3));
//!
//! assert!(map.erase_right_key(&"a"));
//! assert!(map.find_left(&1).is_end());
//! assert_eq!(map.len(), 2);
//! ```
//!
//! Cursors do not borrow the map. Using one after its record was erased
//! reports [`BiMapError::StaleCursor`] instead of reading freed memory, and a
//! cursor from another map reports [`BiMapError::ForeignCursor`].

mod cursor;
mod error;
mod iter;
mod map;
mod priority;
mod record;

pub use cursor::{Cursor, LeftCursor, Position, RightCursor};
pub use error::BiMapError;
pub use iter::Iter;
pub use map::BiMap;
pub use record::Record;
pub use treap_forest::{Compare, Handle, LeftSide, Natural, RightSide, Side, ValidationError};
