//! Positions into one side of a map.

use std::marker::PhantomData;

use treap_forest::{Handle, LeftSide, RightSide, Side};

/// Where a cursor points: a live record or one past the last entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    Real(Handle),
    End,
}

/// A position in side `S`'s order.
///
/// Cursors are plain values: they do not borrow the map, and the map checks
/// them on every use. A cursor whose record has been erased is reported as
/// [`BiMapError::StaleCursor`](crate::BiMapError::StaleCursor), and one
/// handed to a map other than the one that produced it as
/// [`BiMapError::ForeignCursor`](crate::BiMapError::ForeignCursor).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor<S: Side> {
    pos: Position,
    map: u64,
    _side: PhantomData<S>,
}

pub type LeftCursor = Cursor<LeftSide>;
pub type RightCursor = Cursor<RightSide>;

impl<S: Side> Cursor<S> {
    pub(crate) fn real(map: u64, handle: Handle) -> Self {
        Self {
            pos: Position::Real(handle),
            map,
            _side: PhantomData,
        }
    }

    pub(crate) fn end(map: u64) -> Self {
        Self {
            pos: Position::End,
            map,
            _side: PhantomData,
        }
    }

    /// Id of the map this cursor was taken from.
    pub(crate) fn map(&self) -> u64 {
        self.map
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn is_end(&self) -> bool {
        self.pos == Position::End
    }

    /// Same record, seen from the other side. `End` flips to the other
    /// side's `End`.
    pub fn flip(self) -> Cursor<S::Other> {
        Cursor {
            pos: self.pos,
            map: self.map,
            _side: PhantomData,
        }
    }
}
