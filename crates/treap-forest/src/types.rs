//! Side tags, per-side links and the comparator trait.
//!
//! A record that lives in two trees implements [`TreapNode`] once for
//! [`LeftSide`] and once for [`RightSide`]. Each impl projects the record onto
//! its own [`Links`] block and key, so the same arena slot can be a node of
//! both trees without any aliasing tricks.

use std::fmt::Debug;
use std::hash::Hash;

/// Tag naming one of the two trees a record participates in.
pub trait Side: Copy + Eq + Hash + Debug + 'static {
    /// The opposite tag.
    type Other: Side<Other = Self>;

    /// Human-readable name, used in errors and trace events.
    const NAME: &'static str;

    /// Selects this side's value out of a `(left, right)` pair.
    fn pick<T>(left: T, right: T) -> T;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LeftSide {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RightSide {}

impl Side for LeftSide {
    type Other = RightSide;
    const NAME: &'static str = "left";

    #[inline]
    fn pick<T>(left: T, _right: T) -> T {
        left
    }
}

impl Side for RightSide {
    type Other = LeftSide;
    const NAME: &'static str = "right";

    #[inline]
    fn pick<T>(_left: T, right: T) -> T {
        right
    }
}

/// Tree links of one side (`p`, `l`, `r`) plus the node's heap priority.
///
/// The priority is drawn once when the record is created and never changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Links {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub priority: u32,
}

impl Links {
    pub fn new(priority: u32) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            priority,
        }
    }

    /// `true` when the node has no parent and no children.
    pub fn is_detached(&self) -> bool {
        self.p.is_none() && self.l.is_none() && self.r.is_none()
    }

    pub(crate) fn detach(&mut self) {
        self.p = None;
        self.l = None;
        self.r = None;
    }
}

/// Projection of an arena node onto side `S`.
pub trait TreapNode<S: Side> {
    type Key;

    fn links(&self) -> &Links;
    fn links_mut(&mut self) -> &mut Links;
    fn key(&self) -> &Self::Key;
}

/// Strict weak order over `K`.
///
/// Closures of shape `Fn(&K, &K) -> bool` are comparators; [`Natural`] uses
/// the key's [`Ord`].
pub trait Compare<K: ?Sized> {
    fn less(&self, a: &K, b: &K) -> bool;

    fn more_or_equal(&self, a: &K, b: &K) -> bool {
        !self.less(a, b)
    }

    fn equivalent(&self, a: &K, b: &K) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

/// Comparator backed by [`Ord`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<K: Ord + ?Sized> Compare<K> for Natural {
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        a < b
    }
}

impl<K: ?Sized, F> Compare<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        self(a, b)
    }
}
