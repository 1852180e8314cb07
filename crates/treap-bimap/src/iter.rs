use std::iter::FusedIterator;
use std::marker::PhantomData;

use treap_forest::{util, Arena, Side, TreapNode};

use crate::record::Record;

/// Borrowing iterator over `(left, right)` pairs in side `S`'s order.
pub struct Iter<'a, S: Side, L, R> {
    arena: &'a Arena<Record<L, R>>,
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
    _side: PhantomData<S>,
}

impl<'a, S: Side, L, R> Iter<'a, S, L, R>
where
    Record<L, R>: TreapNode<S>,
{
    pub(crate) fn new(arena: &'a Arena<Record<L, R>>, root: Option<u32>) -> Self {
        Self {
            arena,
            front: util::first::<S, Record<L, R>>(arena, root),
            back: util::last::<S, Record<L, R>>(arena, root),
            remaining: arena.len(),
            _side: PhantomData,
        }
    }
}

impl<S: Side, L, R> Clone for Iter<'_, S, L, R> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
            _side: PhantomData,
        }
    }
}

impl<'a, S: Side, L, R> Iterator for Iter<'a, S, L, R>
where
    Record<L, R>: TreapNode<S>,
{
    type Item = (&'a L, &'a R);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let arena = self.arena;
        let i = self.front?;
        self.remaining -= 1;
        self.front = util::next::<S, Record<L, R>>(arena, i);
        let record = &arena[i];
        Some((&record.left, &record.right))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<S: Side, L, R> DoubleEndedIterator for Iter<'_, S, L, R>
where
    Record<L, R>: TreapNode<S>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let arena = self.arena;
        let i = self.back?;
        self.remaining -= 1;
        self.back = util::prev::<S, Record<L, R>>(arena, i);
        let record = &arena[i];
        Some((&record.left, &record.right))
    }
}

impl<S: Side, L, R> ExactSizeIterator for Iter<'_, S, L, R> where Record<L, R>: TreapNode<S> {}

impl<S: Side, L, R> FusedIterator for Iter<'_, S, L, R> where Record<L, R>: TreapNode<S> {}
