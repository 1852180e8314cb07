use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, trace};
use treap_forest::{
    util, Arena, Compare, Handle, LeftSide, Natural, RightSide, Side, Treap, TreapNode,
    ValidationError,
};

use crate::cursor::{Cursor, LeftCursor, Position, RightCursor};
use crate::error::BiMapError;
use crate::iter::Iter;
use crate::priority::PrioritySource;
use crate::record::Record;

static NEXT_MAP_ID: AtomicU64 = AtomicU64::new(0);

fn next_map_id() -> u64 {
    NEXT_MAP_ID.fetch_add(1, Ordering::Relaxed)
}

/// One-to-one map between `L` and `R`, ordered and searchable from both sides.
///
/// Every association is a single [`Record`] stored in the map's arena and
/// linked into two treaps: one ordered by `CL` over the left values, one
/// ordered by `CR` over the right values.
pub struct BiMap<L, R, CL = Natural, CR = Natural> {
    arena: Arena<Record<L, R>>,
    left: Treap<LeftSide, CL>,
    right: Treap<RightSide, CR>,
    priorities: PrioritySource,
    /// Stamped into every cursor this map hands out.
    id: u64,
}

impl<L, R> BiMap<L, R> {
    pub fn new() -> Self {
        Self::with_comparators(Natural, Natural)
    }

    /// Map whose tree shapes are reproducible for a given insert sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_comparators_and_seed(Natural, Natural, seed)
    }
}

impl<L, R, CL: Default, CR: Default> Default for BiMap<L, R, CL, CR> {
    fn default() -> Self {
        Self::with_comparators(CL::default(), CR::default())
    }
}

impl<L, R, CL, CR> BiMap<L, R, CL, CR> {
    pub fn with_comparators(left: CL, right: CR) -> Self {
        Self::with_priorities(left, right, PrioritySource::from_os())
    }

    pub fn with_comparators_and_seed(left: CL, right: CR, seed: u64) -> Self {
        Self::with_priorities(left, right, PrioritySource::seeded(seed))
    }

    fn with_priorities(left: CL, right: CR, priorities: PrioritySource) -> Self {
        Self {
            arena: Arena::new(),
            left: Treap::new(left),
            right: Treap::new(right),
            priorities,
            id: next_map_id(),
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn left_comparator(&self) -> &CL {
        self.left.comparator()
    }

    pub fn right_comparator(&self) -> &CR {
        self.right.comparator()
    }

    /// Erases every record. Outstanding cursors become stale.
    pub fn clear(&mut self) {
        debug!(len = self.len(), "clearing map");
        self.left.clear();
        self.right.clear();
        self.arena.clear();
    }

    /// Exchanges contents and comparators with `other` in O(1). Cursors
    /// follow their records into the other map.
    pub fn swap(&mut self, other: &mut Self) {
        self.left.swap(&mut other.left);
        self.right.swap(&mut other.right);
        std::mem::swap(&mut self.arena, &mut other.arena);
        std::mem::swap(&mut self.priorities, &mut other.priorities);
        std::mem::swap(&mut self.id, &mut other.id);
    }

    fn root<S: Side>(&self) -> Option<u32> {
        S::pick(self.left.root(), self.right.root())
    }

    fn cursor_at<S: Side>(&self, idx: Option<u32>) -> Cursor<S> {
        match idx.and_then(|i| self.arena.handle(i)) {
            Some(handle) => Cursor::real(self.id, handle),
            None => Cursor::end(self.id),
        }
    }

    fn check_owner<S: Side>(&self, cursor: Cursor<S>) -> Result<(), BiMapError> {
        if cursor.map() == self.id {
            Ok(())
        } else {
            Err(BiMapError::ForeignCursor { side: S::NAME })
        }
    }

    fn resolve<S: Side>(&self, cursor: Cursor<S>) -> Result<Handle, BiMapError> {
        self.check_owner(cursor)?;
        match cursor.position() {
            Position::End => Err(BiMapError::EndCursor { side: S::NAME }),
            Position::Real(handle) if self.arena.contains(handle) => Ok(handle),
            Position::Real(_) => Err(BiMapError::StaleCursor { side: S::NAME }),
        }
    }

    /// Links a fresh record into both treaps without any duplicate check.
    fn link_new(&mut self, left: L, right: R) -> Handle
    where
        CL: Compare<L>,
        CR: Compare<R>,
    {
        let record = Record::new(left, right, self.priorities.next(), self.priorities.next());
        let handle = self.arena.insert(record);
        self.left.insert(&mut self.arena, handle.index());
        self.right.insert(&mut self.arena, handle.index());
        handle
    }

    /// Unlinks a live record from both treaps and takes it out of the arena.
    fn release(&mut self, handle: Handle) -> Record<L, R> {
        let idx = handle.index();
        self.left.erase(&mut self.arena, idx);
        self.right.erase(&mut self.arena, idx);
        self.arena
            .remove(handle)
            .expect("released record is live")
    }

    pub fn begin<S: Side>(&self) -> Cursor<S>
    where
        Record<L, R>: TreapNode<S>,
    {
        self.cursor_at(util::first::<S, Record<L, R>>(&self.arena, self.root::<S>()))
    }

    pub fn end<S: Side>(&self) -> Cursor<S> {
        Cursor::end(self.id)
    }

    pub fn begin_left(&self) -> LeftCursor {
        self.begin()
    }

    pub fn end_left(&self) -> LeftCursor {
        Cursor::end(self.id)
    }

    pub fn begin_right(&self) -> RightCursor {
        self.begin()
    }

    pub fn end_right(&self) -> RightCursor {
        Cursor::end(self.id)
    }

    /// Successor of `cursor` in its side's order; the last entry advances to
    /// `End`.
    pub fn next<S: Side>(&self, cursor: Cursor<S>) -> Result<Cursor<S>, BiMapError>
    where
        Record<L, R>: TreapNode<S>,
    {
        let handle = self.resolve(cursor)?;
        Ok(self.cursor_at(util::next::<S, Record<L, R>>(&self.arena, handle.index())))
    }

    /// Predecessor of `cursor`; `End` steps back to the last entry.
    pub fn prev<S: Side>(&self, cursor: Cursor<S>) -> Result<Cursor<S>, BiMapError>
    where
        Record<L, R>: TreapNode<S>,
    {
        let prev = match cursor.position() {
            Position::End => {
                self.check_owner(cursor)?;
                util::last::<S, Record<L, R>>(&self.arena, self.root::<S>())
            }
            Position::Real(_) => {
                let handle = self.resolve(cursor)?;
                util::prev::<S, Record<L, R>>(&self.arena, handle.index())
            }
        };
        match prev {
            Some(_) => Ok(self.cursor_at(prev)),
            None => Err(BiMapError::NoPredecessor { side: S::NAME }),
        }
    }

    /// The value `cursor` points at on its own side.
    pub fn value<S: Side>(
        &self,
        cursor: Cursor<S>,
    ) -> Result<&<Record<L, R> as TreapNode<S>>::Key, BiMapError>
    where
        Record<L, R>: TreapNode<S>,
    {
        let handle = self.resolve(cursor)?;
        Ok(<Record<L, R> as TreapNode<S>>::key(&self.arena[handle.index()]))
    }

    /// Both values of the record under `cursor`.
    pub fn entry<S: Side>(&self, cursor: Cursor<S>) -> Result<(&L, &R), BiMapError> {
        let handle = self.resolve(cursor)?;
        let record = &self.arena[handle.index()];
        Ok((&record.left, &record.right))
    }

    /// Erases the record under `cursor` from both sides and returns the
    /// cursor that followed it in `S`'s order.
    pub fn erase<S: Side>(&mut self, cursor: Cursor<S>) -> Result<Cursor<S>, BiMapError>
    where
        Record<L, R>: TreapNode<S>,
    {
        let handle = self.resolve(cursor)?;
        let succ = util::next::<S, Record<L, R>>(&self.arena, handle.index());
        self.release(handle);
        trace!(side = S::NAME, "erased record");
        Ok(self.cursor_at(succ))
    }

    pub fn erase_left(&mut self, cursor: LeftCursor) -> Result<LeftCursor, BiMapError> {
        self.erase(cursor)
    }

    pub fn erase_right(&mut self, cursor: RightCursor) -> Result<RightCursor, BiMapError> {
        self.erase(cursor)
    }

    /// Erases `[first, last)` in `S`'s order and returns `last`.
    ///
    /// The whole range is checked before anything is erased: if `last` cannot
    /// be reached from `first` nothing changes.
    pub fn erase_range<S: Side>(
        &mut self,
        first: Cursor<S>,
        last: Cursor<S>,
    ) -> Result<Cursor<S>, BiMapError>
    where
        Record<L, R>: TreapNode<S>,
    {
        self.check_owner(first)?;
        self.check_owner(last)?;
        if !last.is_end() {
            self.resolve(last)?;
        }

        let mut doomed = Vec::new();
        let mut curr = first;
        while curr != last {
            if curr.is_end() {
                return Err(BiMapError::InvalidRange { side: S::NAME });
            }
            doomed.push(self.resolve(curr)?);
            curr = self.next(curr)?;
        }

        debug!(side = S::NAME, count = doomed.len(), "erasing range");
        for handle in doomed {
            self.release(handle);
        }
        Ok(last)
    }

    pub fn erase_left_range(
        &mut self,
        first: LeftCursor,
        last: LeftCursor,
    ) -> Result<LeftCursor, BiMapError> {
        self.erase_range(first, last)
    }

    pub fn erase_right_range(
        &mut self,
        first: RightCursor,
        last: RightCursor,
    ) -> Result<RightCursor, BiMapError> {
        self.erase_range(first, last)
    }

    /// Pairs in `S`'s order.
    pub fn iter<S: Side>(&self) -> Iter<'_, S, L, R>
    where
        Record<L, R>: TreapNode<S>,
    {
        Iter::new(&self.arena, self.root::<S>())
    }

    pub fn iter_left(&self) -> Iter<'_, LeftSide, L, R> {
        self.iter()
    }

    pub fn iter_right(&self) -> Iter<'_, RightSide, L, R> {
        self.iter()
    }

    /// Checks both treaps and that each links every record exactly once.
    pub fn validate(&self) -> Result<usize, ValidationError>
    where
        CL: Compare<L>,
        CR: Compare<R>,
    {
        let records = self.len();
        let left = self.left.validate(&self.arena)?;
        if left != records {
            return Err(ValidationError::IndexSize {
                side: LeftSide::NAME,
                linked: left,
                records,
            });
        }
        let right = self.right.validate(&self.arena)?;
        if right != records {
            return Err(ValidationError::IndexSize {
                side: RightSide::NAME,
                linked: right,
                records,
            });
        }
        Ok(records)
    }
}

impl<L, R, CL, CR> BiMap<L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
    /// Associates `left` with `right`.
    ///
    /// When either value is already present nothing changes and `End` is
    /// returned. Otherwise the cursor points at the new left entry.
    pub fn insert(&mut self, left: L, right: R) -> LeftCursor {
        if self.left.find(&self.arena, &left).is_some() {
            trace!(side = LeftSide::NAME, "insert rejected: value already present");
            return Cursor::end(self.id);
        }
        if self.right.find(&self.arena, &right).is_some() {
            trace!(side = RightSide::NAME, "insert rejected: value already present");
            return Cursor::end(self.id);
        }
        let handle = self.link_new(left, right);
        Cursor::real(self.id, handle)
    }

    pub fn find_left(&self, key: &L) -> LeftCursor {
        self.cursor_at(self.left.find(&self.arena, key))
    }

    pub fn find_right(&self, key: &R) -> RightCursor {
        self.cursor_at(self.right.find(&self.arena, key))
    }

    pub fn contains_left(&self, key: &L) -> bool {
        self.left.find(&self.arena, key).is_some()
    }

    pub fn contains_right(&self, key: &R) -> bool {
        self.right.find(&self.arena, key).is_some()
    }

    pub fn get_by_left(&self, key: &L) -> Option<&R> {
        self.left
            .find(&self.arena, key)
            .map(|i| &self.arena[i].right)
    }

    pub fn get_by_right(&self, key: &R) -> Option<&L> {
        self.right
            .find(&self.arena, key)
            .map(|i| &self.arena[i].left)
    }

    pub fn at_left(&self, key: &L) -> Result<&R, BiMapError> {
        self.get_by_left(key).ok_or(BiMapError::KeyNotFound)
    }

    pub fn at_right(&self, key: &R) -> Result<&L, BiMapError> {
        self.get_by_right(key).ok_or(BiMapError::KeyNotFound)
    }

    /// Right value paired with `key`, creating the pairing if needed.
    ///
    /// Without an existing pairing, `key` is paired with `R::default()`. If
    /// that default is already paired with another left value, the record
    /// holding it is re-keyed to `key` instead of inserting a duplicate.
    ///
    /// `CR` must order `R::default()` consistently: only the left index is
    /// rebuilt around the re-keyed record.
    pub fn at_left_or_default(&mut self, key: L) -> &R
    where
        R: Default,
    {
        if let Some(i) = self.left.find(&self.arena, &key) {
            return &self.arena[i].right;
        }

        let default = R::default();
        let idx = match self.right.find(&self.arena, &default) {
            None => self.link_new(key, default).index(),
            Some(i) => {
                self.left.erase(&mut self.arena, i);
                self.arena[i].left = key;
                self.left.insert(&mut self.arena, i);
                trace!(side = LeftSide::NAME, "re-keyed record holding the default value");
                i
            }
        };
        &self.arena[idx].right
    }

    /// Mirror of [`at_left_or_default`](Self::at_left_or_default).
    pub fn at_right_or_default(&mut self, key: R) -> &L
    where
        L: Default,
    {
        if let Some(i) = self.right.find(&self.arena, &key) {
            return &self.arena[i].left;
        }

        let default = L::default();
        let idx = match self.left.find(&self.arena, &default) {
            None => self.link_new(default, key).index(),
            Some(i) => {
                self.right.erase(&mut self.arena, i);
                self.arena[i].right = key;
                self.right.insert(&mut self.arena, i);
                trace!(side = RightSide::NAME, "re-keyed record holding the default value");
                i
            }
        };
        &self.arena[idx].left
    }

    pub fn remove_left(&mut self, key: &L) -> Option<(L, R)> {
        let handle = self.left.find(&self.arena, key).and_then(|i| self.arena.handle(i))?;
        trace!(side = LeftSide::NAME, "removing by key");
        Some(self.release(handle).into_pair())
    }

    pub fn remove_right(&mut self, key: &R) -> Option<(L, R)> {
        let handle = self.right.find(&self.arena, key).and_then(|i| self.arena.handle(i))?;
        trace!(side = RightSide::NAME, "removing by key");
        Some(self.release(handle).into_pair())
    }

    pub fn erase_left_key(&mut self, key: &L) -> bool {
        self.remove_left(key).is_some()
    }

    pub fn erase_right_key(&mut self, key: &R) -> bool {
        self.remove_right(key).is_some()
    }

    pub fn lower_bound_left(&self, key: &L) -> LeftCursor {
        self.cursor_at(self.left.lower_bound(&self.arena, key))
    }

    pub fn upper_bound_left(&self, key: &L) -> LeftCursor {
        self.cursor_at(self.left.upper_bound(&self.arena, key))
    }

    pub fn lower_bound_right(&self, key: &R) -> RightCursor {
        self.cursor_at(self.right.lower_bound(&self.arena, key))
    }

    pub fn upper_bound_right(&self, key: &R) -> RightCursor {
        self.cursor_at(self.right.upper_bound(&self.arena, key))
    }
}

/// Deep copy: every pair is re-linked, in left order, into fresh treaps.
impl<L, R, CL, CR> Clone for BiMap<L, R, CL, CR>
where
    L: Clone,
    R: Clone,
    CL: Compare<L> + Clone,
    CR: Compare<R> + Clone,
{
    fn clone(&self) -> Self {
        let mut out = Self {
            arena: Arena::with_capacity(self.len()),
            left: Treap::new(self.left.comparator().clone()),
            right: Treap::new(self.right.comparator().clone()),
            priorities: self.priorities.clone(),
            id: next_map_id(),
        };
        for (l, r) in self.iter_left() {
            out.link_new(l.clone(), r.clone());
        }
        out
    }
}

/// Same length and, walked in left order, every pair equivalent under the
/// left-hand map's comparators.
impl<L, R, CL, CR> PartialEq for BiMap<L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter_left()
                .zip(other.iter_left())
                .all(|((al, ar), (bl, br))| {
                    self.left_comparator().equivalent(al, bl)
                        && self.right_comparator().equivalent(ar, br)
                })
    }
}

impl<L, R, CL, CR> Eq for BiMap<L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
}

impl<L: fmt::Debug, R: fmt::Debug, CL, CR> fmt::Debug for BiMap<L, R, CL, CR> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter_left()).finish()
    }
}

impl<'a, L, R, CL, CR> IntoIterator for &'a BiMap<L, R, CL, CR> {
    type Item = (&'a L, &'a R);
    type IntoIter = Iter<'a, LeftSide, L, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_left()
    }
}

/// Pairs whose left or right value is already present are skipped.
impl<L, R, CL, CR> Extend<(L, R)> for BiMap<L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
    fn extend<I: IntoIterator<Item = (L, R)>>(&mut self, iter: I) {
        for (l, r) in iter {
            self.insert(l, r);
        }
    }
}

impl<L, R, CL, CR> FromIterator<(L, R)> for BiMap<L, R, CL, CR>
where
    CL: Compare<L> + Default,
    CR: Compare<R> + Default,
{
    fn from_iter<I: IntoIterator<Item = (L, R)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}
