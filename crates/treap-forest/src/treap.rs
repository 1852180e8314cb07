//! Randomized balanced BST (treap) over one side's links.
//!
//! The tree is in-order sorted by the comparator and heap-ordered on
//! [`Links::priority`]: a parent's priority is `>=` both children's. Since
//! priorities are drawn uniformly at random when a record is created, split
//! and merge keep the expected depth at O(log n).
//!
//! A [`Treap`] only stores its root and comparator. Nodes live in a
//! caller-owned [`Arena`], which lets two treaps of different sides index the
//! very same records.

use std::marker::PhantomData;

use crate::arena::Arena;
use crate::error::ValidationError;
use crate::types::{Compare, Links, Side, TreapNode};
use crate::util::{first, get_l, get_p, get_r, last, next, set_l, set_p, set_r};

#[derive(Debug)]
pub struct Treap<S: Side, C> {
    root: Option<u32>,
    comparator: C,
    _side: PhantomData<S>,
}

impl<S: Side, C: Default> Default for Treap<S, C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<S: Side, C> Treap<S, C> {
    pub fn new(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
            _side: PhantomData,
        }
    }

    pub fn root(&self) -> Option<u32> {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Forgets every node. The arena is left untouched.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Exchanges roots and comparators in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.root, &mut other.root);
        std::mem::swap(&mut self.comparator, &mut other.comparator);
    }

    pub fn min<N: TreapNode<S>>(&self, arena: &Arena<N>) -> Option<u32> {
        first::<S, N>(arena, self.root)
    }

    pub fn max<N: TreapNode<S>>(&self, arena: &Arena<N>) -> Option<u32> {
        last::<S, N>(arena, self.root)
    }

    /// Joins two treaps where every key under `a` orders before every key
    /// under `b`. The higher-priority root wins; ties go to `a`.
    ///
    /// The returned root keeps whatever parent it had; callers relink it.
    pub fn merge<N: TreapNode<S>>(
        arena: &mut Arena<N>,
        a: Option<u32>,
        b: Option<u32>,
    ) -> Option<u32> {
        let (a, b) = match (a, b) {
            (None, b) => return b,
            (a, None) => return a,
            (Some(a), Some(b)) => (a, b),
        };

        if arena[a].links().priority < arena[b].links().priority {
            let l = get_l::<S, N>(arena, b);
            let res = Self::merge(arena, Some(a), l);
            set_l::<S, N>(arena, b, res);
            if let Some(res) = res {
                set_p::<S, N>(arena, res, Some(b));
            }
            Some(b)
        } else {
            let r = get_r::<S, N>(arena, a);
            let res = Self::merge(arena, r, Some(b));
            set_r::<S, N>(arena, a, res);
            if let Some(res) = res {
                set_p::<S, N>(arena, res, Some(a));
            }
            Some(a)
        }
    }

    /// Partitions `subtree` into the nodes for which `goes_left` holds and the
    /// rest. `goes_left` must be monotone over the in-order sequence.
    ///
    /// Both returned roots have no parent.
    fn split_with<N, F>(
        arena: &mut Arena<N>,
        subtree: Option<u32>,
        goes_left: &F,
    ) -> (Option<u32>, Option<u32>)
    where
        N: TreapNode<S>,
        F: Fn(&Arena<N>, u32) -> bool,
    {
        let Some(t) = subtree else {
            return (None, None);
        };

        if goes_left(&*arena, t) {
            let r = get_r::<S, N>(arena, t);
            let (lt, ge) = Self::split_with(arena, r, goes_left);
            set_r::<S, N>(arena, t, lt);
            if let Some(lt) = lt {
                set_p::<S, N>(arena, lt, Some(t));
            }
            set_p::<S, N>(arena, t, None);
            (Some(t), ge)
        } else {
            let l = get_l::<S, N>(arena, t);
            let (lt, ge) = Self::split_with(arena, l, goes_left);
            set_l::<S, N>(arena, t, ge);
            if let Some(ge) = ge {
                set_p::<S, N>(arena, ge, Some(t));
            }
            set_p::<S, N>(arena, t, None);
            (lt, Some(t))
        }
    }

    fn set_root<N: TreapNode<S>>(&mut self, arena: &mut Arena<N>, root: Option<u32>) {
        if let Some(root) = root {
            set_p::<S, N>(arena, root, None);
        }
        self.root = root;
    }

    /// Unlinks `node` from the tree by merging its children into its place.
    ///
    /// `node` must currently be linked into this tree. Its links are cleared
    /// afterwards; the node itself stays in the arena.
    pub fn erase<N: TreapNode<S>>(&mut self, arena: &mut Arena<N>, node: u32) {
        let Links { p, l, r, .. } = *arena[node].links();
        let merged = Self::merge(arena, l, r);

        match p {
            None => self.set_root(arena, merged),
            Some(p) => {
                if let Some(m) = merged {
                    set_p::<S, N>(arena, m, Some(p));
                }
                if get_l::<S, N>(arena, p) == Some(node) {
                    set_l::<S, N>(arena, p, merged);
                } else {
                    set_r::<S, N>(arena, p, merged);
                }
            }
        }

        arena[node].links_mut().detach();
    }
}

impl<S: Side, C> Treap<S, C> {
    /// Links a detached node into the tree: split at its key into
    /// (strictly less, rest), then merge `less + node + rest`.
    ///
    /// No duplicate check happens here.
    pub fn insert<N>(&mut self, arena: &mut Arena<N>, node: u32)
    where
        N: TreapNode<S>,
        C: Compare<N::Key>,
    {
        debug_assert!(arena[node].links().is_detached());
        let comparator = &self.comparator;
        let (lt, ge) = Self::split_with(arena, self.root, &|arena: &Arena<N>, t: u32| {
            comparator.less(arena[t].key(), arena[node].key())
        });
        let lt = Self::merge(arena, lt, Some(node));
        let root = Self::merge(arena, lt, ge);
        self.set_root(arena, root);
    }

    /// Splits `subtree` into (keys less than `key`, keys not less than `key`).
    pub fn split<N>(
        &self,
        arena: &mut Arena<N>,
        subtree: Option<u32>,
        key: &N::Key,
    ) -> (Option<u32>, Option<u32>)
    where
        N: TreapNode<S>,
        C: Compare<N::Key>,
    {
        let comparator = &self.comparator;
        Self::split_with(arena, subtree, &|arena: &Arena<N>, t: u32| {
            comparator.less(arena[t].key(), key)
        })
    }

    pub fn find<N>(&self, arena: &Arena<N>, key: &N::Key) -> Option<u32>
    where
        N: TreapNode<S>,
        C: Compare<N::Key>,
    {
        let mut curr = self.root;
        while let Some(i) = curr {
            let k = arena[i].key();
            curr = if self.comparator.less(k, key) {
                get_r::<S, N>(arena, i)
            } else if self.comparator.less(key, k) {
                get_l::<S, N>(arena, i)
            } else {
                return Some(i);
            };
        }
        None
    }

    /// Unlinks the node equivalent to `key`. Returns its index, or `None`
    /// when no node matched.
    pub fn erase_key<N>(&mut self, arena: &mut Arena<N>, key: &N::Key) -> Option<u32>
    where
        N: TreapNode<S>,
        C: Compare<N::Key>,
    {
        let node = self.find(arena, key)?;
        self.erase(arena, node);
        Some(node)
    }

    /// First node whose key is not less than `key`. `None` means end.
    pub fn lower_bound<N>(&self, arena: &Arena<N>, key: &N::Key) -> Option<u32>
    where
        N: TreapNode<S>,
        C: Compare<N::Key>,
    {
        let mut curr = self.root;
        let mut res = None;
        while let Some(i) = curr {
            if self.comparator.less(arena[i].key(), key) {
                curr = get_r::<S, N>(arena, i);
            } else {
                res = Some(i);
                curr = get_l::<S, N>(arena, i);
            }
        }
        res
    }

    /// First node whose key is greater than `key`. `None` means end.
    pub fn upper_bound<N>(&self, arena: &Arena<N>, key: &N::Key) -> Option<u32>
    where
        N: TreapNode<S>,
        C: Compare<N::Key>,
    {
        let mut curr = self.root;
        let mut res = None;
        while let Some(i) = curr {
            if self.comparator.less(key, arena[i].key()) {
                res = Some(i);
                curr = get_l::<S, N>(arena, i);
            } else {
                curr = get_r::<S, N>(arena, i);
            }
        }
        res
    }

    /// Checks parent links, in-order ordering and heap order.
    ///
    /// Returns the number of linked nodes.
    pub fn validate<N>(&self, arena: &Arena<N>) -> Result<usize, ValidationError>
    where
        N: TreapNode<S>,
        C: Compare<N::Key>,
    {
        fn links_and_heap<S: Side, N: TreapNode<S>>(
            arena: &Arena<N>,
            node: u32,
        ) -> Result<usize, ValidationError> {
            let links = *arena[node].links();
            let mut count = 1;
            for child in [links.l, links.r].into_iter().flatten() {
                if get_p::<S, N>(arena, child) != Some(node) {
                    return Err(ValidationError::BrokenParent {
                        side: S::NAME,
                        node,
                        child,
                    });
                }
                if arena[child].links().priority > links.priority {
                    return Err(ValidationError::HeapOrder {
                        side: S::NAME,
                        node,
                        child,
                    });
                }
                count += links_and_heap::<S, N>(arena, child)?;
            }
            Ok(count)
        }

        let Some(root) = self.root else {
            return Ok(0);
        };
        if get_p::<S, N>(arena, root).is_some() {
            return Err(ValidationError::RootHasParent {
                side: S::NAME,
                node: root,
            });
        }
        let linked = links_and_heap::<S, N>(arena, root)?;

        let mut prev = root;
        let mut curr = self.min(arena);
        let mut seen = 0;
        while let Some(i) = curr {
            if seen > 0 && self.comparator.less(arena[i].key(), arena[prev].key()) {
                return Err(ValidationError::Order {
                    side: S::NAME,
                    node: i,
                });
            }
            seen += 1;
            prev = i;
            curr = next::<S, N>(arena, i);
        }
        if seen != linked {
            return Err(ValidationError::WalkMismatch {
                side: S::NAME,
                seen,
                linked,
            });
        }
        Ok(linked)
    }
}
