//! In-order navigation over one side's links.
//!
//! These helpers never look at keys, so they work the same for every side of
//! a record. Pass the side explicitly when the node type has several:
//! `next::<LeftSide, _>(&arena, idx)`.

use crate::arena::Arena;
use crate::types::{Side, TreapNode};

#[inline]
pub(crate) fn get_p<S: Side, N: TreapNode<S>>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena[idx].links().p
}

#[inline]
pub(crate) fn get_l<S: Side, N: TreapNode<S>>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena[idx].links().l
}

#[inline]
pub(crate) fn get_r<S: Side, N: TreapNode<S>>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena[idx].links().r
}

#[inline]
pub(crate) fn set_p<S: Side, N: TreapNode<S>>(arena: &mut Arena<N>, idx: u32, v: Option<u32>) {
    arena[idx].links_mut().p = v;
}

#[inline]
pub(crate) fn set_l<S: Side, N: TreapNode<S>>(arena: &mut Arena<N>, idx: u32, v: Option<u32>) {
    arena[idx].links_mut().l = v;
}

#[inline]
pub(crate) fn set_r<S: Side, N: TreapNode<S>>(arena: &mut Arena<N>, idx: u32, v: Option<u32>) {
    arena[idx].links_mut().r = v;
}

/// Leftmost node under `root`.
pub fn first<S: Side, N: TreapNode<S>>(arena: &Arena<N>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l::<S, N>(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node under `root`.
pub fn last<S: Side, N: TreapNode<S>>(arena: &Arena<N>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r::<S, N>(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<S: Side, N: TreapNode<S>>(arena: &Arena<N>, node: u32) -> Option<u32> {
    if let Some(r) = get_r::<S, N>(arena, node) {
        return first::<S, N>(arena, Some(r));
    }
    let mut curr = node;
    let mut p = get_p::<S, N>(arena, node);
    while let Some(pi) = p {
        if get_r::<S, N>(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p::<S, N>(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<S: Side, N: TreapNode<S>>(arena: &Arena<N>, node: u32) -> Option<u32> {
    if let Some(l) = get_l::<S, N>(arena, node) {
        return last::<S, N>(arena, Some(l));
    }
    let mut curr = node;
    let mut p = get_p::<S, N>(arena, node);
    while let Some(pi) = p {
        if get_l::<S, N>(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p::<S, N>(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}
