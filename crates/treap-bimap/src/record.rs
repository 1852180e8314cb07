use treap_forest::{LeftSide, Links, RightSide, TreapNode};

/// One stored association.
///
/// A record is a node of both treaps at once: [`LeftSide`] follows
/// `left_links` and orders by `left`, [`RightSide`] follows `right_links` and
/// orders by `right`. Records only ever live inside a map's arena.
#[derive(Debug)]
pub struct Record<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
    left_links: Links,
    right_links: Links,
}

impl<L, R> Record<L, R> {
    pub(crate) fn new(left: L, right: R, left_priority: u32, right_priority: u32) -> Self {
        Self {
            left,
            right,
            left_links: Links::new(left_priority),
            right_links: Links::new(right_priority),
        }
    }

    pub(crate) fn into_pair(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> TreapNode<LeftSide> for Record<L, R> {
    type Key = L;

    fn links(&self) -> &Links {
        &self.left_links
    }

    fn links_mut(&mut self) -> &mut Links {
        &mut self.left_links
    }

    fn key(&self) -> &L {
        &self.left
    }
}

impl<L, R> TreapNode<RightSide> for Record<L, R> {
    type Key = R;

    fn links(&self) -> &Links {
        &self.right_links
    }

    fn links_mut(&mut self) -> &mut Links {
        &mut self.right_links
    }

    fn key(&self) -> &R {
        &self.right
    }
}
