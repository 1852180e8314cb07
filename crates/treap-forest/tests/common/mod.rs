use treap_forest::{util, Arena, LeftSide, Links, RightSide, Side, TreapNode};

/// Record linked into two trees: by `a` on the left, by `b` on the right.
#[derive(Debug)]
pub struct Twin {
    pub a: u16,
    pub b: u16,
    pub la: Links,
    pub lb: Links,
}

impl Twin {
    pub fn new(a: u16, b: u16, pa: u32, pb: u32) -> Self {
        Self {
            a,
            b,
            la: Links::new(pa),
            lb: Links::new(pb),
        }
    }
}

impl TreapNode<LeftSide> for Twin {
    type Key = u16;

    fn links(&self) -> &Links {
        &self.la
    }

    fn links_mut(&mut self) -> &mut Links {
        &mut self.la
    }

    fn key(&self) -> &u16 {
        &self.a
    }
}

impl TreapNode<RightSide> for Twin {
    type Key = u16;

    fn links(&self) -> &Links {
        &self.lb
    }

    fn links_mut(&mut self) -> &mut Links {
        &mut self.lb
    }

    fn key(&self) -> &u16 {
        &self.b
    }
}

/// Keys of side `S` in order, starting at `root`.
pub fn in_order<S: Side>(arena: &Arena<Twin>, root: Option<u32>) -> Vec<u16>
where
    Twin: TreapNode<S, Key = u16>,
{
    let mut out = Vec::new();
    let mut curr = util::first::<S, Twin>(arena, root);
    while let Some(i) = curr {
        out.push(*<Twin as TreapNode<S>>::key(&arena[i]));
        curr = util::next::<S, Twin>(arena, i);
    }
    out
}
