use thiserror::Error;

/// Structural defect found by [`Treap::validate`](crate::Treap::validate).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{side} root {node} has a parent")]
    RootHasParent { side: &'static str, node: u32 },
    #[error("broken {side} parent link on child {child} of {node}")]
    BrokenParent {
        side: &'static str,
        node: u32,
        child: u32,
    },
    #[error("{side} heap order violated between {node} and {child}")]
    HeapOrder {
        side: &'static str,
        node: u32,
        child: u32,
    },
    #[error("{side} node order violated at {node}")]
    Order { side: &'static str, node: u32 },
    #[error("{side} in-order walk saw {seen} of {linked} nodes")]
    WalkMismatch {
        side: &'static str,
        seen: usize,
        linked: usize,
    },
    #[error("{side} index links {linked} nodes but {records} records are stored")]
    IndexSize {
        side: &'static str,
        linked: usize,
        records: usize,
    },
}
