use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BiMapError {
    #[error("key not found")]
    KeyNotFound,
    #[error("cursor is at the end of the {side} view")]
    EndCursor { side: &'static str },
    #[error("cursor refers to an erased {side} entry")]
    StaleCursor { side: &'static str },
    #[error("cursor belongs to a different map ({side} view)")]
    ForeignCursor { side: &'static str },
    #[error("no entry precedes the cursor in the {side} view")]
    NoPredecessor { side: &'static str },
    #[error("range end is not reachable from range start in the {side} view")]
    InvalidRange { side: &'static str },
}
