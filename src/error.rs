use crate::cursor::Position;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum IterError {
    /// The iterator is a placeholder with no wrapped cursor.
    #[error("Iterator is empty.")]
    Empty,

    #[error("Iterator is at the end of its sequence.")]
    PastEnd,

    /// The two iterators were created over different sequences.
    #[error("Iterators belong to different sequences: {left:?} and {right:?}.")]
    MismatchedOrigin { left: Position, right: Position },

    /// A seek target lies beyond the end of the receiving sequence.
    #[error("Position {target:?} is beyond the end of the sequence.")]
    Unreachable { target: Position },
}

pub type Result<T> = std::result::Result<T, IterError>;
