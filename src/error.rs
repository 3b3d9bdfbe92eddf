//! Error types returned by fallible deque operations.

/// The error type for fallible [`RingDeque`](crate::RingDeque) operations.
///
/// An empty deque is never an error: [`pop_front`](crate::RingDeque::pop_front),
/// [`front`](crate::RingDeque::front) and friends signal emptiness with [`None`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An argument was rejected before any state was touched, such as a
    /// negative capacity passed to [`try_with_capacity`](crate::RingDeque::try_with_capacity).
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A positional access fell outside `0..len`, or a
    /// [`Traversal`](crate::Traversal) was advanced past its end.
    #[error("index out of range: the len is {len} but the index is {index}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The length of the sequence at the time of the access.
        len: usize,
    },

    /// A [`Traversal`](crate::Traversal) observed that the deque was
    /// structurally modified after the traversal was created.
    #[error("deque was modified during traversal")]
    ConcurrentModification,
}

/// A specialized [`Result`](core::result::Result) type for deque operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages() {
        assert_eq!(
            Error::InvalidArgument("capacity must not be negative").to_string(),
            "invalid argument: capacity must not be negative"
        );
        assert_eq!(
            Error::IndexOutOfRange { index: 4, len: 2 }.to_string(),
            "index out of range: the len is 2 but the index is 4"
        );
        assert_eq!(
            Error::ConcurrentModification.to_string(),
            "deque was modified during traversal"
        );
    }
}
