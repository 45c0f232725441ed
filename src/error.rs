use std::error::Error;
use std::fmt;

/// The outcome of a [`Ring`](crate::Ring) operation that could not be carried out.
///
/// Every variant is recoverable: the ring is left exactly as it was before the call.
/// The `Display` text is the line a console front-end prints for the condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RingError {
    /// A position argument of `0`; positions are 1-based.
    InvalidPosition,
    /// A deletion position past the last node.
    OutOfRange,
    /// No node holds the requested value.
    NotFound,
    /// The ring has no nodes.
    Empty,
}

impl fmt::Display for RingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            RingError::InvalidPosition => "Invalid position!",
            RingError::OutOfRange => "Position out of range!",
            RingError::NotFound => "Value not found!",
            RingError::Empty => "List is empty!",
        };
        f.write_str(msg)
    }
}

impl Error for RingError {}

#[cfg(test)]
mod tests {
    use crate::RingError;

    #[test]
    fn error_messages() {
        assert_eq!(RingError::InvalidPosition.to_string(), "Invalid position!");
        assert_eq!(RingError::OutOfRange.to_string(), "Position out of range!");
        assert_eq!(RingError::NotFound.to_string(), "Value not found!");
        assert_eq!(RingError::Empty.to_string(), "List is empty!");
    }
}
