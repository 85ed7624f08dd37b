use std::fmt;

/// Failure of a positional access or mutation on an [`IndexableList`](crate::list::IndexableList).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The index is outside `0..len` (or `0..=len` for insertion).
    OutOfRange { index: usize, len: usize },
    /// `front` or `back` was called on an empty list.
    Empty,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::OutOfRange { index, len } => {
                write!(f, "index {} out of range for list of length {}", index, len)
            }
            ListError::Empty => write!(f, "list is empty"),
        }
    }
}

impl std::error::Error for ListError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityExceededError {
    len: usize,
    max: usize,
}

impl CapacityExceededError {
    pub fn new(len: usize, max: usize) -> Self {
        Self { len, max }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

impl fmt::Display for CapacityExceededError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot sort {} elements, the limit is {} elements",
            self.len, self.max
        )
    }
}

impl std::error::Error for CapacityExceededError {}

/// Reasons a sort is refused. A refused sort never touches the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    CapacityExceeded(CapacityExceededError),
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::CapacityExceeded(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SortError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SortError::CapacityExceeded(err) => Some(err),
        }
    }
}

impl From<CapacityExceededError> for SortError {
    fn from(err: CapacityExceededError) -> Self {
        SortError::CapacityExceeded(err)
    }
}
