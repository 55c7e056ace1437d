use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Push on a stack that already holds `capacity` elements.
    #[error("stack is full, cannot push more than {capacity} elements")]
    StackFull { capacity: usize },
    /// Pop or peek on a stack with no elements.
    #[error("stack is empty, there is no element to read")]
    StackEmpty,
    #[error("stack capacity must be at least 1")]
    InvalidCapacity,
}

pub type Result<T> = std::result::Result<T, Error>;
