use thiserror::Error;

/// Validation errors surfaced synchronously by [`crate::book::Book`], before any
/// state mutation occurs. `UnknownOrderId` is intentionally absent here: per the
/// cancel contract it is surfaced as a `bool`, not an error.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookError {
    #[error("order id {0} is already live on this book")]
    DuplicateOrderId(u64),

    #[error("invalid order: {0}")]
    InvalidOrder(String),
}

pub type BookResult<T> = Result<T, BookError>;
