pub use crate::error::RowhideError;

/// Result type alias for all rowhide operations.
pub type Result<T> = std::result::Result<T, RowhideError>;
