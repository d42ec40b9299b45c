pub mod bignum;
pub mod errors;
pub mod radix192;
pub mod seven;

// Re-export error types for public API
pub use errors::{DecodeError, StreamError};

/// How a decoded unit ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// A complete unit; more may follow.
    Full,
    /// A unit closed by the pad marker; it must be the last one.
    Padded,
}
