//! Error types for quantity operations.

/// Result type for quantity operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for quantity operations.
///
/// Every failure is a deterministic function of the inputs; nothing here is
/// transient, so callers should never retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The numeric literal could not be read as a decimal number.
    #[error("invalid numeric literal: {0:?}")]
    InvalidNumber(String),

    /// The symbol is not a known unit, prefixed unit, or exponentiated unit.
    #[error("unknown unit: {0:?}")]
    UnknownUnit(String),

    /// The unit's definition chain does not reduce to base units. This is a
    /// catalog data fault (a cycle, an over-deep chain, or an offset unit
    /// used inside a composition), not a caller error.
    #[error("unit {0:?} does not reduce to base units")]
    UnresolvableUnit(String),

    /// Division by a quantity whose canonical value is zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The operation requires both operands to reduce to the same base
    /// dimensions.
    #[error("incompatible dimensions: {left:?} vs {right:?}")]
    IncompatibleDimensions { left: String, right: String },

    /// The quantity names a unit system this engine does not handle.
    #[error("unsupported unit system: {0:?}")]
    UnsupportedSystem(String),

    /// The result does not fit in the 96-bit decimal mantissa.
    #[error("numeric overflow")]
    Overflow,
}
