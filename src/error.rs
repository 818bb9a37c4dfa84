//! Error types for calling functions by name.
//!
//! The numeric functions themselves never fail: out-of-domain inputs produce
//! documented sentinel values. Errors only arise in the [`registry`](crate::registry)
//! layer, where a caller can ask for a function that does not exist or call it
//! with the wrong number of arguments.

use core::fmt;

/// Maximum length of a function name carried inside an error.
pub const MAX_FUNCTION_NAME_LEN: usize = 32;

/// Fixed-capacity function name, so errors can be built without allocating.
///
/// cbindgen:ignore
pub type FunctionName = heapless::String<MAX_FUNCTION_NAME_LEN>;

/// Result type used throughout the crate.
///
/// cbindgen:ignore
pub type Result<T> = core::result::Result<T, MathError>;

/// Error type for name-based dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// No function with this name is registered.
    UnknownFunction { name: FunctionName },

    /// The function exists but takes a different number of arguments.
    InvalidArity {
        /// Name of the function that was called
        name: FunctionName,
        /// Number of arguments the function takes
        expected: usize,
        /// Number of arguments supplied
        found: usize,
    },

    /// The function table has no room for another entry.
    CapacityExceeded,

    /// A function name does not fit in [`FunctionName`].
    NameTooLong,
}

impl MathError {
    /// Builds an [`MathError::UnknownFunction`], or [`MathError::NameTooLong`]
    /// if the name itself cannot be stored.
    pub fn unknown_function(name: &str) -> Self {
        match FunctionName::try_from(name) {
            Ok(name) => MathError::UnknownFunction { name },
            Err(()) => MathError::NameTooLong,
        }
    }

    /// Builds an [`MathError::InvalidArity`].
    pub fn invalid_arity(name: &str, expected: usize, found: usize) -> Self {
        match FunctionName::try_from(name) {
            Ok(name) => MathError::InvalidArity {
                name,
                expected,
                found,
            },
            Err(()) => MathError::NameTooLong,
        }
    }
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::UnknownFunction { name } => write!(f, "Unknown function: '{}'", name),
            MathError::InvalidArity {
                name,
                expected,
                found,
            } => write!(
                f,
                "Invalid function call to '{}': expected {} arguments, found {}",
                name, expected, found
            ),
            MathError::CapacityExceeded => write!(f, "Capacity exceeded for function table"),
            MathError::NameTooLong => write!(
                f,
                "Function name longer than {} bytes",
                MAX_FUNCTION_NAME_LEN
            ),
        }
    }
}

impl core::error::Error for MathError {}
