//! Error handling for field arithmetic primitives

use alloc::borrow::Cow;
use core::fmt;

#[cfg(feature = "std")]
use alloc::string::ToString;

use tatefield_api::Error as CoreError;

/// The error type for field arithmetic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Largest permitted length
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },

    /// No irreducible trinomial is known for the extension degree
    UnsupportedDegree {
        /// The requested extension degree m
        degree: usize,
    },

    /// Inversion of zero was requested
    InvertZero {
        /// Operation that attempted the inversion
        context: &'static str,
    },

    /// Fallback for other errors
    Other(&'static str),
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for field arithmetic primitives
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            },
            Error::Length { context, expected, actual } => {
                write!(f, "Invalid length for {}: expected {}, got {}",
                    context, expected, actual)
            },
            Error::UnsupportedDegree { degree } => {
                write!(f, "Unsupported extension degree {}: no irreducible trinomial registered", degree)
            },
            Error::InvertZero { context } => {
                write!(f, "Inversion of zero in {}", context)
            },
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            #[cfg_attr(not(feature = "std"), allow(unused_variables))]
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: match name {
                    Cow::Borrowed(s) => s,
                    Cow::Owned(_) => "field parameter",
                },
                #[cfg(feature = "std")]
                message: reason.into_owned(),
            },
            Error::Length { context, expected, actual } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::UnsupportedDegree { degree } => CoreError::UnsupportedDegree { degree },
            Error::InvertZero { context } => CoreError::InvertZero { context },
            #[cfg_attr(not(feature = "std"), allow(unused_variables))]
            Error::Other(msg) => CoreError::Other {
                context: "field arithmetic",
                #[cfg(feature = "std")]
                message: msg.to_string(),
            },
        }
    }
}

// Re-export core error handling traits for convenience
pub use tatefield_api::error::ResultExt;

// Include the validation submodule
pub mod validate;
