use crate::header::MSG_HEADER_LEN;
use std::fmt;

/// A basic error type from this library.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The message buffer is empty.
    InvalidInput,

    /// The buffer is shorter than the fixed header. Carries the actual
    /// buffer length.
    TooShort(usize),

    /// A datagram received from the network must carry the address it
    /// came from.
    MissingOrigin,

    /// The OPCODE bits hold a value outside the assigned set. Carries
    /// the raw value.
    UnknownOpcode(u8),

    /// The RCODE bits hold a value outside the assigned set. Carries
    /// the raw value.
    UnknownReturnCode(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "invalid message of empty body"),
            Self::TooShort(len) => write!(
                f,
                "unable to decode message: minimum data length is {} bytes, got only {} bytes",
                MSG_HEADER_LEN, len
            ),
            Self::MissingOrigin => write!(f, "received datagram without an origin address"),
            Self::UnknownOpcode(value) => write!(f, "unknown OPCODE {}", value),
            Self::UnknownReturnCode(value) => write!(f, "unknown RCODE {}", value),
        }
    }
}

impl std::error::Error for Error {}

/// One and only `Result` type from this library crate.
pub type Result<T> = core::result::Result<T, Error>;
