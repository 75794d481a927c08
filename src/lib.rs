//! A small and safe library for decoding DNS message headers.
//!
//! [DnsHeader] is a read-only view over the fixed 12-byte prefix that
//! starts every DNS message, as defined in
//! [RFC 1035 section 4.1.1](https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.1).
//! It exposes the transaction id, the flag bits and the four section
//! counts without copying the buffer and without touching any byte
//! past the header.
//!
//! # Usage
//!
//! ```rust
//! use dns_header::{DnsHeader, MsgType, OpCode};
//!
//! // A query header: id 0xF09C, all flags clear, one question.
//! let datagram = [
//!     0xF0, 0x9C, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
//! ];
//!
//! let header = DnsHeader::new(&datagram).expect("Failed to decode header");
//! assert_eq!(header.id(), 0xF09C);
//! assert_eq!(header.msg_type(), MsgType::Query);
//! assert_eq!(header.opcode(), Ok(OpCode::StandardQuery));
//! assert_eq!(header.num_questions(), 1);
//! ```
//!
//! A buffer that arrived from a socket can be tagged with its sender
//! address, which is then required:
//!
//! ```rust
//! use dns_header::DnsHeader;
//! use std::net::SocketAddr;
//!
//! let datagram = [0u8; 12];
//! let sender: SocketAddr = "127.0.0.1:53".parse().unwrap();
//!
//! let header = DnsHeader::from_datagram(&datagram, Some(sender)).unwrap();
//! assert_eq!(header.origin(), Some(sender));
//! ```
//!
//! # Limitations
//!
//! This library decodes the header section only:
//! - No question or resource record decoding. [DnsHeader::body] hands
//!   the bytes past the header to whatever parses those sections.
//! - No message construction or encoding.
//! - No transport: the caller brings the bytes. A UDP reader would
//!   typically hand over a buffer of up to [MAX_UDP_MSG_LEN] bytes
//!   together with the sender address.

#![forbid(unsafe_code)]

// log for logging (optional).
#[cfg(not(feature = "logging"))]
#[macro_use]
mod log {
    macro_rules! trace {
        ($($arg:expr),*) => {
            {
                let _ = ($($arg),*); // avoid warnings about unused variables.
            }
        };
    }
}

mod error;
mod header;

pub use error::{Error, Result};
pub use header::{
    DnsHeader, MsgType, OpCode, ReturnCode, FLAGS_AA, FLAGS_OPCODE_MASK, FLAGS_QR_MASK,
    FLAGS_QR_QUERY, FLAGS_QR_RESPONSE, FLAGS_RA, FLAGS_RCODE_MASK, FLAGS_RD, FLAGS_TC,
    MAX_UDP_MSG_LEN, MSG_HEADER_LEN,
};
