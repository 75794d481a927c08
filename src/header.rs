//! DNS header decoding utility.
//!
//! [DnsHeader] is a read-only view over the fixed 12-byte header of a
//! DNS message. The layout below is normative and bit-exact.

#[cfg(feature = "logging")]
use log::trace;

use crate::error::{Error, Result};
use std::{fmt, net::SocketAddr};

/// Length of the fixed header at the start of every DNS message.
///
/// See [RFC 1035 section 4.1.1](https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.1)
pub const MSG_HEADER_LEN: usize = 12;

/// Max size of a DNS message carried over UDP.
///
/// Reference: [RFC 1035 section 4.2.1](https://datatracker.ietf.org/doc/html/rfc1035#section-4.2.1)
pub const MAX_UDP_MSG_LEN: usize = 512;

// Definitions for DNS message header "flags" field
//
// The "flags" field occupies bytes 2 and 3 of the header, in this
// format: (RFC 1035 section 4.1.1)
//
//   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
// |QR|   Opcode  |AA|TC|RD|RA|   Z    |   RCODE   |
//
pub const FLAGS_QR_MASK: u16 = 0x8000; // mask for query/response bit

/// Flag bit to indicate a query
pub const FLAGS_QR_QUERY: u16 = 0x0000;

/// Flag bit to indicate a response
pub const FLAGS_QR_RESPONSE: u16 = 0x8000;

/// mask for the 4-bit OPCODE field
pub const FLAGS_OPCODE_MASK: u16 = 0x7800;

const FLAGS_OPCODE_SHIFT: u16 = 11;

/// Flag bit for Authoritative Answer
pub const FLAGS_AA: u16 = 0x0400;

/// mask for TC(Truncated) bit
pub const FLAGS_TC: u16 = 0x0200;

/// Flag bit for Recursion Desired
pub const FLAGS_RD: u16 = 0x0100;

/// Flag bit for Recursion Available
pub const FLAGS_RA: u16 = 0x0080;

/// mask for the 4-bit RCODE field
pub const FLAGS_RCODE_MASK: u16 = 0x000F;

// Byte offsets of the 16-bit header fields. The high-order byte of
// each field always sits at the lower offset (big-endian).
const ID_OFFSET: usize = 0;
const FLAGS_OFFSET: usize = 2;
const NUM_QUESTIONS_OFFSET: usize = 4;
const NUM_ANSWERS_OFFSET: usize = 6;
const NUM_AUTHORITIES_OFFSET: usize = 8;
const NUM_ADDITIONALS_OFFSET: usize = 10;

const U16_SIZE: usize = 2;

/// Whether a message is a query or a response, from the QR flag bit.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MsgType {
    /// The message carries questions for a name server.
    Query,

    /// The message answers a query.
    Response,
}

impl fmt::Display for MsgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MsgType::Query => write!(f, "QUERY"),
            MsgType::Response => write!(f, "RESPONSE"),
        }
    }
}

/// DNS operation codes, stored as `u8`. Can do `as u8` when needed.
///
/// See [RFC 1035 section 4.1.1](https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.1)
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
#[non_exhaustive]
#[repr(u8)]
pub enum OpCode {
    /// A standard query
    StandardQuery = 0,

    /// An inverse query
    InverseQuery = 1,

    /// A server status request
    ServerStatus = 2,
}

impl OpCode {
    /// Converts `u8` into `OpCode` if possible.
    pub const fn from_u8(value: u8) -> Option<OpCode> {
        match value {
            0 => Some(OpCode::StandardQuery),
            1 => Some(OpCode::InverseQuery),
            2 => Some(OpCode::ServerStatus),
            _ => None,
        }
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpCode::StandardQuery => write!(f, "QUERY"),
            OpCode::InverseQuery => write!(f, "IQUERY"),
            OpCode::ServerStatus => write!(f, "STATUS"),
        }
    }
}

/// DNS response codes, stored as `u8`. Can do `as u8` when needed.
///
/// See [RFC 1035 section 4.1.1](https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.1)
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
#[non_exhaustive]
#[repr(u8)]
pub enum ReturnCode {
    /// No error condition
    NoError = 0,

    /// The domain name referenced in the query does not exist
    NameError = 3,
}

impl ReturnCode {
    /// Converts `u8` into `ReturnCode` if possible.
    pub const fn from_u8(value: u8) -> Option<ReturnCode> {
        match value {
            0 => Some(ReturnCode::NoError),
            3 => Some(ReturnCode::NameError),
            _ => None,
        }
    }
}

impl fmt::Display for ReturnCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnCode::NoError => write!(f, "NOERROR"),
            ReturnCode::NameError => write!(f, "NXDOMAIN"),
        }
    }
}

/// A read-only view of the fixed 12-byte header of a DNS message.
///
/// Construction validates the buffer length once; every accessor then
/// decodes its field on demand from the retained bytes and stays
/// inside offsets 0..12. The view never mutates the buffer, so it is
/// safe to share across threads.
#[derive(Debug, Clone, Copy)]
pub struct DnsHeader<'a> {
    data: &'a [u8],
    origin: Option<SocketAddr>,
}

impl<'a> DnsHeader<'a> {
    /// Creates a view over `data`, which must hold at least the full
    /// 12-byte header.
    ///
    /// Fails with [Error::InvalidInput] for an empty buffer and with
    /// [Error::TooShort] for a buffer below the header length.
    pub fn new(data: &'a [u8]) -> Result<Self> {
        check_header_len(data)?;

        let header = Self { data, origin: None };
        trace!(
            "decode header: id {}, {} questions {} answers {} authorities {} additionals",
            header.id(),
            header.num_questions(),
            header.num_answers(),
            header.num_authorities(),
            header.num_additionals()
        );
        Ok(header)
    }

    /// Creates a view over a datagram received from the network.
    ///
    /// A received packet must be attributable to its sender, hence the
    /// origin address is required here: `None` fails with
    /// [Error::MissingOrigin]. Buffer validation is the same as in
    /// [DnsHeader::new].
    pub fn from_datagram(data: &'a [u8], origin: Option<SocketAddr>) -> Result<Self> {
        check_header_len(data)?;

        match origin {
            Some(addr) => {
                trace!("decode datagram header: id {} from {}", u16_at(data, ID_OFFSET), addr);
                Ok(Self {
                    data,
                    origin: Some(addr),
                })
            }
            None => Err(Error::MissingOrigin),
        }
    }

    /// Returns the transaction id, as set by the originator of a
    /// query. The value is an opaque passthrough.
    pub fn id(&self) -> u16 {
        u16_at(self.data, ID_OFFSET)
    }

    /// The 16-bit flags word at bytes 2 and 3, high byte first.
    fn flags(&self) -> u16 {
        u16_at(self.data, FLAGS_OFFSET)
    }

    /// Returns whether the message is a query or a response.
    pub fn msg_type(&self) -> MsgType {
        if self.is_response() {
            MsgType::Response
        } else {
            MsgType::Query
        }
    }

    pub fn is_query(&self) -> bool {
        (self.flags() & FLAGS_QR_MASK) == FLAGS_QR_QUERY
    }

    pub fn is_response(&self) -> bool {
        (self.flags() & FLAGS_QR_MASK) == FLAGS_QR_RESPONSE
    }

    /// Returns the kind of query this message carries.
    ///
    /// Fails with [Error::UnknownOpcode] if the OPCODE bits hold a
    /// value outside the assigned set, reporting the raw value.
    pub fn opcode(&self) -> Result<OpCode> {
        let value = ((self.flags() & FLAGS_OPCODE_MASK) >> FLAGS_OPCODE_SHIFT) as u8;
        OpCode::from_u8(value).ok_or(Error::UnknownOpcode(value))
    }

    /// Returns whether the responding name server is an authority for
    /// the domain name in question.
    pub fn is_authoritative(&self) -> bool {
        (self.flags() & FLAGS_AA) != 0
    }

    /// Returns whether the message was truncated by the transport.
    pub fn is_truncated(&self) -> bool {
        (self.flags() & FLAGS_TC) != 0
    }

    /// Returns whether the originator asks the name server to pursue
    /// the query recursively.
    pub fn recursion_desired(&self) -> bool {
        (self.flags() & FLAGS_RD) != 0
    }

    /// Returns whether recursive query support is available in the
    /// name server.
    pub fn recursion_available(&self) -> bool {
        (self.flags() & FLAGS_RA) != 0
    }

    /// Returns the response code set by the responding name server.
    ///
    /// Fails with [Error::UnknownReturnCode] if the RCODE bits hold a
    /// value outside the assigned set, reporting the raw value.
    pub fn return_code(&self) -> Result<ReturnCode> {
        let value = (self.flags() & FLAGS_RCODE_MASK) as u8;
        ReturnCode::from_u8(value).ok_or(Error::UnknownReturnCode(value))
    }

    /// Returns the number of entries in the question section.
    pub fn num_questions(&self) -> u16 {
        u16_at(self.data, NUM_QUESTIONS_OFFSET)
    }

    /// Returns the number of resource records in the answer section.
    pub fn num_answers(&self) -> u16 {
        u16_at(self.data, NUM_ANSWERS_OFFSET)
    }

    /// Returns the number of name server records in the authority
    /// section.
    pub fn num_authorities(&self) -> u16 {
        u16_at(self.data, NUM_AUTHORITIES_OFFSET)
    }

    /// Returns the number of resource records in the additional
    /// section.
    pub fn num_additionals(&self) -> u16 {
        u16_at(self.data, NUM_ADDITIONALS_OFFSET)
    }

    /// Returns the address the datagram came from, if one was
    /// attached at construction.
    pub fn origin(&self) -> Option<SocketAddr> {
        self.origin
    }

    /// Returns the whole retained message buffer.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the bytes following the fixed header.
    ///
    /// The question and resource record sections live here. Decoding
    /// them is the job of a record parser layered on top of this view,
    /// guided by the four section counts.
    pub fn body(&self) -> &'a [u8] {
        &self.data[MSG_HEADER_LEN..]
    }
}

fn check_header_len(data: &[u8]) -> Result<()> {
    if data.is_empty() {
        return Err(Error::InvalidInput);
    }
    if data.len() < MSG_HEADER_LEN {
        return Err(Error::TooShort(data.len()));
    }
    Ok(())
}

/// Reads the big-endian `u16` at `offset`. The caller guarantees the
/// bounds via the construction-time length check.
const fn u16_at(data: &[u8], offset: usize) -> u16 {
    let u8_array: [u8; U16_SIZE] = [data[offset], data[offset + 1]];
    u16::from_be_bytes(u8_array)
}
