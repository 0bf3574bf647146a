use thiserror::Error;

/// Errors reported by the codec.
///
/// Every error is detected synchronously at the point of violation and
/// returned to the immediate caller. Nothing is retried internally; retry
/// policy belongs to the transport layer driving this codec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PacketError {
    /// A numeric value does not fit the wire-format field that carries it.
    #[error("value {value} exceeds the maximum of {max} for this field")]
    OutOfRange { value: u64, max: u64 },

    /// A string or binary field is longer than its 16-bit length prefix can
    /// describe.
    #[error("field of {0} bytes exceeds the maximum of 65,535")]
    StringTooLong(usize),

    /// A mandatory field is absent from the caller-supplied options.
    #[error("required field `{0}` is missing")]
    MissingField(&'static str),

    /// The fixed header or the Remaining Length encoding violates the
    /// continuation-byte rules.
    #[error("malformed fixed header: {0}")]
    MalformedHeader(&'static str),

    /// Fewer bytes remain in the input than a declared field requires.
    #[error("packet truncated while reading {0}")]
    Truncated(&'static str),

    /// The fixed-header packet type is outside the recognized 1..=14 range.
    #[error("unknown packet type {0:#04x}")]
    UnknownPacketType(u8),

    /// The payload shape does not match the expected type-specific layout.
    #[error("malformed packet: {0}")]
    MalformedPacket(&'static str),
}
