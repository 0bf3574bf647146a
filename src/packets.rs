use bytes::{Bytes, BytesMut};
use log::debug;

use crate::error::PacketError;
use crate::fixed_header::FixedHeader;
use crate::packet_type::PacketType;

pub(crate) mod ack;
pub(crate) mod connack;
pub(crate) mod connect;
pub(crate) mod disconnect;
pub(crate) mod ping;
pub(crate) mod publish;
pub(crate) mod suback;
pub(crate) mod subscribe;
pub(crate) mod unsubscribe;

/// An outbound packet that can be serialized to its exact wire form.
pub trait EncodablePacket {
    /// Encode the packet into a freshly allocated buffer sized exactly to
    /// the encoded length. The buffer is ready to transmit verbatim; the
    /// transport must not add or remove framing.
    fn encode(&self) -> Result<Bytes, PacketError>;
}

/// An inbound packet that can be parsed from its wire form.
pub trait DecodablePacket: Sized {
    /// Decode one complete packet, fixed header included. The caller is
    /// responsible for delimiting exactly one packet's bytes using the
    /// Remaining Length field read during framing.
    fn decode(packet: &[u8]) -> Result<Self, PacketError>;
}

/// Quality of Service level for message delivery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QoS {
    /// At most once delivery.
    #[default]
    AtMostOnce = 0,

    /// At least once delivery.
    AtLeastOnce = 1,

    /// Exactly once delivery.
    ExactlyOnce = 2,
}

impl QoS {
    /// Converts a numeric value to a `QoS`.
    ///
    /// Returns `None` for the reserved value 3 and everything above it.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::AtMostOnce),
            1 => Some(Self::AtLeastOnce),
            2 => Some(Self::ExactlyOnce),
            _ => None,
        }
    }

    /// Converts the `QoS` to its numeric value.
    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

/// Assemble a full packet from its type, flag bits and variable payload.
///
/// The payload is computed by the caller first, so the Remaining Length is
/// known exactly and the output buffer is allocated once at its final size.
pub(crate) fn assemble(
    packet_type: PacketType,
    flags: u8,
    payload: &[u8],
) -> Result<Bytes, PacketError> {
    let fixed_header = FixedHeader::new(packet_type, flags, payload.len()).encode()?;
    debug!("{packet_type} remaining_len: {}", payload.len());

    let mut packet = BytesMut::with_capacity(fixed_header.len() + payload.len());
    packet.extend_from_slice(&fixed_header);
    packet.extend_from_slice(payload);

    Ok(packet.freeze())
}
