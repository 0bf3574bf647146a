use std::io::Cursor;

use bytes::{Buf, Bytes};

use crate::codec::decode_u16;
use crate::error::PacketError;
use crate::fixed_header::FixedHeader;
use crate::packet_type::PacketType;

use super::{assemble, DecodablePacket, EncodablePacket};

/// One of the four publish acknowledgment packets: PUBACK (`QoS` 1) or the
/// PUBREC / PUBREL / PUBCOMP steps of the `QoS` 2 handshake.
///
/// All four share the same wire shape: a fixed header plus a 2-byte packet
/// identifier. The DUP flag is reported uniformly for all four even though
/// the protocol only gives it redelivery semantics for the `QoS` 2 steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AckPacket {
    /// Which of the four acknowledgments this is.
    pub packet_type: PacketType,

    /// Redelivery flag, read from bit 3 of the fixed-header flags.
    pub dup: bool,

    /// Packet identifier of the PUBLISH being acknowledged.
    pub packet_id: u16,
}

impl AckPacket {
    /// Whether a packet type belongs to the publish acknowledgment family.
    pub fn is_ack_type(packet_type: PacketType) -> bool {
        matches!(
            packet_type,
            PacketType::PubAck | PacketType::PubRec | PacketType::PubRel | PacketType::PubComp
        )
    }
}

impl EncodablePacket for AckPacket {
    fn encode(&self) -> Result<Bytes, PacketError> {
        if !Self::is_ack_type(self.packet_type) {
            return Err(PacketError::MalformedPacket("not a publish acknowledgment packet type"));
        }

        let flags = u8::from(self.dup) << 3 | self.packet_type.reserved_flags();
        let payload = self.packet_id.to_be_bytes();

        assemble(self.packet_type, flags, &payload)
    }
}

impl DecodablePacket for AckPacket {
    fn decode(packet: &[u8]) -> Result<Self, PacketError> {
        let mut cursor = Cursor::new(packet);

        let fixed_header = FixedHeader::decode(&mut cursor)?;
        if !Self::is_ack_type(fixed_header.packet_type) {
            return Err(PacketError::MalformedPacket("not a publish acknowledgment packet type"));
        }

        if fixed_header.remaining_length != 2 {
            return Err(PacketError::MalformedPacket("acknowledgment payload must be 2 bytes"));
        }
        if cursor.remaining() < 2 {
            return Err(PacketError::Truncated("acknowledgment packet id"));
        }

        let dup = fixed_header.flags >> 3 & 1 == 1;
        let packet_id = decode_u16(&mut cursor)?;

        Ok(Self { packet_type: fixed_header.packet_type, dup, packet_id })
    }
}
