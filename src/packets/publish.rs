use std::io::Cursor;

use bytes::{Buf, Bytes};
use log::debug;

use crate::codec::{decode_u16, decode_utf8_string, encode_utf8_string};
use crate::error::PacketError;
use crate::fixed_header::FixedHeader;
use crate::packet_type::PacketType;

use super::{assemble, DecodablePacket, EncodablePacket, QoS};

/// Delivery options for a PUBLISH packet. Every field defaults to
/// zero/false, matching a caller that supplies no options at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishOptions {
    /// Delivery guarantee level.
    pub qos: QoS,

    /// Whether the server keeps the message for future subscribers.
    pub retained: bool,

    /// Whether this is a redelivery of an earlier attempt.
    pub dup: bool,

    /// Correlates the message with its acknowledgment. Required and non-zero
    /// when `qos` is above [`QoS::AtMostOnce`]; ignored otherwise.
    pub packet_id: u16,
}

/// An MQTT PUBLISH packet.
///
/// The payload is raw bytes appended without a length prefix; its length is
/// implied by the Remaining Length minus the variable header size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishPacket {
    /// Topic the message is published to.
    pub topic: String,

    /// Application message body.
    pub payload: Bytes,

    /// Delivery options.
    pub options: PublishOptions,
}

impl EncodablePacket for PublishPacket {
    fn encode(&self) -> Result<Bytes, PacketError> {
        // Fixed-header flags, bits 3..0: DUP, QoS (2 bits), RETAIN
        let flags = u8::from(self.options.dup) << 3
            | self.options.qos.to_u8() << 1
            | u8::from(self.options.retained);

        let mut payload = encode_utf8_string(&self.topic)?;

        // The packet identifier is only present above QoS 0
        if self.options.qos != QoS::AtMostOnce {
            if self.options.packet_id == 0 {
                return Err(PacketError::MissingField("packet_id"));
            }
            payload.extend(self.options.packet_id.to_be_bytes());
        }

        payload.extend_from_slice(&self.payload);

        assemble(PacketType::Publish, flags, &payload)
    }
}

impl DecodablePacket for PublishPacket {
    fn decode(packet: &[u8]) -> Result<Self, PacketError> {
        let mut cursor = Cursor::new(packet);

        let fixed_header = FixedHeader::decode(&mut cursor)?;
        if fixed_header.packet_type != PacketType::Publish {
            return Err(PacketError::MalformedPacket("expected a PUBLISH packet"));
        }
        if cursor.remaining() < fixed_header.remaining_length {
            return Err(PacketError::Truncated("PUBLISH variable header and payload"));
        }

        let dup = fixed_header.flags >> 3 & 1 == 1;
        let retained = fixed_header.flags & 1 == 1;
        let qos = QoS::from_u8(fixed_header.flags >> 1 & 0b0000_0011)
            .ok_or(PacketError::MalformedPacket("reserved QoS value 3"))?;

        let start = cursor.position();
        let topic = decode_utf8_string(&mut cursor)?;

        let packet_id = if qos == QoS::AtMostOnce { 0 } else { decode_u16(&mut cursor)? };
        debug!("PUBLISH packet_id: {packet_id}");

        // The payload carries no length prefix: it spans whatever the
        // Remaining Length declares beyond the variable header
        let consumed = (cursor.position() - start) as usize;
        let payload_len = fixed_header
            .remaining_length
            .checked_sub(consumed)
            .ok_or(PacketError::MalformedPacket("remaining length shorter than variable header"))?;

        let mut payload = vec![0; payload_len];
        cursor.copy_to_slice(&mut payload);

        Ok(Self {
            topic,
            payload: Bytes::from(payload),
            options: PublishOptions { qos, retained, dup, packet_id },
        })
    }
}
