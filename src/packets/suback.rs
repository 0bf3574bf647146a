use std::io::Cursor;

use bytes::Buf;
use log::debug;

use crate::codec::{decode_u16, decode_u8};
use crate::error::PacketError;
use crate::fixed_header::FixedHeader;
use crate::packet_type::PacketType;

use super::{DecodablePacket, QoS};

/// Value the 0x80 failure sentinel in a SUBACK payload maps to.
const FAILURE_RETURN_CODE: u8 = 0x80;

/// Outcome of one requested subscription inside a SUBACK.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubAckReturnCode {
    /// The subscription was granted at the given `QoS`, which may be lower
    /// than the level requested.
    Success(QoS),

    /// The server refused the subscription (the 0x80 sentinel). Distinct
    /// from every granted `QoS` level; callers must branch on it.
    Failure,
}

impl SubAckReturnCode {
    /// Converts a payload byte to a `SubAckReturnCode`.
    ///
    /// Returns `None` for the reserved values 3..=0x7F and 0x81..=0xFF.
    pub fn from_u8(value: u8) -> Option<Self> {
        if value == FAILURE_RETURN_CODE {
            return Some(Self::Failure);
        }

        QoS::from_u8(value).map(Self::Success)
    }

    /// Whether the server refused the subscription.
    pub fn is_failure(self) -> bool {
        matches!(self, Self::Failure)
    }
}

/// The SUBACK packet is sent by the server in response to a SUBSCRIBE,
/// carrying one return code per requested topic filter in request order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubAckPacket {
    /// Packet identifier of the SUBSCRIBE being acknowledged.
    pub packet_id: u16,

    /// One entry per requested topic filter, in the order requested.
    pub return_codes: Vec<SubAckReturnCode>,
}

impl DecodablePacket for SubAckPacket {
    fn decode(packet: &[u8]) -> Result<Self, PacketError> {
        let mut cursor = Cursor::new(packet);

        let fixed_header = FixedHeader::decode(&mut cursor)?;
        if fixed_header.packet_type != PacketType::SubAck {
            return Err(PacketError::MalformedPacket("expected a SUBACK packet"));
        }

        // Packet id plus at least one return code
        if fixed_header.remaining_length < 3 {
            return Err(PacketError::MalformedPacket("SUBACK must carry at least one return code"));
        }
        if cursor.remaining() < fixed_header.remaining_length {
            return Err(PacketError::Truncated("SUBACK payload"));
        }

        let packet_id = decode_u16(&mut cursor)?;
        debug!("SUBACK packet_id: {packet_id}");

        let count = fixed_header.remaining_length - 2;
        let mut return_codes = Vec::with_capacity(count);
        for _ in 0..count {
            let code = decode_u8(&mut cursor)?;
            let code = SubAckReturnCode::from_u8(code)
                .ok_or(PacketError::MalformedPacket("reserved SUBACK return code"))?;
            return_codes.push(code);
        }

        Ok(Self { packet_id, return_codes })
    }
}
