use std::io::Cursor;

use crate::codec::{decode_u8, decode_variable_byte_int, encode_variable_byte_int};
use crate::error::PacketError;
use crate::packet_type::PacketType;

/// The fixed header common to every MQTT control packet.
///
/// # Fixed Header Format
///
/// | Bit       | 7   | 6   | 5   | 4   | 3   | 2   | 1   | 0   |
/// |-----------|-----|-----|-----|-----|-----|-----|-----|-----|
/// | Byte 1    | Packet type           | Packet flags          |
/// | Byte 2+   | Remaining Length                              |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedHeader {
    /// The control packet type, held in the 4 MSB of the control byte.
    pub packet_type: PacketType,

    /// The 4 LSB of the control byte. Their meaning is packet-type specific:
    /// DUP/`QoS`/RETAIN for PUBLISH, reserved values for everything else.
    pub flags: u8,

    /// Number of bytes in the variable header and payload that follow.
    pub remaining_length: usize,
}

impl FixedHeader {
    pub fn new(packet_type: PacketType, flags: u8, remaining_length: usize) -> Self {
        Self { packet_type, flags, remaining_length }
    }

    /// Encode the fixed header: one control byte followed by the Remaining
    /// Length as a variable byte integer.
    ///
    /// # Errors
    /// - Returns `PacketError::OutOfRange` if the remaining length exceeds
    ///   the 2^28 - 1 protocol maximum.
    pub fn encode(&self) -> Result<Vec<u8>, PacketError> {
        let encoded_remaining_len = encode_variable_byte_int(self.remaining_length)?;

        let mut header = Vec::with_capacity(1 + encoded_remaining_len.len());
        header.push(self.packet_type.to_u8() << 4 | (self.flags & 0x0F));
        header.extend(encoded_remaining_len);

        Ok(header)
    }

    /// Decode the fixed header from the start of a received packet.
    ///
    /// # Errors
    /// - Returns `PacketError::UnknownPacketType` if the 4-bit type is
    ///   outside the range understood by this codec.
    /// - Returns `PacketError::MalformedHeader` if the control byte is
    ///   missing or the Remaining Length encoding is invalid.
    pub fn decode(cursor: &mut Cursor<&[u8]>) -> Result<Self, PacketError> {
        let control_byte =
            decode_u8(cursor).map_err(|_| PacketError::MalformedHeader("missing control byte"))?;

        let packet_type = PacketType::from_u8(control_byte >> 4)
            .ok_or(PacketError::UnknownPacketType(control_byte >> 4))?;
        let flags = control_byte & 0x0F;

        let remaining_length = decode_variable_byte_int(cursor)?;

        Ok(Self { packet_type, flags, remaining_length })
    }
}
