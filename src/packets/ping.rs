use std::io::Cursor;

use bytes::Bytes;

use crate::error::PacketError;
use crate::fixed_header::FixedHeader;
use crate::packet_type::PacketType;

use super::{assemble, DecodablePacket, EncodablePacket};

/// The PINGREQ packet is sent by a client to keep the connection alive and
/// to probe that the server is still responding. Fixed header only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PingReqPacket;

impl EncodablePacket for PingReqPacket {
    fn encode(&self) -> Result<Bytes, PacketError> {
        assemble(PacketType::PingReq, PacketType::PingReq.reserved_flags(), &[])
    }
}

/// The PINGRESP packet is the server's answer to a PINGREQ. Fixed header
/// only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PingRespPacket;

impl DecodablePacket for PingRespPacket {
    fn decode(packet: &[u8]) -> Result<Self, PacketError> {
        let mut cursor = Cursor::new(packet);

        let fixed_header = FixedHeader::decode(&mut cursor)?;
        if fixed_header.packet_type != PacketType::PingResp {
            return Err(PacketError::MalformedPacket("expected a PINGRESP packet"));
        }
        if fixed_header.remaining_length != 0 {
            return Err(PacketError::MalformedPacket("PINGRESP carries no payload"));
        }

        Ok(Self)
    }
}
