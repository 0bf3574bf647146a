use bytes::Bytes;

use crate::error::PacketError;
use crate::packet_type::PacketType;

use super::{assemble, EncodablePacket};

/// The DISCONNECT packet is the final packet a client sends before closing
/// the network connection. Fixed header only; a clean disconnect suppresses
/// the will message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisconnectPacket;

impl EncodablePacket for DisconnectPacket {
    fn encode(&self) -> Result<Bytes, PacketError> {
        assemble(PacketType::Disconnect, PacketType::Disconnect.reserved_flags(), &[])
    }
}
