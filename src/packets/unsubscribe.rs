use bytes::Bytes;

use crate::codec::encode_utf8_string;
use crate::error::PacketError;
use crate::packet_type::PacketType;

use super::{assemble, EncodablePacket};

/// An MQTT UNSUBSCRIBE packet: a packet identifier followed by the topic
/// filters to drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsubscribePacket {
    /// Correlates this request with the UNSUBACK answering it.
    pub packet_id: u16,

    /// Topic filters to unsubscribe from. Must not be empty.
    pub topics: Vec<String>,
}

impl EncodablePacket for UnsubscribePacket {
    fn encode(&self) -> Result<Bytes, PacketError> {
        if self.topics.is_empty() {
            return Err(PacketError::MissingField("topics"));
        }

        let mut payload = Vec::new();
        payload.extend(self.packet_id.to_be_bytes());

        for topic in &self.topics {
            payload.extend(encode_utf8_string(topic)?);
        }

        assemble(PacketType::Unsubscribe, PacketType::Unsubscribe.reserved_flags(), &payload)
    }
}
