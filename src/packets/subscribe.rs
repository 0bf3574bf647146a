use bytes::Bytes;

use crate::codec::encode_utf8_string;
use crate::error::PacketError;
use crate::packet_type::PacketType;

use super::{assemble, EncodablePacket, QoS};

/// An MQTT SUBSCRIBE packet: a packet identifier followed by an ordered list
/// of topic filters with their requested `QoS` levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscribePacket {
    /// Correlates this request with the SUBACK answering it.
    pub packet_id: u16,

    /// Topic filters to subscribe to, each with the maximum `QoS` the client
    /// is willing to receive messages at. Must not be empty.
    pub topics: Vec<(String, QoS)>,
}

impl EncodablePacket for SubscribePacket {
    fn encode(&self) -> Result<Bytes, PacketError> {
        // A SUBSCRIBE packet with no payload is a protocol violation
        if self.topics.is_empty() {
            return Err(PacketError::MissingField("topics"));
        }

        let mut payload = Vec::new();
        payload.extend(self.packet_id.to_be_bytes());

        for (topic, qos) in &self.topics {
            payload.extend(encode_utf8_string(topic)?);
            payload.push(qos.to_u8());
        }

        assemble(PacketType::Subscribe, PacketType::Subscribe.reserved_flags(), &payload)
    }
}
