use bytes::Bytes;

use crate::codec::{encode_binary_data, encode_utf8_string};
use crate::constants::{PROTOCOL_LEVEL, PROTOCOL_NAME};
use crate::error::PacketError;
use crate::packet_type::PacketType;

use super::{assemble, EncodablePacket, QoS};

/// The will message the server publishes on the client's behalf if the
/// connection terminates unexpectedly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WillOptions {
    /// Topic the will message is published to.
    pub topic: String,

    /// Will message body, carried length-prefixed in the CONNECT payload.
    pub message: Bytes,

    /// Whether the will message is retained when published.
    pub retained: bool,

    /// `QoS` level used when publishing the will message.
    pub qos: QoS,
}

/// An MQTT CONNECT packet, the first packet a client sends after opening a
/// network connection.
///
/// Username and password are part of this codec's option contract: a caller
/// must supply them explicitly, using empty values to signal their absence on
/// the wire. `None` for either fails with [`PacketError::MissingField`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectPacket {
    /// The Client Identifier identifies the client to the server.
    pub client_id: String,

    /// Credential used by the server for authentication and authorization.
    /// Empty clears the username connect flag and omits the field.
    pub username: Option<String>,

    /// Although this field is called password, it can carry any credential
    /// bytes. Empty clears the password connect flag and omits the field.
    pub password: Option<Bytes>,

    /// Maximum interval in seconds permitted between two control packets
    /// sent by the client.
    pub keep_alive: u16,

    /// Whether the connection starts a fresh session rather than resuming
    /// stored session state.
    pub clean_session: bool,

    /// Optional will message; `Some` sets the will flag and appends the will
    /// topic and message to the payload.
    pub will: Option<WillOptions>,
}

impl ConnectPacket {
    /// Pack the connect flags byte.
    ///
    /// Bit layout (MSB to LSB): username, password, will retain,
    /// will `QoS` (2 bits), will flag, clean session, reserved (0).
    fn connect_flags(&self, username: &str, password: &[u8]) -> u8 {
        let mut flags = 0;

        if self.clean_session {
            flags |= 1 << 1;
        }

        if let Some(will) = &self.will {
            flags |= 1 << 2;
            flags |= will.qos.to_u8() << 3;
            if will.retained {
                flags |= 1 << 5;
            }
        }

        if !password.is_empty() {
            flags |= 1 << 6;
        }

        if !username.is_empty() {
            flags |= 1 << 7;
        }

        flags
    }
}

impl EncodablePacket for ConnectPacket {
    fn encode(&self) -> Result<Bytes, PacketError> {
        let username = self.username.as_deref().ok_or(PacketError::MissingField("username"))?;
        let password = self.password.as_deref().ok_or(PacketError::MissingField("password"))?;

        // Variable header: protocol name, protocol level, connect flags,
        // keep alive
        let mut payload = encode_utf8_string(PROTOCOL_NAME)?;
        payload.push(PROTOCOL_LEVEL);
        payload.push(self.connect_flags(username, password));
        payload.extend(self.keep_alive.to_be_bytes());

        // Payload: client id, then will topic and message if the will flag
        // is set, then username and password if present
        payload.extend(encode_utf8_string(&self.client_id)?);

        if let Some(will) = &self.will {
            payload.extend(encode_utf8_string(&will.topic)?);
            payload.extend(encode_binary_data(&will.message)?);
        }

        if !username.is_empty() {
            payload.extend(encode_utf8_string(username)?);
        }

        if !password.is_empty() {
            payload.extend(encode_binary_data(password)?);
        }

        assemble(PacketType::Connect, PacketType::Connect.reserved_flags(), &payload)
    }
}
