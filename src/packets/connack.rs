use std::fmt;
use std::io::Cursor;

use crate::codec::decode_u8;
use crate::error::PacketError;
use crate::fixed_header::FixedHeader;
use crate::packet_type::PacketType;

use super::DecodablePacket;

/// The return codes a server can answer a connection request with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectReturnCode {
    /// Connection accepted.
    Accepted = 0x00,

    /// The server does not support the level of the MQTT protocol requested
    /// by the client.
    UnacceptableProtocolVersion = 0x01,

    /// The client identifier is correct UTF-8 but not allowed by the server.
    IdentifierRejected = 0x02,

    /// The network connection has been made but the MQTT service is
    /// unavailable.
    ServerUnavailable = 0x03,

    /// The data in the user name or password is malformed.
    BadUserNameOrPassword = 0x04,

    /// The client is not authorized to connect.
    NotAuthorized = 0x05,
}

impl ConnectReturnCode {
    /// Converts a numeric value to a `ConnectReturnCode`.
    ///
    /// Returns `None` for the values 6 through 255, which are reserved.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(Self::Accepted),
            0x01 => Some(Self::UnacceptableProtocolVersion),
            0x02 => Some(Self::IdentifierRejected),
            0x03 => Some(Self::ServerUnavailable),
            0x04 => Some(Self::BadUserNameOrPassword),
            0x05 => Some(Self::NotAuthorized),
            _ => None,
        }
    }

    /// Converts the `ConnectReturnCode` to its numeric value.
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Whether the server accepted the connection.
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl fmt::Display for ConnectReturnCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::Accepted => "Connection accepted",
            Self::UnacceptableProtocolVersion => "Unacceptable protocol version",
            Self::IdentifierRejected => "Identifier rejected",
            Self::ServerUnavailable => "Server unavailable",
            Self::BadUserNameOrPassword => "Bad user name or password",
            Self::NotAuthorized => "Not authorized",
        };

        write!(f, "{value}")
    }
}

/// The CONNACK packet is sent by the server in response to a CONNECT packet
/// received from a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnAckPacket {
    /// Whether the server is resuming stored session state for this client.
    /// A server sending a non-zero return code always reports `false`.
    pub session_present: bool,

    /// Outcome of the connection request.
    pub return_code: ConnectReturnCode,
}

impl DecodablePacket for ConnAckPacket {
    fn decode(packet: &[u8]) -> Result<Self, PacketError> {
        let mut cursor = Cursor::new(packet);

        let fixed_header = FixedHeader::decode(&mut cursor)?;
        if fixed_header.packet_type != PacketType::ConnAck {
            return Err(PacketError::MalformedPacket("expected a CONNACK packet"));
        }

        // The CONNACK variable header is exactly 2 bytes: acknowledge flags
        // and return code. There is no payload.
        if fixed_header.remaining_length != 2 {
            return Err(PacketError::MalformedPacket("CONNACK variable header must be 2 bytes"));
        }

        let acknowledge_flags =
            decode_u8(&mut cursor).map_err(|_| PacketError::Truncated("CONNACK flags"))?;
        let session_present = acknowledge_flags & 1 == 1;

        let return_code =
            decode_u8(&mut cursor).map_err(|_| PacketError::Truncated("CONNACK return code"))?;
        let return_code = ConnectReturnCode::from_u8(return_code)
            .ok_or(PacketError::MalformedPacket("reserved CONNACK return code"))?;

        Ok(Self { session_present, return_code })
    }
}
