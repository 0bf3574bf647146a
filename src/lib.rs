//! Codec for the MQTT v3.1.1 control-packet wire format.
//!
//! Turns structured packet values into exact byte sequences for
//! transmission and parses received byte sequences back into structured
//! values, detecting malformed or truncated input. The codec is purely
//! functional and stateless: every call reads an immutable input and
//! produces a freshly allocated output, so it is safe to use from any
//! number of threads without locking.
//!
//! Transport concerns are out of scope. The caller owns the socket, splits
//! the inbound stream into one packet per [`packets::DecodablePacket::decode`]
//! call using the Remaining Length field, and transmits the buffers returned
//! by [`packets::EncodablePacket::encode`] verbatim.
//!
//! ```
//! use mqtt_codec::{EncodablePacket, PingReqPacket};
//!
//! let bytes = PingReqPacket.encode().unwrap();
//! assert_eq!(&bytes[..], &[0xC0, 0x00]);
//! ```

pub mod codec;
pub mod constants;
pub mod error;
pub mod fixed_header;
pub mod packet_type;
pub mod packets;

pub use error::PacketError;
pub use fixed_header::FixedHeader;
pub use packet_type::PacketType;

pub use packets::ack::AckPacket;
pub use packets::connack::{ConnAckPacket, ConnectReturnCode};
pub use packets::connect::{ConnectPacket, WillOptions};
pub use packets::disconnect::DisconnectPacket;
pub use packets::ping::{PingReqPacket, PingRespPacket};
pub use packets::publish::{PublishOptions, PublishPacket};
pub use packets::suback::{SubAckPacket, SubAckReturnCode};
pub use packets::subscribe::SubscribePacket;
pub use packets::unsubscribe::UnsubscribePacket;
pub use packets::{DecodablePacket, EncodablePacket, QoS};
