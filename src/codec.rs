//! Primitive encoders and decoders shared by every packet type.
//!
//! Decoding works over a `Cursor<&[u8]>` and never reads past the end of the
//! supplied buffer: every length declared inside the packet is checked
//! against the remaining input before it is used.

use std::io::Cursor;

use bytes::{Buf, Bytes};

use crate::constants::{MAX_REMAINING_LENGTH, MAX_STRING_LENGTH};
use crate::error::PacketError;

/// Encode a variable byte integer (the Remaining Length field).
///
/// Reference: <https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html>, section 2.2.3.
///
/// **Specification:**
///
/// ```text
/// do
///    encodedByte = X MOD 128
///    X = X DIV 128
///    // if there are more data to encode, set the top bit of this byte
///    if (X > 0)
///       encodedByte = encodedByte OR 128
///    endif
///    'output' encodedByte
/// while (X > 0)
/// ```
///
/// The least significant group of 7 bits is emitted first, so the encoding is
/// always minimal in length (1 to 4 bytes).
///
/// # Errors
/// - Returns `PacketError::OutOfRange` if the value exceeds 268,435,455.
pub fn encode_variable_byte_int(mut value: usize) -> Result<Vec<u8>, PacketError> {
    if value > MAX_REMAINING_LENGTH {
        return Err(PacketError::OutOfRange {
            value: value as u64,
            max: MAX_REMAINING_LENGTH as u64,
        });
    }

    let capacity = match value {
        0..=127 => 1,
        128..=16_383 => 2,
        16_384..=2_097_151 => 3,
        _ => 4,
    };
    let mut encoded_value = Vec::with_capacity(capacity);

    for _ in 0..capacity {
        // Extract the 7 least significant bits from the current value
        let mut encoded_byte = (value % 128) as u8;

        // Divide the value by 128 to remove the 7 bits just processed
        value /= 128;

        // If there are still remaining bits, mark this byte as continuation
        if value > 0 {
            encoded_byte |= 128;
        }

        encoded_value.push(encoded_byte);
    }

    Ok(encoded_value)
}

/// Decode a variable byte integer (the Remaining Length field).
///
/// Reference: <https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html>, section 2.2.3.
///
/// **Specification:**
///
/// ```text
/// multiplier = 1
/// value = 0
/// do
///    encodedByte = 'next byte from stream'
///    value += (encodedByte AND 127) * multiplier
///    if (multiplier > 128*128*128)
///       throw Error(Malformed Variable Byte Integer)
///    multiplier *= 128
/// while ((encodedByte AND 128) != 0)
/// ```
///
/// # Errors
/// - Returns `PacketError::MalformedHeader` if a fifth continuation byte
///   appears or if the input ends while the continuation bit is still set.
pub fn decode_variable_byte_int(cursor: &mut Cursor<&[u8]>) -> Result<usize, PacketError> {
    let mut multiplier: usize = 1;
    let mut decoded_value: usize = 0;

    loop {
        if !cursor.has_remaining() {
            return Err(PacketError::MalformedHeader("remaining length ends mid-sequence"));
        }
        let encoded_byte = cursor.get_u8();

        // Take the 7 least significant bits
        let value = (encoded_byte & 127) as usize;

        // Multiply by current multiplier and add to decoded value
        decoded_value += value * multiplier;

        // Ensure multiplier does not exceed the specification limits
        if multiplier > 128 * 128 * 128 {
            return Err(PacketError::MalformedHeader("remaining length exceeds four bytes"));
        }

        multiplier *= 128;

        // If the continuation bit is not set, we are done
        if encoded_byte & 128 == 0 {
            break;
        }
    }

    Ok(decoded_value)
}

/// Encode a UTF-8 string with its 16-bit big-endian length prefix.
///
/// Reference: <https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html>, section 1.5.3.
///
/// # Errors
/// - Returns `PacketError::StringTooLong` if the byte length exceeds 65,535.
pub fn encode_utf8_string(value: &str) -> Result<Vec<u8>, PacketError> {
    let len = value.len();
    let Ok(casted_len) = u16::try_from(len) else {
        return Err(PacketError::StringTooLong(len));
    };

    // 2 bytes for the length field plus the UTF-8 bytes of the string
    let mut encoded_value = Vec::with_capacity(2 + len);
    encoded_value.extend(casted_len.to_be_bytes());
    encoded_value.extend(value.as_bytes());

    Ok(encoded_value)
}

/// Encode binary data with its 16-bit big-endian length prefix.
///
/// Same wire shape as a UTF-8 string, minus the character set requirement.
/// Used for the CONNECT password and will message fields.
///
/// # Errors
/// - Returns `PacketError::StringTooLong` if the byte length exceeds 65,535.
pub fn encode_binary_data(value: &[u8]) -> Result<Vec<u8>, PacketError> {
    let len = value.len();
    if len > MAX_STRING_LENGTH {
        return Err(PacketError::StringTooLong(len));
    }

    let mut encoded_value = Vec::with_capacity(2 + len);
    encoded_value.extend((len as u16).to_be_bytes());
    encoded_value.extend(value);

    Ok(encoded_value)
}

/// Decode a UTF-8 string.
///
/// # Errors
/// - Returns `PacketError::Truncated` if fewer bytes remain than the declared
///   length, and `PacketError::MalformedPacket` if the bytes are not valid
///   UTF-8.
pub fn decode_utf8_string(cursor: &mut Cursor<&[u8]>) -> Result<String, PacketError> {
    let len = decode_u16(cursor).map_err(|_| PacketError::Truncated("string length"))? as usize;

    if cursor.remaining() < len {
        return Err(PacketError::Truncated("utf-8 string"));
    }

    let mut encoded_value = vec![0; len];
    cursor.copy_to_slice(&mut encoded_value);

    String::from_utf8(encoded_value)
        .map_err(|_| PacketError::MalformedPacket("string is not valid UTF-8"))
}

/// Decode length-prefixed binary data.
///
/// # Errors
/// - Returns `PacketError::Truncated` if fewer bytes remain than the declared
///   length.
pub fn decode_binary_data(cursor: &mut Cursor<&[u8]>) -> Result<Bytes, PacketError> {
    let len = decode_u16(cursor).map_err(|_| PacketError::Truncated("binary data length"))? as usize;

    if cursor.remaining() < len {
        return Err(PacketError::Truncated("binary data"));
    }

    let mut decoded_value = vec![0; len];
    cursor.copy_to_slice(&mut decoded_value);

    Ok(Bytes::from(decoded_value))
}

/// Decode a 1-byte unsigned integer.
pub fn decode_u8(cursor: &mut Cursor<&[u8]>) -> Result<u8, PacketError> {
    if !cursor.has_remaining() {
        return Err(PacketError::Truncated("u8"));
    }

    Ok(cursor.get_u8())
}

/// Decode a 2-byte big-endian unsigned integer.
pub fn decode_u16(cursor: &mut Cursor<&[u8]>) -> Result<u16, PacketError> {
    if cursor.remaining() < 2 {
        return Err(PacketError::Truncated("u16"));
    }

    Ok(cursor.get_u16())
}
