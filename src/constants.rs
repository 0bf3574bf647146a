/// Protocol name.
pub const PROTOCOL_NAME: &str = "MQTT";

/// Protocol level. Revision 3.1.1 of the protocol is identified by the value 4.
pub const PROTOCOL_LEVEL: u8 = 4;

/// Maximum value the Remaining Length field can carry (2^28 - 1).
pub const MAX_REMAINING_LENGTH: usize = 268_435_455;

/// Maximum allowed length for a UTF-8 encoded string or a length-prefixed
/// binary field.
pub const MAX_STRING_LENGTH: usize = 65_535;
