//! Byte-exact checks of the v3.1.1 wire format against reference sequences.

use bytes::Bytes;
use mqtt_codec::codec::encode_variable_byte_int;
use mqtt_codec::packets::{DecodablePacket, EncodablePacket, QoS};
use mqtt_codec::{
    AckPacket, ConnAckPacket, ConnectPacket, ConnectReturnCode, DisconnectPacket, PacketError,
    PacketType, PingReqPacket, PingRespPacket, PublishOptions, PublishPacket, SubAckPacket,
    SubAckReturnCode, SubscribePacket, UnsubscribePacket, WillOptions,
};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn connect_options() -> ConnectPacket {
    ConnectPacket {
        client_id: "dev1".to_string(),
        username: Some(String::new()),
        password: Some(Bytes::new()),
        keep_alive: 60,
        clean_session: true,
        will: None,
    }
}

#[test]
fn remaining_length_boundary_widths() {
    let widths = [
        (0, 1),
        (127, 1),
        (128, 2),
        (16_383, 2),
        (16_384, 3),
        (2_097_151, 3),
        (2_097_152, 4),
        (268_435_455, 4),
    ];

    for (value, width) in widths {
        assert_eq!(encode_variable_byte_int(value).unwrap().len(), width, "value {value}");
    }

    assert!(matches!(
        encode_variable_byte_int(268_435_456),
        Err(PacketError::OutOfRange { .. })
    ));
}

#[test]
fn connect_produces_the_reference_bytes() {
    init_logs();

    let encoded = connect_options().encode().unwrap();

    // 0x10 control byte, 16-byte remaining length, "MQTT", level 4,
    // connect flags with only clean session set, keep alive 60, "dev1"
    let expected = hex::decode("101000044d5154540402003c000464657631").unwrap();
    assert_eq!(&encoded[..], &expected[..]);
}

#[test]
fn connect_clears_credential_flags_for_empty_credentials() {
    let encoded = connect_options().encode().unwrap();

    // Connect flags byte: username (bit 7) and password (bit 6) clear,
    // clean session (bit 1) set
    assert_eq!(encoded[9], 0b0000_0010);
}

#[test]
fn connect_requires_explicit_username_and_password() {
    let mut options = connect_options();
    options.username = None;
    assert_eq!(options.encode().unwrap_err(), PacketError::MissingField("username"));

    let mut options = connect_options();
    options.password = None;
    assert_eq!(options.encode().unwrap_err(), PacketError::MissingField("password"));
}

#[test]
fn connect_with_a_will_packs_every_flag_bit() {
    let mut options = connect_options();
    options.username = Some("u".to_string());
    options.password = Some(Bytes::from_static(b"p"));
    options.keep_alive = 10;
    options.will = Some(WillOptions {
        topic: "w/t".to_string(),
        message: Bytes::from_static(b"bye"),
        retained: true,
        qos: QoS::AtLeastOnce,
    });

    let encoded = options.encode().unwrap();
    let expected = hex::decode(concat!(
        "1020",             // fixed header, remaining length 32
        "00044d515454",     // "MQTT"
        "04",               // protocol level
        "ee",               // username | password | will retain | will QoS 1 | will | clean session
        "000a",             // keep alive
        "000464657631",     // "dev1"
        "0003772f74",       // will topic "w/t"
        "0003627965",       // will message "bye"
        "000175",           // username "u"
        "000170",           // password "p"
    ))
    .unwrap();
    assert_eq!(&encoded[..], &expected[..]);
}

#[test]
fn publish_qos1_round_trips_with_the_reference_flags() {
    init_logs();

    let packet = PublishPacket {
        topic: "a/b".to_string(),
        payload: Bytes::from_static(&[1, 2, 3]),
        options: PublishOptions { qos: QoS::AtLeastOnce, packet_id: 42, ..Default::default() },
    };

    let encoded = packet.encode().unwrap();
    let expected = hex::decode("320a0003612f62002a010203").unwrap();
    assert_eq!(&encoded[..], &expected[..]);

    // Flags nibble: dup=0, qos=1, retain=0
    assert_eq!(encoded[0] & 0x0F, 0x02);

    assert_eq!(PublishPacket::decode(&encoded).unwrap(), packet);
}

#[test]
fn publish_qos0_omits_the_packet_identifier() {
    let packet = PublishPacket {
        topic: "a/b".to_string(),
        payload: Bytes::from_static(b"hi"),
        options: PublishOptions::default(),
    };

    let encoded = packet.encode().unwrap();
    assert_eq!(&encoded[..], &hex::decode("30070003612f626869").unwrap()[..]);
    assert_eq!(PublishPacket::decode(&encoded).unwrap(), packet);
}

#[test]
fn publish_above_qos0_requires_a_nonzero_packet_identifier() {
    let packet = PublishPacket {
        topic: "a/b".to_string(),
        payload: Bytes::new(),
        options: PublishOptions { qos: QoS::ExactlyOnce, packet_id: 0, ..Default::default() },
    };

    assert_eq!(packet.encode().unwrap_err(), PacketError::MissingField("packet_id"));
}

#[test]
fn subscribe_produces_the_reference_bytes() {
    let packet = SubscribePacket {
        packet_id: 1,
        topics: vec![("a/b".to_string(), QoS::AtLeastOnce)],
    };

    let encoded = packet.encode().unwrap();
    assert_eq!(&encoded[..], &hex::decode("820800010003612f6201").unwrap()[..]);
}

#[test]
fn subscribe_supports_multiple_topic_filters() {
    let packet = SubscribePacket {
        packet_id: 7,
        topics: vec![
            ("a".to_string(), QoS::AtMostOnce),
            ("b/#".to_string(), QoS::ExactlyOnce),
        ],
    };

    let encoded = packet.encode().unwrap();
    assert_eq!(&encoded[..], &hex::decode("820c0007000161000003622f2302").unwrap()[..]);
}

#[test]
fn subscribe_rejects_an_empty_topic_list() {
    let packet = SubscribePacket { packet_id: 1, topics: Vec::new() };
    assert_eq!(packet.encode().unwrap_err(), PacketError::MissingField("topics"));
}

#[test]
fn unsubscribe_produces_the_reference_bytes() {
    let packet = UnsubscribePacket { packet_id: 1, topics: vec!["a/b".to_string()] };

    let encoded = packet.encode().unwrap();
    assert_eq!(&encoded[..], &hex::decode("a20700010003612f62").unwrap()[..]);
}

#[test]
fn pingreq_and_disconnect_are_fixed_header_only() {
    assert_eq!(&PingReqPacket.encode().unwrap()[..], &[0xC0, 0x00]);
    assert_eq!(&DisconnectPacket.encode().unwrap()[..], &[0xE0, 0x00]);
}

#[test]
fn pingresp_decodes_from_its_two_byte_form() {
    assert!(PingRespPacket::decode(&[0xD0, 0x00]).is_ok());
    assert!(matches!(
        PingRespPacket::decode(&[0xD0, 0x01, 0x00]),
        Err(PacketError::MalformedPacket(_))
    ));
}

#[test]
fn connack_accepted_and_rejected_forms() {
    let accepted = ConnAckPacket::decode(&[0x20, 0x02, 0x00, 0x00]).unwrap();
    assert!(!accepted.session_present);
    assert_eq!(accepted.return_code, ConnectReturnCode::Accepted);
    assert!(accepted.return_code.is_accepted());

    let rejected = ConnAckPacket::decode(&[0x20, 0x02, 0x01, 0x05]).unwrap();
    assert!(rejected.session_present);
    assert_eq!(rejected.return_code, ConnectReturnCode::NotAuthorized);
    assert!(!rejected.return_code.is_accepted());
}

#[test]
fn connack_enforces_its_two_byte_payload() {
    assert!(matches!(
        ConnAckPacket::decode(&[0x20, 0x03, 0x00, 0x00, 0x00]),
        Err(PacketError::MalformedPacket(_))
    ));
    assert!(matches!(
        ConnAckPacket::decode(&[0x30, 0x02, 0x00, 0x00]),
        Err(PacketError::MalformedPacket(_))
    ));
    assert!(matches!(
        ConnAckPacket::decode(&[0x20, 0x02, 0x00, 0x06]),
        Err(PacketError::MalformedPacket(_))
    ));
}

#[test]
fn suback_reports_the_failure_sentinel_distinctly() {
    let suback = SubAckPacket::decode(&[0x90, 0x03, 0x00, 0x01, 0x80]).unwrap();
    assert_eq!(suback.packet_id, 1);
    assert_eq!(suback.return_codes, vec![SubAckReturnCode::Failure]);
    assert!(suback.return_codes[0].is_failure());

    let granted = SubAckPacket::decode(&[0x90, 0x04, 0x00, 0x01, 0x02, 0x00]).unwrap();
    assert_eq!(
        granted.return_codes,
        vec![
            SubAckReturnCode::Success(QoS::ExactlyOnce),
            SubAckReturnCode::Success(QoS::AtMostOnce),
        ]
    );
}

#[test]
fn suback_rejects_reserved_return_codes() {
    assert!(matches!(
        SubAckPacket::decode(&[0x90, 0x03, 0x00, 0x01, 0x03]),
        Err(PacketError::MalformedPacket(_))
    ));
}

#[test]
fn ack_family_round_trips() {
    for packet_type in
        [PacketType::PubAck, PacketType::PubRec, PacketType::PubRel, PacketType::PubComp]
    {
        let ack = AckPacket { packet_type, dup: false, packet_id: 10 };
        let encoded = ack.encode().unwrap();
        assert_eq!(AckPacket::decode(&encoded).unwrap(), ack);
    }

    // PUBACK and PUBREL reference forms: reserved flags differ
    let puback = AckPacket { packet_type: PacketType::PubAck, dup: false, packet_id: 10 };
    assert_eq!(&puback.encode().unwrap()[..], &[0x40, 0x02, 0x00, 0x0A]);

    let pubrel = AckPacket { packet_type: PacketType::PubRel, dup: false, packet_id: 5 };
    assert_eq!(&pubrel.encode().unwrap()[..], &[0x62, 0x02, 0x00, 0x05]);
}

#[test]
fn ack_decoder_reports_the_dup_flag_for_every_member() {
    let encoded = [0x58, 0x02, 0x00, 0x07]; // PUBREC with DUP set
    let ack = AckPacket::decode(&encoded).unwrap();
    assert_eq!(ack.packet_type, PacketType::PubRec);
    assert!(ack.dup);
    assert_eq!(ack.packet_id, 7);
}

#[test]
fn ack_decoder_rejects_non_ack_types() {
    assert!(matches!(
        AckPacket::decode(&[0x20, 0x02, 0x00, 0x00]),
        Err(PacketError::MalformedPacket(_))
    ));
}

#[test]
fn decoders_reject_unknown_packet_types() {
    assert_eq!(
        ConnAckPacket::decode(&[0x00, 0x02, 0x00, 0x00]).unwrap_err(),
        PacketError::UnknownPacketType(0)
    );
    assert_eq!(
        SubAckPacket::decode(&[0xF0, 0x03, 0x00, 0x01, 0x00]).unwrap_err(),
        PacketError::UnknownPacketType(0x0F)
    );
}

#[test]
fn oversized_strings_are_rejected_at_the_length_prefix() {
    let packet = PublishPacket {
        topic: "t".repeat(65_536),
        payload: Bytes::new(),
        options: PublishOptions::default(),
    };

    assert_eq!(packet.encode().unwrap_err(), PacketError::StringTooLong(65_536));
}
