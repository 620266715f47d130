use ferrous_lookup_domain::{DomainError, Query, Question, RecordType};
use ferrous_lookup_infrastructure::dns::forwarding::{MessageBuilder, ResponseParser};

mod helpers;
use helpers::labels;

#[test]
fn test_build_a_query_layout() {
    let bytes = MessageBuilder::build_query("example.com", &RecordType::A).unwrap();

    assert_eq!(bytes.len(), 12 + 13 + 4);
    assert_eq!(&bytes[2..4], &[0x01, 0x00], "only RD should be set");
    assert_eq!(&bytes[4..12], &[0, 1, 0, 0, 0, 0, 0, 0]);
    assert_eq!(&bytes[12..25], labels("example.com").as_slice());
    assert_eq!(&bytes[25..29], &[0x00, 0x01, 0x00, 0x01]);
}

#[test]
fn test_build_query_type_codes() {
    let expected = [
        (RecordType::AAAA, 28u16),
        (RecordType::MX, 15),
        (RecordType::TXT, 16),
        (RecordType::PTR, 12),
    ];

    for (record_type, code) in expected {
        let bytes = MessageBuilder::build_query("example.com", &record_type).unwrap();
        let qtype = u16::from_be_bytes([bytes[25], bytes[26]]);
        assert_eq!(qtype, code, "{}", record_type);
    }
}

#[test]
fn test_build_query_with_id() {
    let (id, bytes) = MessageBuilder::build_query_with_id("test.com", &RecordType::A).unwrap();
    let wire_id = u16::from_be_bytes([bytes[0], bytes[1]]);
    assert_eq!(wire_id, id, "Wire ID should match returned ID");
}

#[test]
fn test_trailing_dot_is_ignored() {
    let with_dot = MessageBuilder::encode(&Query::new(9, "example.com.", RecordType::A)).unwrap();
    let without = MessageBuilder::encode(&Query::new(9, "example.com", RecordType::A)).unwrap();
    assert_eq!(with_dot, without);
}

#[test]
fn test_encode_only_first_question() {
    let mut query = Query::new(0x0102, "a.example", RecordType::A);
    query.questions.push(Question::new("b.example", RecordType::MX));

    let bytes = MessageBuilder::encode(&query).unwrap();
    assert_eq!(&bytes[4..6], &[0, 1]);
    assert_eq!(bytes.len(), 12 + labels("a.example").len() + 4);
}

#[test]
fn test_encode_without_question_fails() {
    let query = Query {
        id: 1,
        flags: 0x0100,
        questions: vec![],
    };
    assert_eq!(MessageBuilder::encode(&query), Err(DomainError::EmptyQueries));
}

#[test]
fn test_label_too_long_is_rejected() {
    let name = format!("{}.com", "a".repeat(64));
    assert!(matches!(
        MessageBuilder::build_query(&name, &RecordType::A),
        Err(DomainError::LabelTooLong { len: 64, .. })
    ));
}

#[test]
fn test_query_parses_back_as_question() {
    let bytes = MessageBuilder::encode(&Query::new(0x4242, "mail.example.org", RecordType::MX))
        .unwrap();

    // A query carries no answers, so the parser reports NoAnswer after
    // reading the question cleanly.
    assert_eq!(ResponseParser::parse(&bytes), Err(DomainError::NoAnswer));
}
