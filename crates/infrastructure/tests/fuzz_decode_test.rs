//! Seeded random inputs for the response decoder: whatever the bytes, it
//! must return a value or an error and never panic or loop.

use ferrous_lookup_infrastructure::dns::forwarding::ResponseParser;
use ferrous_lookup_infrastructure::dns::wire::NameDecoder;

mod helpers;
use helpers::{labels, ResponseBuilder, POINTER_TO_QUESTION};

const ROUNDS: usize = 5_000;

fn sample_response() -> Vec<u8> {
    let mut mx_rdata = vec![0x00, 0x0A];
    mx_rdata.extend_from_slice(&labels("mail"));
    mx_rdata.pop();
    mx_rdata.extend_from_slice(&POINTER_TO_QUESTION);

    ResponseBuilder::new(0x1234)
        .question("example.com", 15)
        .answer(&POINTER_TO_QUESTION, 15, 300, &mx_rdata)
        .answer(&POINTER_TO_QUESTION, 16, 300, b"\x05hello\x05world")
        .additional(&POINTER_TO_QUESTION, 1, 300, &[192, 0, 2, 1])
        .build()
}

#[test]
fn test_random_bytes_never_panic() {
    let mut rng = fastrand::Rng::with_seed(0x5EED_0001);

    for _ in 0..ROUNDS {
        let len = rng.usize(0..600);
        let bytes: Vec<u8> = (0..len).map(|_| rng.u8(..)).collect();
        let _ = ResponseParser::parse(&bytes);
    }
}

#[test]
fn test_mutated_responses_never_panic() {
    let base = sample_response();
    assert!(ResponseParser::parse(&base).is_ok());

    let mut rng = fastrand::Rng::with_seed(0x5EED_0002);
    for _ in 0..ROUNDS {
        let mut bytes = base.clone();
        for _ in 0..rng.usize(1..6) {
            let i = rng.usize(..bytes.len());
            bytes[i] = rng.u8(..);
        }
        if rng.bool() {
            bytes.truncate(rng.usize(..=bytes.len()));
        }

        if let Ok(response) = ResponseParser::parse(&bytes) {
            assert_eq!(response.answers.len(), response.header.answer_count as usize);
        }
    }
}

#[test]
fn test_pointer_heavy_names_terminate() {
    let mut rng = fastrand::Rng::with_seed(0x5EED_0003);

    for _ in 0..ROUNDS {
        let len = rng.usize(2..128);
        let bytes: Vec<u8> = (0..len)
            .map(|_| match rng.u8(..4) {
                0 => 0xC0,
                1 => rng.u8(..len as u8),
                2 => rng.u8(..4),
                _ => b'a',
            })
            .collect();

        let mut decoder = NameDecoder::new(&bytes);
        for offset in 0..len {
            if let Ok((name, _)) = decoder.decode(offset) {
                assert!(name.len() <= 255);
            }
        }
    }
}
