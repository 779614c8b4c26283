#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use peerwire_p2p::{
    messages::{level, Identifier},
    Config, Payload,
};

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    command: u8,
    version: Version,
    max_reject_reason: Option<u8>,
    data: Vec<u8>,
}

#[derive(Arbitrary, Debug)]
enum Version {
    Known(u8),
    Any(u32),
}

const LEVELS: [u32; 13] = [
    level::CANONICAL,
    level::MINIMUM_PROTOCOL,
    level::HEADERS,
    level::BIP31,
    level::BIP35,
    level::BIP37,
    level::BIP61,
    level::BIP111,
    level::BIP130,
    level::BIP133,
    level::BIP152,
    level::BIP339,
    level::MAXIMUM_PROTOCOL,
];

fn fuzz(input: FuzzInput) {
    let ids = Identifier::ALL;
    let command = ids[input.command as usize % ids.len()].command();
    let version = match input.version {
        Version::Known(index) => LEVELS[index as usize % LEVELS.len()],
        Version::Any(version) => version,
    };
    let config = Config {
        max_reject_reason: input.max_reject_reason.map(usize::from),
        ..Default::default()
    };

    let Ok(payload) = Payload::deserialize(&config, command, version, &input.data) else {
        return;
    };
    assert_eq!(payload.identifier().command(), command);
    assert_eq!(payload.size(version), input.data.len());

    // Re-encoding and decoding again must be stable.
    let encoded = payload
        .encode(version)
        .expect("decoded payload must encode at the same version");
    assert_eq!(encoded.len(), payload.size(version));
    let decoded = Payload::deserialize(&config, command, version, &encoded)
        .expect("failed to decode a re-encoded payload");
    assert_eq!(payload, decoded);
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
