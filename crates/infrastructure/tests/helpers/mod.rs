#![allow(dead_code)]
pub mod message_builder;

pub use message_builder::*;

use dns_observer_application::ports::MessageDecoder;
use dns_observer_domain::{DecodeError, DecodeSummary, RdlengthPolicy};
use dns_observer_infrastructure::dns::WireMessageDecoder;

pub fn decode(message: &[u8]) -> (Result<DecodeSummary, DecodeError>, String) {
    decode_with(RdlengthPolicy::Permissive, message)
}

pub fn decode_strict(message: &[u8]) -> (Result<DecodeSummary, DecodeError>, String) {
    decode_with(RdlengthPolicy::Strict, message)
}

pub fn decode_with(
    policy: RdlengthPolicy,
    message: &[u8],
) -> (Result<DecodeSummary, DecodeError>, String) {
    let mut out = String::new();
    let result = WireMessageDecoder::new(policy).decode(message, &mut out);
    (result, out)
}

/// Successful output must always be a valid JSON document.
pub fn assert_valid_json(output: &str) -> serde_json::Value {
    match serde_json::from_str(output) {
        Ok(value) => value,
        Err(e) => panic!("output is not valid JSON ({}): {}", e, output),
    }
}
