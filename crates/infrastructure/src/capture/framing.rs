/// Size of the length prefix in front of every DNS message on a TCP
/// stream (RFC 1035 §4.2.2).
pub const TCP_LENGTH_PREFIX: usize = 2;

/// Removes the TCP length prefix when it is present and agrees with the
/// payload length. Anything else is returned untouched, so UDP payloads
/// pass through even when framing is enabled.
pub fn strip_tcp_prefix(payload: &[u8]) -> &[u8] {
    if payload.len() <= TCP_LENGTH_PREFIX {
        return payload;
    }
    let declared = u16::from_be_bytes([payload[0], payload[1]]) as usize;
    if declared == payload.len() - TCP_LENGTH_PREFIX {
        &payload[TCP_LENGTH_PREFIX..]
    } else {
        payload
    }
}

/// Applies [`strip_tcp_prefix`] to an owned buffer when `enabled`.
pub fn unframe(mut bytes: Vec<u8>, enabled: bool) -> Vec<u8> {
    if enabled && strip_tcp_prefix(&bytes).len() != bytes.len() {
        bytes.drain(..TCP_LENGTH_PREFIX);
    }
    bytes
}
