use dns_observer_domain::{DecodeError, DecodeSummary};

/// Turns one wire-format DNS message into its single-line textual record.
///
/// Implementations append to `out` as they go and never backtrack, so on
/// error `out` holds a truncated record ending in the malformed marker.
pub trait MessageDecoder: Send + Sync {
    fn decode(&self, message: &[u8], out: &mut String) -> Result<DecodeSummary, DecodeError>;

    /// Renders the record emitted for a message that was refused before
    /// decoding (for example because it exceeds the size limit).
    fn render_rejection(&self, message_len: usize, out: &mut String);
}
