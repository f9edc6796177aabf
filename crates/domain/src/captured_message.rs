use std::sync::Arc;

/// One DNS message as delivered by the feed layer, already stripped of any
/// transport framing.
#[derive(Debug, Clone)]
pub struct CapturedMessage {
    /// Where the message came from, e.g. `"capture.hex:12"`.
    pub origin: Arc<str>,
    pub bytes: Vec<u8>,
}

impl CapturedMessage {
    pub fn new(origin: impl Into<Arc<str>>, bytes: Vec<u8>) -> Self {
        Self {
            origin: origin.into(),
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
