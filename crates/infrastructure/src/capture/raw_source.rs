use super::framing::unframe;
use dns_observer_application::ports::MessageSource;
use dns_observer_domain::{CapturedMessage, DomainError};
use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Binary feed where every file holds exactly one DNS message.
pub struct RawFileSource {
    pending: VecDeque<PathBuf>,
    tcp_framing: bool,
}

impl RawFileSource {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            pending: paths.into_iter().map(Into::into).collect(),
            tcp_framing: false,
        }
    }

    pub fn with_tcp_framing(mut self, enabled: bool) -> Self {
        self.tcp_framing = enabled;
        self
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl MessageSource for RawFileSource {
    fn next_message(&mut self) -> Result<Option<CapturedMessage>, DomainError> {
        let Some(path) = self.pending.pop_front() else {
            return Ok(None);
        };

        let origin = path.display().to_string();
        let bytes = fs::read(&path).map_err(|e| {
            DomainError::InvalidInput(format!("{}: failed to read: {}", origin, e))
        })?;

        debug!(origin = %origin, size = bytes.len(), "Read raw message file");
        Ok(Some(CapturedMessage::new(
            origin,
            unframe(bytes, self.tcp_framing),
        )))
    }
}
