use dns_observer_domain::{CapturedMessage, DomainError};

/// Feed of captured DNS messages, one contiguous buffer per message.
///
/// `Err(DomainError::InvalidInput)` reports a single unusable input item;
/// the source has already moved past it and may be polled again. Any other
/// error ends the stream.
pub trait MessageSource: Send {
    fn next_message(&mut self) -> Result<Option<CapturedMessage>, DomainError>;
}
