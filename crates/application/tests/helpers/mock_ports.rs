#![allow(dead_code)]

use dns_observer_application::ports::{MessageDecoder, MessageSource, RecordSink};
use dns_observer_domain::{
    CapturedMessage, DecodeError, DecodeSummary, Direction, DomainError,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Source that replays a scripted sequence of results.
pub struct MockMessageSource {
    items: VecDeque<Result<CapturedMessage, DomainError>>,
}

impl MockMessageSource {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn with_message(mut self, bytes: &[u8]) -> Self {
        let origin = format!("mock:{}", self.items.len() + 1);
        self.items
            .push_back(Ok(CapturedMessage::new(origin, bytes.to_vec())));
        self
    }

    pub fn with_error(mut self, error: DomainError) -> Self {
        self.items.push_back(Err(error));
        self
    }
}

impl MessageSource for MockMessageSource {
    fn next_message(&mut self) -> Result<Option<CapturedMessage>, DomainError> {
        match self.items.pop_front() {
            Some(Ok(message)) => Ok(Some(message)),
            Some(Err(e)) => Err(e),
            None => Ok(None),
        }
    }
}

/// Decoder keyed on the first byte of the message:
/// `b'q'` decodes as a query, `b'r'` as a response with one record, and any
/// other byte fails with the error `failure` maps it to.
pub struct MockMessageDecoder {
    calls: AtomicUsize,
}

impl MockMessageDecoder {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    fn failure(byte: u8) -> DecodeError {
        match byte {
            b'p' => DecodeError::OffsetTooLong,
            b't' => DecodeError::TooManyQuestions,
            _ => DecodeError::Malformed,
        }
    }
}

impl MessageDecoder for MockMessageDecoder {
    fn decode(&self, message: &[u8], out: &mut String) -> Result<DecodeSummary, DecodeError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        match message.first() {
            Some(b'q') => {
                out.push_str("query");
                Ok(DecodeSummary {
                    direction: Direction::Query,
                    rcode: 0,
                    question: Some("mock.example".to_string()),
                    records: 0,
                })
            }
            Some(b'r') => {
                out.push_str("response");
                Ok(DecodeSummary {
                    direction: Direction::Response,
                    rcode: 0,
                    question: Some("mock.example".to_string()),
                    records: 1,
                })
            }
            other => {
                let error = Self::failure(other.copied().unwrap_or(0));
                out.push_str("malformed:");
                out.push_str(error.label());
                Err(error)
            }
        }
    }

    fn render_rejection(&self, message_len: usize, out: &mut String) {
        out.push_str(&format!("rejected:{}", message_len));
    }
}

/// Sink collecting records in memory, optionally failing after `fail_after`
/// successful writes.
pub struct MockRecordSink {
    pub records: Vec<String>,
    pub flushed: bool,
    fail_after: Option<usize>,
}

impl MockRecordSink {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            flushed: false,
            fail_after: None,
        }
    }

    pub fn failing_after(count: usize) -> Self {
        Self {
            fail_after: Some(count),
            ..Self::new()
        }
    }
}

impl RecordSink for MockRecordSink {
    fn write_record(&mut self, record: &str) -> Result<(), DomainError> {
        if self.fail_after == Some(self.records.len()) {
            return Err(DomainError::IoError("broken pipe".to_string()));
        }
        self.records.push(record.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DomainError> {
        self.flushed = true;
        Ok(())
    }
}
