use crate::ports::{MessageDecoder, MessageSource, RecordSink};
use dns_observer_domain::{DecodeStats, DomainError};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct DecodeMessagesUseCase {
    decoder: Arc<dyn MessageDecoder>,
    max_message_size: usize,
}

impl DecodeMessagesUseCase {
    pub fn new(decoder: Arc<dyn MessageDecoder>, max_message_size: usize) -> Self {
        Self {
            decoder,
            max_message_size,
        }
    }

    /// Drains `source`, writing exactly one record to `sink` per message.
    ///
    /// Malformed messages are data, not failures: they still produce a
    /// (truncated) record and only show up in the returned statistics. The
    /// call fails only when the source or sink does.
    pub fn execute(
        &self,
        source: &mut dyn MessageSource,
        sink: &mut dyn RecordSink,
    ) -> Result<DecodeStats, DomainError> {
        let mut stats = DecodeStats::default();
        let mut line = String::with_capacity(512);

        loop {
            let message = match source.next_message() {
                Ok(Some(message)) => message,
                Ok(None) => break,
                Err(DomainError::InvalidInput(reason)) => {
                    warn!(reason = %reason, "Skipping unusable input");
                    stats.record_invalid_input();
                    continue;
                }
                Err(e) => return Err(e),
            };

            line.clear();

            if message.len() > self.max_message_size {
                warn!(
                    origin = %message.origin,
                    size = message.len(),
                    limit = self.max_message_size,
                    "Message exceeds size limit, not decoded"
                );
                self.decoder.render_rejection(message.len(), &mut line);
                stats.record_oversized();
                sink.write_record(&line)?;
                continue;
            }

            match self.decoder.decode(&message.bytes, &mut line) {
                Ok(summary) => {
                    debug!(
                        origin = %message.origin,
                        direction = %summary.direction,
                        rcode = summary.rcode,
                        records = summary.records,
                        "Decoded DNS message"
                    );
                    stats.record_success(&summary);
                }
                Err(e) => {
                    debug!(
                        origin = %message.origin,
                        kind = e.label(),
                        error = %e,
                        "Malformed DNS message"
                    );
                    stats.record_failure(e);
                }
            }

            sink.write_record(&line)?;
        }

        sink.flush()?;

        info!(
            messages = stats.messages_total,
            decoded = stats.decoded,
            malformed = stats.malformed,
            oversized = stats.oversized,
            invalid_inputs = stats.invalid_inputs,
            "Finished decoding input"
        );

        Ok(stats)
    }
}
