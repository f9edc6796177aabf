mod message_decoder;
mod message_source;
mod record_sink;

pub use message_decoder::MessageDecoder;
pub use message_source::MessageSource;
pub use record_sink::RecordSink;

// Re-export for convenience
pub use dns_observer_domain::CapturedMessage;
