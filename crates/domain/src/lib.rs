//! dns-observer Domain Layer
pub mod captured_message;
pub mod config;
pub mod decode_report;
pub mod dns_header;
pub mod dns_record;
pub mod errors;

pub use captured_message::CapturedMessage;
pub use config::{
    CliOverrides, Config, ConfigError, DecoderConfig, InputConfig, InputFormat, LogFormat,
    LoggingConfig, RdlengthPolicy,
};
pub use decode_report::{DecodeStats, DecodeSummary};
pub use dns_header::{Direction, MessageHeader, HEADER_LEN};
pub use dns_record::{DnsRecord, NameKind, RecordClass, RecordData, RecordType};
pub use errors::{DecodeError, DomainError};
