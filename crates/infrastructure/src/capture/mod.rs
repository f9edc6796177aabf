pub mod framing;
pub mod line_source;
pub mod raw_source;
pub mod writer_sink;

pub use framing::{strip_tcp_prefix, TCP_LENGTH_PREFIX};
pub use line_source::{
    Base64Codec, Base64LineSource, EncodedLineSource, HexCodec, HexLineSource, LineCodec,
};
pub use raw_source::RawFileSource;
pub use writer_sink::WriterSink;
