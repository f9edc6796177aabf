pub mod decoder;
pub mod errors;
pub mod input;
pub mod logging;
pub mod root;

pub use decoder::{DecoderConfig, RdlengthPolicy};
pub use errors::ConfigError;
pub use input::{InputConfig, InputFormat};
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
