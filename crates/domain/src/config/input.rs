use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Encoding of the messages handed to the decoder.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// One hex-encoded message per line.
    #[default]
    Hex,

    /// One base64-encoded message per line.
    Base64,

    /// Each input file holds exactly one binary message.
    Raw,
}

impl InputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Base64 => "base64",
            Self::Raw => "raw",
        }
    }

    pub fn is_line_based(&self) -> bool {
        !matches!(self, Self::Raw)
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "base64" => Ok(Self::Base64),
            "raw" => Ok(Self::Raw),
            _ => Err(format!(
                "Unknown input format '{}'. Expected: hex, base64, raw",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct InputConfig {
    #[serde(default)]
    pub format: InputFormat,

    /// Strip the two-byte length prefix used by DNS over TCP.
    #[serde(default)]
    pub tcp_framing: bool,
}
