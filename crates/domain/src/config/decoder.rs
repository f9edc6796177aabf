use serde::{Deserialize, Serialize};

/// Largest message a single UDP datagram or TCP frame can carry.
pub const MAX_MESSAGE_SIZE: usize = 65_535;

/// How RDATA length is reconciled for name-bearing record types.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RdlengthPolicy {
    /// Residual RDATA after the name is skipped without complaint.
    #[default]
    Permissive,

    /// The name's inline bytes must account for exactly `rdlength`.
    Strict,
}

impl RdlengthPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Permissive => "permissive",
            Self::Strict => "strict",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DecoderConfig {
    #[serde(default)]
    pub rdlength_policy: RdlengthPolicy,

    #[serde(default = "default_max_message_size")]
    pub max_message_size: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            rdlength_policy: RdlengthPolicy::default(),
            max_message_size: default_max_message_size(),
        }
    }
}

fn default_max_message_size() -> usize {
    MAX_MESSAGE_SIZE
}
