use thiserror::Error;

/// Failure kinds produced while decoding a single DNS message.
///
/// The set is closed: every decode path maps its failure onto one of these
/// kinds, and any of them aborts the message being decoded.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeError {
    #[error("Message truncated or structurally invalid")]
    Malformed,

    #[error("Label length exceeds 63 bytes or the remaining message")]
    LabelTooLong,

    #[error("Compression pointer chain too deep or pointer truncated")]
    OffsetTooLong,

    #[error("Label uses a reserved length encoding")]
    LabelMalformed,

    #[error("RDATA length does not match the record type")]
    BadRdlength,

    #[error("More than one question in message")]
    TooManyQuestions,

    #[error("Name ran out of input or output space before its terminator")]
    UnterminatedName,

    #[error("Declared RDATA length exceeds remaining message bytes")]
    RdataTooLong,
}

impl DecodeError {
    pub const ALL: [DecodeError; 8] = [
        DecodeError::Malformed,
        DecodeError::LabelTooLong,
        DecodeError::OffsetTooLong,
        DecodeError::LabelMalformed,
        DecodeError::BadRdlength,
        DecodeError::TooManyQuestions,
        DecodeError::UnterminatedName,
        DecodeError::RdataTooLong,
    ];

    /// Stable machine-readable label, used in logs and statistics.
    pub fn label(&self) -> &'static str {
        match self {
            DecodeError::Malformed => "malformed",
            DecodeError::LabelTooLong => "label-too-long",
            DecodeError::OffsetTooLong => "offset-too-long",
            DecodeError::LabelMalformed => "label-malformed",
            DecodeError::BadRdlength => "bad-rdlength",
            DecodeError::TooManyQuestions => "too-many",
            DecodeError::UnterminatedName => "unterminated",
            DecodeError::RdataTooLong => "rdata-too-long",
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::IoError(e.to_string())
    }
}
