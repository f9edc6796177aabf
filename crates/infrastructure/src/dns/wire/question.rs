use super::cursor::Cursor;
use super::name::{decode_name, NameBuffer};
use dns_observer_domain::DecodeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionFields {
    pub qtype: u16,
    pub qclass: u16,
}

/// Decodes one question entry: the name into `name`, then QTYPE and QCLASS.
pub fn decode_question(
    cursor: &mut Cursor<'_>,
    name: &mut NameBuffer,
) -> Result<QuestionFields, DecodeError> {
    decode_name(cursor, name)?;
    let raw = cursor.read_array::<4>()?;
    Ok(QuestionFields {
        qtype: u16::from_be_bytes([raw[0], raw[1]]),
        qclass: u16::from_be_bytes([raw[2], raw[3]]),
    })
}
