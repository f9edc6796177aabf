/// Classes recognised by code. Only `IN` RDATA is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordClass {
    IN,
    CS,
    CH,
    HS,
}

impl RecordClass {
    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            1 => Some(RecordClass::IN),
            2 => Some(RecordClass::CS),
            3 => Some(RecordClass::CH),
            4 => Some(RecordClass::HS),
            _ => None,
        }
    }
}
