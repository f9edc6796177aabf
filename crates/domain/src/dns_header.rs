use std::fmt;

/// Size of the fixed DNS message header in bytes.
pub const HEADER_LEN: usize = 12;

/// Whether a message is a query or a response, taken from the QR bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Query,
    Response,
}

impl Direction {
    /// Key under which the question name is rendered.
    pub fn name_key(&self) -> &'static str {
        match self {
            Direction::Query => "qn",
            Direction::Response => "rn",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Query => "query",
            Direction::Response => "response",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The fixed 12-byte header of a DNS message (RFC 1035 §4.1.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessageHeader {
    pub id: u16,
    pub flags: u16,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl MessageHeader {
    pub fn direction(&self) -> Direction {
        if self.flags & 0x8000 == 0 {
            Direction::Query
        } else {
            Direction::Response
        }
    }

    pub fn rcode(&self) -> u8 {
        (self.flags & 0x000F) as u8
    }

    pub fn opcode(&self) -> u8 {
        ((self.flags >> 11) & 0x0F) as u8
    }

    pub fn authoritative(&self) -> bool {
        self.flags & 0x0400 != 0
    }

    pub fn truncated(&self) -> bool {
        self.flags & 0x0200 != 0
    }

    pub fn recursion_desired(&self) -> bool {
        self.flags & 0x0100 != 0
    }

    pub fn recursion_available(&self) -> bool {
        self.flags & 0x0080 != 0
    }
}
