#![allow(dead_code)]

pub const TYPE_A: u16 = 1;
pub const TYPE_NS: u16 = 2;
pub const TYPE_CNAME: u16 = 5;
pub const TYPE_SOA: u16 = 6;
pub const TYPE_PTR: u16 = 12;
pub const TYPE_MX: u16 = 15;
pub const TYPE_TXT: u16 = 16;
pub const TYPE_AAAA: u16 = 28;

pub const CLASS_IN: u16 = 1;
pub const CLASS_CH: u16 = 3;

pub const FLAGS_QUERY: u16 = 0x0100;
pub const FLAGS_RESPONSE: u16 = 0x8180;

/// Offset of the question name in every message built here.
pub const QUESTION_OFFSET: u16 = 12;

/// Encodes a dotted name as uncompressed labels plus the root label.
pub fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

pub fn pointer(offset: u16) -> Vec<u8> {
    (0xC000 | offset).to_be_bytes().to_vec()
}

/// Byte-level builder for DNS messages, including broken ones.
/// Counts are written as given and never derived from the content.
pub struct MessageBuilder {
    bytes: Vec<u8>,
}

impl MessageBuilder {
    pub fn new(flags: u16, qdcount: u16, ancount: u16, nscount: u16, arcount: u16) -> Self {
        let mut bytes = Vec::with_capacity(512);
        bytes.extend_from_slice(&0x1234u16.to_be_bytes());
        for field in [flags, qdcount, ancount, nscount, arcount] {
            bytes.extend_from_slice(&field.to_be_bytes());
        }
        Self { bytes }
    }

    pub fn query(name: &str, qtype: u16) -> Self {
        Self::new(FLAGS_QUERY, 1, 0, 0, 0).question(name, qtype, CLASS_IN)
    }

    pub fn response(name: &str, qtype: u16, ancount: u16) -> Self {
        Self::new(FLAGS_RESPONSE, 1, ancount, 0, 0).question(name, qtype, CLASS_IN)
    }

    pub fn offset(&self) -> u16 {
        self.bytes.len() as u16
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub fn name(self, name: &str) -> Self {
        self.raw(&encode_name(name))
    }

    pub fn question(self, name: &str, qtype: u16, qclass: u16) -> Self {
        self.name(name).fixed_question(qtype, qclass)
    }

    pub fn fixed_question(self, qtype: u16, qclass: u16) -> Self {
        self.raw(&qtype.to_be_bytes()).raw(&qclass.to_be_bytes())
    }

    /// Type, class, TTL and RDLENGTH without any RDATA.
    pub fn fixed_record(self, rtype: u16, rclass: u16, ttl: u32, rdlength: u16) -> Self {
        self.raw(&rtype.to_be_bytes())
            .raw(&rclass.to_be_bytes())
            .raw(&ttl.to_be_bytes())
            .raw(&rdlength.to_be_bytes())
    }

    /// Full record whose owner is the question name (via pointer) and whose
    /// RDLENGTH matches `rdata`.
    pub fn record(self, rtype: u16, rclass: u16, ttl: u32, rdata: &[u8]) -> Self {
        self.raw(&pointer(QUESTION_OFFSET))
            .fixed_record(rtype, rclass, ttl, rdata.len() as u16)
            .raw(rdata)
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}
