use super::RecordType;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Placeholder rendered for TXT records, whose content is not decoded.
pub const TXT_PLACEHOLDER: &str = "NYI";

/// Name-bearing record types and the key each one is rendered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    Cname,
    Ns,
    Ptr,
    Soa,
    Mx,
}

impl NameKind {
    pub fn from_record_type(record_type: RecordType) -> Option<Self> {
        match record_type {
            RecordType::CNAME => Some(NameKind::Cname),
            RecordType::NS => Some(NameKind::Ns),
            RecordType::PTR => Some(NameKind::Ptr),
            RecordType::SOA => Some(NameKind::Soa),
            RecordType::MX => Some(NameKind::Mx),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            NameKind::Cname => "cname",
            NameKind::Ns => "ns",
            NameKind::Ptr => "ptr",
            NameKind::Soa => "soa",
            NameKind::Mx => "mx",
        }
    }
}

/// Interpreted RDATA of a resource record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Name { kind: NameKind, name: String },
    /// TXT content is not decoded.
    Txt,
    /// Any (class, type) pair outside the interpreted subset.
    Opaque,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub rtype: u16,
    pub rclass: u16,
    pub ttl: u32,
    pub rdlength: u16,
    pub data: RecordData,
}
