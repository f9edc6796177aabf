//! Resource record decoding and RDATA dispatch.
//!
//! Only a small set of (class, type) pairs is interpreted. Every other
//! record is skipped by its declared length and reported by its raw type,
//! class and length.

use super::cursor::Cursor;
use super::name::{decode_mx_name, decode_name, NameBuffer};
use dns_observer_domain::{
    DecodeError, NameKind, RdlengthPolicy, RecordClass, RecordData, RecordType,
};
use std::net::{Ipv4Addr, Ipv6Addr};

/// TYPE, CLASS, TTL and RDLENGTH.
pub const RR_FIXED_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    pub rtype: u16,
    pub rclass: u16,
    pub ttl: u32,
    pub rdlength: u16,
}

impl RecordHeader {
    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.rtype)
    }

    pub fn record_class(&self) -> Option<RecordClass> {
        RecordClass::from_u16(self.rclass)
    }
}

/// Decodes the owner name into `owner` and the fixed fields that follow it.
/// The cursor is left at the first RDATA byte.
pub fn decode_record_header(
    cursor: &mut Cursor<'_>,
    owner: &mut NameBuffer,
) -> Result<RecordHeader, DecodeError> {
    decode_name(cursor, owner)?;

    let raw = cursor.read_array::<RR_FIXED_LEN>()?;
    let header = RecordHeader {
        rtype: u16::from_be_bytes([raw[0], raw[1]]),
        rclass: u16::from_be_bytes([raw[2], raw[3]]),
        ttl: u32::from_be_bytes([raw[4], raw[5], raw[6], raw[7]]),
        rdlength: u16::from_be_bytes([raw[8], raw[9]]),
    };

    if header.rdlength as usize > cursor.remaining() {
        return Err(DecodeError::RdataTooLong);
    }

    Ok(header)
}

/// Interprets the RDATA at the cursor according to the record's class and
/// type. On success the cursor is at the start of the next record.
pub fn decode_rdata(
    header: &RecordHeader,
    cursor: &mut Cursor<'_>,
    name: &mut NameBuffer,
    policy: RdlengthPolicy,
) -> Result<RecordData, DecodeError> {
    let rdlength = header.rdlength as usize;

    if header.record_class() != Some(RecordClass::IN) {
        cursor.advance(rdlength)?;
        return Ok(RecordData::Opaque);
    }

    let Some(record_type) = header.record_type() else {
        cursor.advance(rdlength)?;
        return Ok(RecordData::Opaque);
    };

    match record_type {
        RecordType::A => {
            if rdlength != 4 {
                return Err(DecodeError::BadRdlength);
            }
            Ok(RecordData::A(Ipv4Addr::from(cursor.read_array::<4>()?)))
        }
        RecordType::AAAA => {
            if rdlength != 16 {
                return Err(DecodeError::BadRdlength);
            }
            Ok(RecordData::Aaaa(Ipv6Addr::from(cursor.read_array::<16>()?)))
        }
        RecordType::TXT => {
            cursor.advance(rdlength)?;
            Ok(RecordData::Txt)
        }
        other => match NameKind::from_record_type(other) {
            Some(kind) => decode_rdata_name(kind, rdlength, cursor, name, policy),
            None => {
                cursor.advance(rdlength)?;
                Ok(RecordData::Opaque)
            }
        },
    }
}

fn decode_rdata_name(
    kind: NameKind,
    rdlength: usize,
    cursor: &mut Cursor<'_>,
    name: &mut NameBuffer,
    policy: RdlengthPolicy,
) -> Result<RecordData, DecodeError> {
    // inline labels and the MX preference must stay inside RDATA;
    // pointer targets may be anywhere in the message
    let mut rdata = cursor.limit(rdlength)?;
    match kind {
        NameKind::Mx => decode_mx_name(&mut rdata, name)?,
        _ => decode_name(&mut rdata, name)?,
    }

    if policy == RdlengthPolicy::Strict && !rdata.is_empty() {
        return Err(DecodeError::BadRdlength);
    }
    cursor.advance(rdlength)?;

    Ok(RecordData::Name {
        kind,
        name: name.as_str().to_string(),
    })
}
