//! Append-only writer for the single-line JSON-shaped message record.
//!
//! Fragments go out in decode order and are never revisited, so a decode
//! that fails part way leaves a record that stops at the malformed marker:
//!
//! ```text
//! {"rn":"example.com","rc":0,"rr":[{"a":"192.0.2.1","ttl":300}]}
//! {"rn":"example.com","rc":0,"rr":[{"malformed":17}]}
//! ```

use dns_observer_domain::dns_record::TXT_PLACEHOLDER;
use dns_observer_domain::{Direction, DnsRecord, RecordData};
use std::fmt::Write;

pub struct Renderer<'a> {
    out: &'a mut String,
    records: usize,
}

// `fmt::Write` for `String` never returns an error, so the results of the
// `write!` calls below are discarded.
impl<'a> Renderer<'a> {
    pub fn new(out: &'a mut String) -> Self {
        Self { out, records: 0 }
    }

    pub fn open(&mut self) {
        self.out.push('{');
    }

    pub fn question(&mut self, direction: Direction, name: &str) {
        self.out.push('"');
        self.out.push_str(direction.name_key());
        self.out.push_str("\":");
        push_json_str(self.out, name);
        self.out.push(',');
    }

    pub fn begin_records(&mut self, rcode: u8) {
        let _ = write!(self.out, "\"rc\":{},\"rr\":[", rcode);
    }

    pub fn begin_record(&mut self) {
        if self.records > 0 {
            self.out.push(',');
        }
        self.records += 1;
        self.out.push('{');
    }

    pub fn record(&mut self, record: &DnsRecord) {
        match &record.data {
            RecordData::A(addr) => {
                let _ = write!(self.out, "\"a\":\"{}\"", addr);
            }
            RecordData::Aaaa(addr) => {
                let _ = write!(self.out, "\"aaaa\":\"{}\"", addr);
            }
            RecordData::Name { kind, name } => {
                let _ = write!(self.out, "\"{}\":", kind.key());
                push_json_str(self.out, name);
            }
            RecordData::Txt => {
                let _ = write!(self.out, "\"txt\":\"{}\"", TXT_PLACEHOLDER);
            }
            RecordData::Opaque => {
                let _ = write!(
                    self.out,
                    "\"type\":\"{:x}\",\"class\":\"{:x}\",\"rdlength\":{}",
                    record.rtype, record.rclass, record.rdlength
                );
            }
        }
        let _ = write!(self.out, ",\"ttl\":{}}}", record.ttl);
    }

    pub fn close(&mut self) {
        self.out.push_str("]}");
    }

    /// Terminal marker; nothing may be written after it.
    pub fn malformed(&mut self, remaining: usize) {
        let _ = write!(self.out, "\"malformed\":{}", remaining);
    }

    /// Terminal marker for a failure inside RDATA interpretation, which
    /// also closes the open record and array.
    pub fn malformed_in_record(&mut self, remaining: usize) {
        let _ = write!(self.out, "\"malformed\":{}}}]}}", remaining);
    }

    pub fn records_written(&self) -> usize {
        self.records
    }
}

fn push_json_str(out: &mut String, value: &str) {
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use dns_observer_domain::NameKind;
    use std::net::Ipv4Addr;

    fn record(data: RecordData) -> DnsRecord {
        DnsRecord {
            rtype: 1,
            rclass: 1,
            ttl: 60,
            rdlength: 4,
            data,
        }
    }

    #[test]
    fn test_full_record_shape() {
        let mut out = String::new();
        let mut r = Renderer::new(&mut out);
        r.open();
        r.question(Direction::Response, "example.com");
        r.begin_records(0);
        r.begin_record();
        r.record(&record(RecordData::A(Ipv4Addr::new(192, 0, 2, 1))));
        r.begin_record();
        r.record(&record(RecordData::Txt));
        r.close();
        assert_eq!(r.records_written(), 2);
        assert_eq!(
            out,
            r#"{"rn":"example.com","rc":0,"rr":[{"a":"192.0.2.1","ttl":60},{"txt":"NYI","ttl":60}]}"#
        );
    }

    #[test]
    fn test_opaque_record_uses_lowercase_hex() {
        let mut out = String::new();
        let mut r = Renderer::new(&mut out);
        r.record(&DnsRecord {
            rtype: 0x2A,
            rclass: 0xFE,
            ttl: 7,
            rdlength: 12,
            data: RecordData::Opaque,
        });
        assert_eq!(out, r#""type":"2a","class":"fe","rdlength":12,"ttl":7}"#);
    }

    #[test]
    fn test_names_are_json_escaped() {
        let mut out = String::new();
        let mut r = Renderer::new(&mut out);
        r.record(&record(RecordData::Name {
            kind: NameKind::Cname,
            name: r#"a"b\c"#.to_string(),
        }));
        assert_eq!(out, r#""cname":"a\"b\\c","ttl":60}"#);
    }

    #[test]
    fn test_malformed_in_record_closes_array() {
        let mut out = String::new();
        let mut r = Renderer::new(&mut out);
        r.open();
        r.begin_records(2);
        r.begin_record();
        r.malformed_in_record(9);
        assert_eq!(out, r#"{"rc":2,"rr":[{"malformed":9}]}"#);
    }
}
