use super::cursor::Cursor;
use dns_observer_domain::{DecodeError, MessageHeader, HEADER_LEN};

/// Decodes the fixed header (RFC 1035 §4.1.1) and leaves the cursor at the
/// first byte of the question section.
pub fn decode_header(cursor: &mut Cursor<'_>) -> Result<MessageHeader, DecodeError> {
    let raw = cursor.read_array::<HEADER_LEN>()?;
    let field = |i: usize| u16::from_be_bytes([raw[i], raw[i + 1]]);

    Ok(MessageHeader {
        id: field(0),
        flags: field(2),
        qdcount: field(4),
        ancount: field(6),
        nscount: field(8),
        arcount: field(10),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dns_observer_domain::Direction;

    #[test]
    fn test_decode_response_header() {
        let msg = [
            0x12, 0x34, // ID
            0x81, 0x83, // QR=1, RD, RA, RCODE=3
            0x00, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x04, 0xFF,
        ];
        let mut cursor = Cursor::new(&msg);
        let header = decode_header(&mut cursor).unwrap();

        assert_eq!(header.id, 0x1234);
        assert_eq!(header.direction(), Direction::Response);
        assert_eq!(header.rcode(), 3);
        assert!(header.recursion_desired());
        assert!(header.recursion_available());
        assert_eq!(header.qdcount, 1);
        assert_eq!(header.ancount, 2);
        assert_eq!(header.nscount, 3);
        assert_eq!(header.arcount, 4);
        assert_eq!(cursor.position(), HEADER_LEN);
        assert_eq!(cursor.remaining(), 1);
    }

    #[test]
    fn test_short_header_is_malformed() {
        let msg = [0u8; HEADER_LEN - 1];
        let mut cursor = Cursor::new(&msg);
        assert_eq!(decode_header(&mut cursor), Err(DecodeError::Malformed));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_query_direction_and_opcode() {
        let mut msg = [0u8; HEADER_LEN];
        msg[2] = 0x28; // QR=0, OPCODE=5 (UPDATE)
        let header = decode_header(&mut Cursor::new(&msg)).unwrap();
        assert_eq!(header.direction(), Direction::Query);
        assert_eq!(header.opcode(), 5);
        assert_eq!(header.rcode(), 0);
    }
}
