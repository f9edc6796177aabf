//! Domain name decompression (RFC 1035 §4.1.4).
//!
//! A name is a run of length-prefixed labels ending either in the root
//! label or in a 14-bit compression pointer to another position in the same
//! message. Pointers may point anywhere, including forward or into a cycle;
//! the only thing that stops a hostile chain is `MAX_POINTER_DEPTH`.

use super::cursor::Cursor;
use dns_observer_domain::DecodeError;

/// Usable output bytes for one decoded name, separators included.
pub const MAX_NAME_LEN: usize = 255;

/// Maximum number of compression pointers followed for a single name.
pub const MAX_POINTER_DEPTH: u8 = 20;

const PLACEHOLDER: u8 = b'*';
const SEPARATOR: u8 = b'.';
const POINTER_OFFSET_MASK: u16 = 0x3FFF;

/// Fixed-capacity output buffer for a printable domain name.
///
/// Every label is stored as a `.` followed by its bytes, with anything that
/// is not printable ASCII replaced by `*`. The text therefore is always
/// ASCII, and the leading separator is dropped when read back.
#[derive(Clone)]
pub struct NameBuffer {
    buf: [u8; MAX_NAME_LEN],
    len: usize,
}

impl NameBuffer {
    pub fn new() -> Self {
        Self {
            buf: [0u8; MAX_NAME_LEN],
            len: 0,
        }
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Decoded name without the leading separator; the root name is `""`.
    pub fn as_str(&self) -> &str {
        let bytes = self.buf.get(1..self.len).unwrap_or_default();
        core::str::from_utf8(bytes).unwrap_or_default()
    }

    pub fn capacity_left(&self) -> usize {
        MAX_NAME_LEN - self.len
    }

    /// A label that exactly fills the remaining capacity is accepted.
    fn push_label(&mut self, label: &[u8]) -> Result<(), DecodeError> {
        if label.len() + 1 > self.capacity_left() {
            return Err(DecodeError::UnterminatedName);
        }
        self.buf[self.len] = SEPARATOR;
        self.len += 1;
        for &b in label {
            self.buf[self.len] = printable(b);
            self.len += 1;
        }
        Ok(())
    }
}

impl Default for NameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NameBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("NameBuffer").field(&self.as_str()).finish()
    }
}

fn printable(b: u8) -> u8 {
    if b == b' ' || b.is_ascii_graphic() {
        b
    } else {
        PLACEHOLDER
    }
}

/// Decodes the name starting at the cursor into `out`.
///
/// On success the cursor sits just past the inline part of the name: the
/// labels up to and including either the root label or the first pointer.
/// Bytes reached only through pointers are never consumed.
pub fn decode_name(cursor: &mut Cursor<'_>, out: &mut NameBuffer) -> Result<(), DecodeError> {
    out.clear();
    resolve(cursor, out, 0)
}

/// Like [`decode_name`], but first skips the 16-bit MX preference field.
/// The preference is only present at the top level; names reached through
/// pointers are plain names. A cursor too short for the preference holds no
/// name at all.
pub fn decode_mx_name(cursor: &mut Cursor<'_>, out: &mut NameBuffer) -> Result<(), DecodeError> {
    out.clear();
    cursor
        .advance(2)
        .map_err(|_| DecodeError::UnterminatedName)?;
    resolve(cursor, out, 0)
}

fn resolve(cursor: &mut Cursor<'_>, out: &mut NameBuffer, depth: u8) -> Result<(), DecodeError> {
    loop {
        let Some(byte) = cursor.peek_u8() else {
            return Err(DecodeError::UnterminatedName);
        };

        match byte & 0xC0 {
            0x00 => {
                let len = byte as usize;
                if len == 0 {
                    cursor.advance(1)?;
                    return Ok(());
                }
                // length byte plus `len` content bytes
                if cursor.remaining() <= len {
                    return Err(DecodeError::LabelTooLong);
                }
                cursor.advance(1)?;
                let label = cursor.advance(len)?;
                out.push_label(label)?;
            }
            0xC0 => {
                let pointer = cursor
                    .read_u16()
                    .map_err(|_| DecodeError::OffsetTooLong)?;
                if depth >= MAX_POINTER_DEPTH {
                    return Err(DecodeError::OffsetTooLong);
                }
                let mut target = cursor.seek((pointer & POINTER_OFFSET_MASK) as usize);
                return resolve(&mut target, out, depth + 1);
            }
            // 01xxxxxx reads as a length of 64 or more, so it is reported
            // as too long; only 10xxxxxx is malformed
            0x40 => return Err(DecodeError::LabelTooLong),
            _ => return Err(DecodeError::LabelMalformed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_buffer_starts_empty() {
        let name = NameBuffer::new();
        assert_eq!(name.as_str(), "");
        assert_eq!(name.capacity_left(), MAX_NAME_LEN);
    }

    #[test]
    fn test_push_label_substitutes_unprintable_bytes() {
        let mut name = NameBuffer::new();
        name.push_label(b"a\x00b\x7f").unwrap();
        name.push_label(b"c d").unwrap();
        assert_eq!(name.as_str(), "a*b*.c d");
    }

    #[test]
    fn test_push_label_rejects_overflow() {
        let mut name = NameBuffer::new();
        for _ in 0..3 {
            name.push_label(&[b'x'; 63]).unwrap();
        }
        assert_eq!(name.capacity_left(), MAX_NAME_LEN - 192);
        assert_eq!(
            name.push_label(&[b'x'; 63]),
            Err(DecodeError::UnterminatedName)
        );
        name.push_label(&[b'x'; 62]).unwrap();
        assert_eq!(name.capacity_left(), 0);
    }

    #[test]
    fn test_root_name_consumes_one_byte() {
        let msg = [0x00, 0xFF];
        let mut cursor = Cursor::new(&msg);
        let mut name = NameBuffer::new();
        decode_name(&mut cursor, &mut name).unwrap();
        assert_eq!(name.as_str(), "");
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_reserved_top_bits_are_malformed() {
        let msg = [0x80, 0x00];
        let mut name = NameBuffer::new();
        assert_eq!(
            decode_name(&mut Cursor::new(&msg), &mut name),
            Err(DecodeError::LabelMalformed)
        );
    }

    #[test]
    fn test_buffer_is_reset_between_decodes() {
        let msg = [3, b'f', b'o', b'o', 0, 3, b'b', b'a', b'r', 0];
        let mut cursor = Cursor::new(&msg);
        let mut name = NameBuffer::new();
        decode_name(&mut cursor, &mut name).unwrap();
        assert_eq!(name.as_str(), "foo");
        decode_name(&mut cursor, &mut name).unwrap();
        assert_eq!(name.as_str(), "bar");
    }

    #[test]
    fn test_mx_preference_outside_cursor_is_unterminated() {
        let msg = [0x00, 0x0A, 0x00];
        let mut limited = Cursor::new(&msg).limit(1).unwrap();
        let mut name = NameBuffer::new();
        assert_eq!(
            decode_mx_name(&mut limited, &mut name),
            Err(DecodeError::UnterminatedName)
        );
    }

    #[test]
    fn test_label_crossing_cursor_end_is_too_long() {
        let msg = [3, b'a', b'b', b'c', 0];
        let mut limited = Cursor::new(&msg).limit(3).unwrap();
        let mut name = NameBuffer::new();
        assert_eq!(
            decode_name(&mut limited, &mut name),
            Err(DecodeError::LabelTooLong)
        );
    }

    #[test]
    fn test_pointer_target_ignores_cursor_limit() {
        // "ab" at 0, then a pointer back to it
        let msg = [2, b'a', b'b', 0, 0xC0, 0x00];
        let mut limited = Cursor::at(&msg, 4).limit(2).unwrap();
        let mut name = NameBuffer::new();
        decode_name(&mut limited, &mut name).unwrap();
        assert_eq!(name.as_str(), "ab");
        assert!(limited.is_empty());
    }
}
