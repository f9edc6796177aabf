//! Bounds-checked sequential reader over a DNS message.
//!
//! A `Cursor` always keeps a reference to the whole message so that
//! compression pointers, which are absolute offsets, can be followed by
//! seeding a fresh cursor at the target position. Reads stop at `end`,
//! which is the message end unless the cursor was narrowed with
//! [`Cursor::limit`].

use dns_observer_domain::DecodeError;

#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    message: &'a [u8],
    pos: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(message: &'a [u8]) -> Self {
        Self {
            message,
            pos: 0,
            end: message.len(),
        }
    }

    /// Cursor seeded at an absolute offset within `message`. An offset past
    /// the end yields an exhausted cursor rather than an error.
    pub fn at(message: &'a [u8], offset: usize) -> Self {
        Self {
            message,
            pos: offset.min(message.len()),
            end: message.len(),
        }
    }

    /// Fresh cursor over the whole message, positioned at `offset`. Any
    /// limit on `self` does not carry over.
    pub fn seek(&self, offset: usize) -> Self {
        Self::at(self.message, offset)
    }

    /// Cursor over the next `len` bytes only. `self` is not moved.
    pub fn limit(&self, len: usize) -> Result<Self, DecodeError> {
        if self.remaining() < len {
            return Err(DecodeError::Malformed);
        }
        Ok(Self {
            message: self.message,
            pos: self.pos,
            end: self.pos + len,
        })
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.end - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Moves forward by `n` bytes and returns the bytes skipped.
    pub fn advance(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        if self.remaining() < n {
            return Err(DecodeError::Malformed);
        }
        let start = self.pos;
        self.pos += n;
        Ok(&self.message[start..self.pos])
    }

    /// Reads the next byte without consuming it.
    pub fn peek_u8(&self) -> Option<u8> {
        if self.is_empty() {
            return None;
        }
        self.message.get(self.pos).copied()
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.advance(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
        let bytes = self.read_array::<2>()?;
        Ok(u16::from_be_bytes(bytes))
    }

    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        let bytes = self.read_array::<4>()?;
        Ok(u32::from_be_bytes(bytes))
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.advance(N)?);
        Ok(out)
    }
}
