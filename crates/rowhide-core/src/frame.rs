//! The frame is the header written ahead of the payload in the carrier row:
//! one flag byte, the payload length as a minimal little-endian integer and
//! a zero terminator.

use crate::error::{EncodeError, FormatError};

/// Marks the end of the length field within a frame.
pub const TERMINATOR: u8 = 0x00;

/// The header preceding the payload bytes within a carrier row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    bytes: Vec<u8>,
}

/// What a parsed frame tells about the rest of the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedFrame {
    /// number of payload bytes announced by the length field
    pub message_len: usize,
    /// index of the first pixel after the terminator
    pub data_start: usize,
}

impl Frame {
    /// Builds the frame for `payload` targeting a row of `width` pixels.
    ///
    /// Fails with [`EncodeError::Capacity`] when the row cannot hold the
    /// frame, the payload and at least one pixel of spacing. The check lives
    /// here so that no pixel is ever touched for a payload that cannot fit.
    ///
    /// An empty payload builds the two byte frame `[flag, TERMINATOR]` with a
    /// zero width length field.
    pub fn build(width: usize, payload: &[u8], flag: u8) -> Result<Self, EncodeError> {
        let field_width = length_field_width(payload.len());
        if width <= payload.len() + field_width + 2 {
            return Err(EncodeError::Capacity {
                width,
                required: payload.len() + field_width + 2,
            });
        }

        let mut bytes = Vec::with_capacity(field_width + 2);
        bytes.push(flag);
        bytes.extend_from_slice(&(payload.len() as u64).to_le_bytes()[..field_width]);
        bytes.push(TERMINATOR);

        Ok(Self { bytes })
    }

    /// Parses the frame from the head of a carrier row and returns the
    /// announced payload length together with the index where the payload
    /// bytes start.
    pub fn parse(row: &[u8], flag: u8) -> Result<ParsedFrame, FormatError> {
        let Some(&first) = row.first() else {
            return Err(FormatError::EmptyRow);
        };
        if first != flag {
            return Err(FormatError::MissingFlag {
                expected: flag,
                found: first,
            });
        }

        let terminator = row[1..]
            .iter()
            .position(|&b| b == TERMINATOR)
            .map(|p| p + 1)
            .ok_or(FormatError::UnterminatedLength)?;

        let field = &row[1..terminator];
        if field.len() > 8 {
            return Err(FormatError::OversizedLength { bytes: field.len() });
        }
        let mut raw = [0u8; 8];
        raw[..field.len()].copy_from_slice(field);
        let message_len = u64::from_le_bytes(raw) as usize;
        if message_len == 0 {
            return Err(FormatError::EmptyMessage);
        }

        Ok(ParsedFrame {
            message_len,
            data_start: terminator + 1,
        })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Minimal number of bytes representing `len` as an unsigned little-endian
/// integer. Zero takes zero bytes.
fn length_field_width(len: usize) -> usize {
    let bits = usize::BITS - len.leading_zeros();
    bits.div_ceil(8) as usize
}
