//! The row codec writes and reads the payload-bearing scanline.
//!
//! Encoding randomizes the full target row, overwrites its head with the
//! frame and spreads the payload bytes at a fixed stride over the remaining
//! pixels. Decoding reads the row back through the same channel accessor,
//! parses the frame and re-samples the payload at that stride.

use log::debug;

use crate::error::{EncodeError, FormatError};
use crate::frame::Frame;
use crate::media::{ChannelAccess, ChannelMode};
use crate::DEFAULT_FLAG;

/// Options shared by all encode and decode entry points.
#[derive(Debug, Clone)]
pub struct CodecOptions {
    /// which channel of each pixel carries data
    pub mode: ChannelMode,

    /// the row holding the payload, `None` addresses the bottom row
    pub row: Option<u32>,

    /// first byte of the frame, marks the carrier row
    pub flag: u8,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            mode: ChannelMode::ColorWithAlpha,
            row: None,
            flag: DEFAULT_FLAG,
        }
    }
}

impl CodecOptions {
    /// The row these options address within `carrier`.
    pub fn target_row<C: ChannelAccess>(&self, carrier: &C) -> u32 {
        let (_, height) = carrier.dimensions();
        self.row.unwrap_or_else(|| height.saturating_sub(1))
    }
}

/// Embeds `payload` into row `row` of the carrier.
///
/// The whole row is filled with uniform random bytes first, so a carrier row
/// is statistically unrelated to the image content whether or not the payload
/// fills it. The frame lands at the row start, the payload bytes follow at a
/// fixed stride.
///
/// All guards run before the first pixel is mutated: a failing call leaves
/// the carrier untouched.
pub fn encode_row<C: ChannelAccess>(
    carrier: &mut C,
    row: u32,
    payload: &[u8],
    flag: u8,
) -> Result<(), EncodeError> {
    let (width, height) = carrier.dimensions();
    if row >= height {
        return Err(EncodeError::RowOutOfBounds { row, height });
    }
    if payload.is_empty() {
        return Err(EncodeError::EmptyPayload);
    }

    let frame = Frame::build(width as usize, payload, flag)?;
    let remaining = width as usize - frame.len();
    let stride = remaining / payload.len();
    if stride == 0 {
        return Err(EncodeError::StrideTooSmall {
            payload_len: payload.len(),
            remaining,
        });
    }
    debug!(
        "embedding {} payload bytes into row {row} at stride {stride}",
        payload.len()
    );

    for x in 0..width {
        carrier.set_channel(x, row, fastrand::u8(..));
    }
    for (x, &byte) in frame.as_bytes().iter().enumerate() {
        carrier.set_channel(x as u32, row, byte);
    }
    let mut x = frame.len();
    for &byte in payload {
        carrier.set_channel(x as u32, row, byte);
        x += stride;
    }

    Ok(())
}

/// Recovers the payload embedded in row `row` of the carrier.
pub fn decode_row<C: ChannelAccess>(
    carrier: &C,
    row: u32,
    flag: u8,
) -> Result<Vec<u8>, FormatError> {
    let (width, height) = carrier.dimensions();
    if row >= height {
        return Err(FormatError::RowOutOfBounds { row, height });
    }

    let row_bytes: Vec<u8> = (0..width).map(|x| carrier.channel(x, row)).collect();
    let parsed = Frame::parse(&row_bytes, flag)?;
    let remaining = row_bytes.len() - parsed.data_start;
    let stride = remaining / parsed.message_len;
    if stride == 0 {
        return Err(FormatError::StrideTooSmall {
            message_len: parsed.message_len,
            remaining,
        });
    }
    debug!(
        "recovering {} bytes from row {row} at stride {stride}",
        parsed.message_len
    );

    Ok((0..parsed.message_len)
        .map(|i| row_bytes[parsed.data_start + i * stride])
        .collect())
}

/// Rows whose first channel byte equals the flag byte, the candidates for
/// decoding when the carrier row is unknown.
pub fn find_flagged_rows<C: ChannelAccess>(carrier: &C, flag: u8) -> Vec<u32> {
    let (width, height) = carrier.dimensions();
    if width == 0 {
        return Vec::new();
    }
    (0..height)
        .filter(|&y| carrier.channel(0, y) == flag)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgba, RgbaImage};

    const FLAG: u8 = 0x0A;

    /// every pixel gets a color derived from its coordinates, alpha opaque
    fn prepare_rgba_image(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            let i = (3 * x + 7 * y) as u8;
            Rgba([i, i.wrapping_add(1), i.wrapping_add(2), 255])
        })
    }

    #[test]
    fn should_round_trip_through_a_grey_carrier() {
        let mut carrier = GrayImage::new(100, 10);

        encode_row(&mut carrier, 9, b"HI", FLAG).unwrap();

        assert_eq!(decode_row(&carrier, 9, FLAG).unwrap(), b"HI");
    }

    #[test]
    fn should_place_frame_and_payload_at_documented_indices() {
        let mut carrier = GrayImage::new(100, 2);

        encode_row(&mut carrier, 0, b"HI", FLAG).unwrap();

        // frame [0x0A, 0x02, 0x00], stride (100 - 3) / 2 = 48
        assert_eq!(carrier.channel(0, 0), 0x0A);
        assert_eq!(carrier.channel(1, 0), 0x02);
        assert_eq!(carrier.channel(2, 0), 0x00);
        assert_eq!(carrier.channel(3, 0), b'H');
        assert_eq!(carrier.channel(51, 0), b'I');
    }

    #[test]
    fn should_round_trip_through_the_alpha_channel() {
        let mut carrier = prepare_rgba_image(64, 6);

        encode_row(&mut carrier, 5, b"KITTYKATZ", FLAG).unwrap();

        assert_eq!(decode_row(&carrier, 5, FLAG).unwrap(), b"KITTYKATZ");
    }

    #[test]
    fn should_leave_color_channels_untouched() {
        let plain = prepare_rgba_image(64, 6);
        let mut carrier = plain.clone();

        encode_row(&mut carrier, 5, b"KITTYKATZ", FLAG).unwrap();

        for x in 0..64 {
            let before = plain.get_pixel(x, 5).0;
            let after = carrier.get_pixel(x, 5).0;
            assert_eq!(before[..3], after[..3], "color drifted at column {x}");
        }
    }

    #[test]
    fn should_reject_a_foreign_flag_on_decode() {
        let mut carrier = GrayImage::new(100, 1);
        encode_row(&mut carrier, 0, b"HI", FLAG).unwrap();

        assert_eq!(
            decode_row(&carrier, 0, 0x0B).unwrap_err(),
            FormatError::MissingFlag {
                expected: 0x0B,
                found: FLAG
            }
        );
    }

    #[test]
    fn should_round_trip_at_stride_one() {
        // 16 payload bytes into 17 pixels behind the 3 byte frame
        let payload = [0x42u8; 16];
        let mut carrier = GrayImage::new(20, 1);

        encode_row(&mut carrier, 0, &payload, FLAG).unwrap();

        assert_eq!(decode_row(&carrier, 0, FLAG).unwrap(), payload);
    }

    #[test]
    fn should_not_touch_the_carrier_when_capacity_is_exceeded() {
        let plain = prepare_rgba_image(10, 3);
        let mut carrier = plain.clone();

        let result = encode_row(&mut carrier, 2, &[0x11; 32], FLAG);

        assert_eq!(
            result.unwrap_err(),
            EncodeError::Capacity {
                width: 10,
                required: 35
            }
        );
        assert_eq!(carrier, plain, "failed encode must not mutate the carrier");
    }

    #[test]
    fn should_reject_an_empty_payload_without_touching_the_carrier() {
        let plain = GrayImage::new(10, 2);
        let mut carrier = plain.clone();

        let result = encode_row(&mut carrier, 1, b"", FLAG);

        assert_eq!(result.unwrap_err(), EncodeError::EmptyPayload);
        assert_eq!(carrier, plain);
    }

    #[test]
    fn should_reject_a_row_outside_the_carrier() {
        let mut carrier = GrayImage::new(10, 2);

        assert_eq!(
            encode_row(&mut carrier, 2, b"H", FLAG).unwrap_err(),
            EncodeError::RowOutOfBounds { row: 2, height: 2 }
        );
        assert_eq!(
            decode_row(&carrier, 7, FLAG).unwrap_err(),
            FormatError::RowOutOfBounds { row: 7, height: 2 }
        );
    }

    #[test]
    fn should_reject_a_length_that_cannot_fit_the_row() {
        // a row claiming 200 payload bytes in 7 remaining pixels
        let mut carrier = GrayImage::new(10, 1);
        carrier.put_pixel(0, 0, Luma([FLAG]));
        carrier.put_pixel(1, 0, Luma([200]));
        carrier.put_pixel(2, 0, Luma([0x00]));

        assert_eq!(
            decode_row(&carrier, 0, FLAG).unwrap_err(),
            FormatError::StrideTooSmall {
                message_len: 200,
                remaining: 7
            }
        );
    }

    #[test]
    fn should_find_rows_marked_with_the_flag() {
        let mut carrier = GrayImage::new(30, 8);
        carrier.put_pixel(0, 2, Luma([FLAG]));
        encode_row(&mut carrier, 6, b"meow", FLAG).unwrap();

        assert_eq!(find_flagged_rows(&carrier, FLAG), vec![2, 6]);
    }

    #[test]
    fn decoding_a_plain_row_reports_the_missing_flag() {
        let carrier = GrayImage::new(30, 3);

        assert_eq!(
            decode_row(&carrier, 2, FLAG).unwrap_err(),
            FormatError::MissingFlag {
                expected: FLAG,
                found: 0x00
            }
        );
    }
}
