//! The single seam between the row codec and the pixel representation.

use enum_dispatch::enum_dispatch;
use image::{GrayImage, RgbaImage};

/// Maps a pixel to the one channel byte the codec may read or write.
///
/// The framing and striding logic is written once against this trait, the
/// implementations decide which byte of a pixel is addressable.
#[enum_dispatch]
pub trait ChannelAccess {
    /// width and height of the pixel grid
    fn dimensions(&self) -> (u32, u32);

    /// the addressable channel byte at (x, y)
    fn channel(&self, x: u32, y: u32) -> u8;

    /// overwrites the addressable channel byte at (x, y), every other
    /// channel of that pixel keeps its value
    fn set_channel(&mut self, x: u32, y: u32, value: u8);
}

impl ChannelAccess for GrayImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn channel(&self, x: u32, y: u32) -> u8 {
        self.get_pixel(x, y).0[0]
    }

    fn set_channel(&mut self, x: u32, y: u32, value: u8) {
        self.get_pixel_mut(x, y).0[0] = value;
    }
}

/// Color pixels expose only their alpha byte, the color channels are never
/// part of the carrier row format.
impl ChannelAccess for RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn channel(&self, x: u32, y: u32) -> u8 {
        self.get_pixel(x, y).0[3]
    }

    fn set_channel(&mut self, x: u32, y: u32, value: u8) {
        self.get_pixel_mut(x, y).0[3] = value;
    }
}
