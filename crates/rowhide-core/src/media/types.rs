use std::fs::File;
use std::path::Path;

use enum_dispatch::enum_dispatch;
pub use image::{GrayImage, RgbaImage};
use log::error;

use crate::error::RowhideError;
use crate::media::channels::ChannelAccess;
use crate::result::Result;

use super::Persist;

/// Which channel of a pixel the codec may address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelMode {
    /// one intensity byte per pixel (greyscale)
    Intensity,
    /// the alpha byte of a color pixel, the color channels stay untouched
    ColorWithAlpha,
}

/// A carrier image holding (or about to hold) one hidden payload row.
#[enum_dispatch(ChannelAccess)]
#[derive(Debug, Clone)]
pub enum Carrier {
    Intensity(GrayImage),
    ColorWithAlpha(RgbaImage),
}

impl Carrier {
    /// Opens an image file and converts it to the requested channel mode.
    pub fn from_file(f: &Path, mode: ChannelMode) -> Result<Self> {
        let Some(ext) = f.extension() else {
            return Err(RowhideError::UnsupportedMedia);
        };
        let ext = ext.to_str().unwrap_or_default().to_lowercase();
        match ext.as_str() {
            "png" | "jpg" | "jpeg" => {
                let img = image::open(f).map_err(|_e| RowhideError::InvalidImageMedia)?;

                Ok(match mode {
                    ChannelMode::Intensity => Self::Intensity(img.to_luma8()),
                    ChannelMode::ColorWithAlpha => Self::ColorWithAlpha(img.to_rgba8()),
                })
            }
            _ => Err(RowhideError::UnsupportedMedia),
        }
    }

    pub fn mode(&self) -> ChannelMode {
        match self {
            Carrier::Intensity(_) => ChannelMode::Intensity,
            Carrier::ColorWithAlpha(_) => ChannelMode::ColorWithAlpha,
        }
    }

    /// Carriers are always persisted as PNG, the row format does not survive
    /// lossy re-encoding.
    pub fn save_to_writer<W: std::io::Write + std::io::Seek>(&mut self, mut writer: W) -> Result<()> {
        match self {
            Carrier::Intensity(i) => i.write_to(&mut writer, image::ImageFormat::Png),
            Carrier::ColorWithAlpha(i) => i.write_to(&mut writer, image::ImageFormat::Png),
        }
        .map_err(|e| {
            error!("Error saving image: {e}");
            RowhideError::ImageEncodingError
        })
    }
}

impl Persist for Carrier {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            RowhideError::WriteError { source: e }
        })?;
        self.save_to_writer(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn should_reject_media_without_an_image_extension() {
        let result = Carrier::from_file(Path::new("Cargo.toml"), ChannelMode::Intensity);
        match result.err() {
            Some(RowhideError::UnsupportedMedia) => (),
            _ => panic!(),
        }
    }

    #[test]
    fn should_reject_a_broken_image_file() {
        let dir = TempDir::new().unwrap();
        let fake_png = dir.path().join("fake.png");
        std::fs::write(&fake_png, b"certainly not a png").unwrap();

        let result = Carrier::from_file(&fake_png, ChannelMode::ColorWithAlpha);
        match result.err() {
            Some(RowhideError::InvalidImageMedia) => (),
            _ => panic!(),
        }
    }

    #[test]
    fn should_save_and_reopen_in_both_modes() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("carrier.png");

        let mut carrier: Carrier = GrayImage::new(12, 5).into();
        carrier.save_as(&target).unwrap();

        let grey = Carrier::from_file(&target, ChannelMode::Intensity).unwrap();
        assert_eq!(grey.mode(), ChannelMode::Intensity);
        assert_eq!(grey.dimensions(), (12, 5));

        let color = Carrier::from_file(&target, ChannelMode::ColorWithAlpha).unwrap();
        assert_eq!(color.mode(), ChannelMode::ColorWithAlpha);
        assert_eq!(color.dimensions(), (12, 5));
    }
}
