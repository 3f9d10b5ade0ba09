use clap::{Parser, Subcommand, ValueEnum};

use rowhide_core::{ChannelMode, CodecOptions, DEFAULT_FLAG};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Channel mode to process the carrier image in
    #[arg(short = 'M', long, value_enum, default_value_t = Mode::Rgba)]
    pub mode: Mode,

    /// Row holding the payload, defaults to the bottom row
    #[arg(short = 'r', long, value_name = "row index")]
    pub row: Option<u32>,

    /// Flag byte marking the carrier row
    #[arg(short = 'f', long, value_name = "flag byte", default_value_t = DEFAULT_FLAG)]
    pub flag: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions {
            mode: self.mode.into(),
            row: self.row,
            flag: self.flag,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Find(find::FindArgs),
    FindRaw(find_raw::FindRawArgs),
}

/// Channel mode of the carrier image
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Mode {
    /// one intensity byte per pixel (greyscale)
    L,
    /// color pixels, the payload lives in the alpha channel
    Rgba,
}

impl From<Mode> for ChannelMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::L => ChannelMode::Intensity,
            Mode::Rgba => ChannelMode::ColorWithAlpha,
        }
    }
}
