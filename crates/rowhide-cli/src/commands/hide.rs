use std::path::PathBuf;

use clap::Args;
use rowhide_core::CodecOptions;

use crate::CliResult;

/// Hides a text message or a payload file in one row of an image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier image (PNG or JPEG), or a folder to pick a random base image from
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as file, always as PNG
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// File to hide in the image
    #[arg(
        short = 'd',
        long = "data",
        value_name = "data file",
        required_unless_present = "message",
        conflicts_with = "message"
    )]
    pub data_file: Option<PathBuf>,

    /// A text message that will be hidden
    #[arg(
        short,
        long,
        value_name = "text message",
        required_unless_present = "data_file"
    )]
    pub message: Option<String>,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        rowhide_core::api::hide::prepare()
            .with_options(options)
            .with_image(self.media)
            .with_output(self.write_to_file)
            .use_message(self.message)
            .use_payload_file(self.data_file)
            .execute()
    }
}
