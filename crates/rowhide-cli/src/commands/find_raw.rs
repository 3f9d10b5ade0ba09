use std::path::PathBuf;

use clap::Args;
use rowhide_core::CodecOptions;

use crate::CliResult;

/// Dumps the raw bytes of the carrier row, no frame interpretation
#[derive(Args, Debug)]
pub struct FindRawArgs {
    /// Source image that contains the carrier row
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Raw row bytes will be stored as binary file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,
}

impl FindRawArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        rowhide_core::api::find_raw::prepare()
            .with_options(options)
            .from_secret_file(self.media)
            .into_raw_file(self.output_file)
            .execute()
    }
}
