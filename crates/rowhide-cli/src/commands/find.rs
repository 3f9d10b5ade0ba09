use std::path::PathBuf;

use clap::Args;
use rowhide_core::CodecOptions;

use crate::CliResult;

/// Recovers a hidden payload from an image
#[derive(Args, Debug)]
pub struct FindArgs {
    /// Source image that contains the hidden payload
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Write the recovered payload to this file instead of printing it
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,

    /// Try every row marked with the flag byte instead of only the configured row
    #[arg(long)]
    pub scan: bool,
}

impl FindArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let mut api = rowhide_core::api::find::prepare()
            .with_options(options)
            .from_secret_file(self.media)
            .scan_all_rows(self.scan);
        let print_payload = self.output_file.is_none();
        if let Some(output_file) = self.output_file {
            api = api.into_file(output_file);
        }

        let payload = api.execute()?;
        if print_payload {
            println!("{}", String::from_utf8_lossy(&payload));
        }

        Ok(())
    }
}
