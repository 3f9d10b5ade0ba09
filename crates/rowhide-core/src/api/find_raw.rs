use std::path::{Path, PathBuf};

use crate::codec::CodecOptions;
use crate::commands;
use crate::error::RowhideError;
use crate::result::Result;

pub fn prepare() -> FindRawApi {
    FindRawApi::default()
}

/// Fluent API for dumping the raw bytes of a carrier row, without any frame
/// interpretation. Useful for inspecting what physically sits in the row.
#[derive(Default, Debug)]
pub struct FindRawApi {
    secret_media: Option<PathBuf>,
    destination_file: Option<PathBuf>,
    options: CodecOptions,
}

impl FindRawApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image whose row will be dumped
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// The raw row bytes will be stored as this binary file
    pub fn into_raw_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    /// Executes the dump and blocks until the file is written
    pub fn execute(self) -> Result<()> {
        let Some(media) = self.secret_media else {
            return Err(RowhideError::CarrierNotSet);
        };
        let Some(destination) = self.destination_file else {
            return Err(RowhideError::TargetNotSet);
        };

        let row = commands::find_raw(&media, &self.options)?;
        super::write_payload(&destination, &row)
    }
}
