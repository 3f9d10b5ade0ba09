use std::path::{Path, PathBuf};

use crate::codec::CodecOptions;
use crate::commands;
use crate::error::RowhideError;
use crate::result::Result;

pub fn prepare() -> FindApi {
    FindApi::default()
}

/// Fluent API for recovering a payload from a carrier image.
#[derive(Default, Debug)]
pub struct FindApi {
    secret_media: Option<PathBuf>,
    destination_file: Option<PathBuf>,
    scan: bool,
    options: CodecOptions,
}

impl FindApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the payload to be recovered
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// Also write the recovered payload to this file
    pub fn into_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    /// Try every row marked with the flag byte instead of only the
    /// configured row
    pub fn scan_all_rows(mut self, scan: bool) -> Self {
        self.scan = scan;
        self
    }

    /// Executes the recovery and returns the payload bytes
    pub fn execute(self) -> Result<Vec<u8>> {
        let Some(media) = self.secret_media else {
            return Err(RowhideError::CarrierNotSet);
        };

        let payload = commands::find(&media, &self.options, self.scan)?;
        if let Some(destination) = &self.destination_file {
            super::write_payload(destination, &payload)?;
        }

        Ok(payload)
    }
}
