use std::path::{Path, PathBuf};

use crate::codec::CodecOptions;
use crate::commands;
use crate::error::RowhideError;
use crate::payload::PayloadSource;
use crate::result::Result;

pub fn prepare() -> HideApi {
    HideApi::default()
}

/// Fluent API for embedding a payload into a carrier image.
#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    payload_file: Option<PathBuf>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl HideApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// Hide this text message
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// Hide the raw bytes of this file
    pub fn with_payload_file<A: AsRef<Path>>(mut self, payload_file: A) -> Self {
        self.payload_file = Some(payload_file.as_ref().to_path_buf());
        self
    }

    pub fn use_payload_file(mut self, payload_file: Option<PathBuf>) -> Self {
        self.payload_file = payload_file;
        self
    }

    /// The carrier image, or a folder to pick a random base image from
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// The resulting image will be stored under this path, always as PNG
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Executes the embedding. A payload file takes precedence over a text
    /// message when both are set.
    pub fn execute(self) -> Result<()> {
        let Some(image) = self.image else {
            return Err(RowhideError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(RowhideError::TargetNotSet);
        };
        let source = match (self.payload_file, self.message) {
            (Some(file), _) => PayloadSource::File(file),
            (None, Some(text)) => PayloadSource::Text(text),
            (None, None) => return Err(RowhideError::PayloadNotSet),
        };

        let payload = source.resolve()?;
        commands::hide(&image, &output, &payload, &self.options)
    }
}
