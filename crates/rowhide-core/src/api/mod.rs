//! Fluent builder APIs on top of the [`crate::commands`] operations.

pub mod find;
pub mod find_raw;
pub mod hide;

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::RowhideError;
use crate::result::Result;

pub(crate) fn write_payload(destination: &Path, payload: &[u8]) -> Result<()> {
    let mut file =
        File::create(destination).map_err(|source| RowhideError::WriteError { source })?;
    file.write_all(payload)
        .map_err(|source| RowhideError::WriteError { source })
}
