use std::fs;
use std::path::PathBuf;

use crate::error::RowhideError;
use crate::result::Result;

/// Where the payload bytes come from.
///
/// Both variants resolve to one opaque byte sequence, the codec never cares
/// which one it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadSource {
    /// a literal text, embedded as its UTF-8 bytes
    Text(String),
    /// a file, embedded as its raw bytes
    File(PathBuf),
}

impl PayloadSource {
    pub fn resolve(&self) -> Result<Vec<u8>> {
        match self {
            PayloadSource::Text(text) => Ok(text.as_bytes().to_vec()),
            PayloadSource::File(path) => {
                fs::read(path).map_err(|source| RowhideError::ReadError { source })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn text_resolves_to_its_utf8_bytes() {
        let source = PayloadSource::Text("meow".into());

        assert_eq!(source.resolve().unwrap(), b"meow");
    }

    #[test]
    fn a_file_resolves_to_its_raw_bytes() {
        let dir = TempDir::new().unwrap();
        let secret = dir.path().join("secret.bin");
        fs::write(&secret, [0x00, 0xFF, 0x7F]).unwrap();

        let source = PayloadSource::File(secret);

        assert_eq!(source.resolve().unwrap(), [0x00, 0xFF, 0x7F]);
    }

    #[test]
    fn a_missing_file_reports_a_read_error() {
        let source = PayloadSource::File("no/such/payload.bin".into());

        match source.resolve().err() {
            Some(RowhideError::ReadError { .. }) => (),
            _ => panic!(),
        }
    }
}
