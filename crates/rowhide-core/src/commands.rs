//! Path level operations, the entry points used by the CLI.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::codec::{decode_row, encode_row, find_flagged_rows, CodecOptions};
use crate::error::{FormatError, RowhideError};
use crate::media::{Carrier, ChannelAccess, Persist};
use crate::result::Result;

/// Hides `payload` in one row of the carrier image and stores the result as
/// PNG under `write_to_file`.
///
/// `media` may name a folder instead of a file, then a random image inside
/// it becomes the base image.
pub fn hide(media: &Path, write_to_file: &Path, payload: &[u8], opts: &CodecOptions) -> Result<()> {
    let media = resolve_base_image(media)?;
    let mut carrier = Carrier::from_file(&media, opts.mode)?;
    let row = opts.target_row(&carrier);

    encode_row(&mut carrier, row, payload, opts.flag)?;
    carrier.save_as(write_to_file)
}

/// Recovers a payload from the carrier image.
///
/// With `scan` every row marked with the flag byte is tried and the first
/// one that decodes wins, otherwise only the row addressed by `opts` is
/// read.
pub fn find(media: &Path, opts: &CodecOptions, scan: bool) -> Result<Vec<u8>> {
    let carrier = Carrier::from_file(media, opts.mode)?;
    if !scan {
        return Ok(decode_row(&carrier, opts.target_row(&carrier), opts.flag)?);
    }

    for row in find_flagged_rows(&carrier, opts.flag) {
        match decode_row(&carrier, row, opts.flag) {
            Ok(payload) => {
                debug!("payload found in row {row}");
                return Ok(payload);
            }
            Err(e) => debug!("row {row} carries the flag byte but no payload: {e}"),
        }
    }

    Err(RowhideError::NoPayloadFound)
}

/// Dumps the raw channel bytes of the addressed row, no frame
/// interpretation is happening.
pub fn find_raw(media: &Path, opts: &CodecOptions) -> Result<Vec<u8>> {
    let carrier = Carrier::from_file(media, opts.mode)?;
    let (width, height) = carrier.dimensions();
    let row = opts.target_row(&carrier);
    if row >= height {
        return Err(FormatError::RowOutOfBounds { row, height }.into());
    }

    Ok((0..width).map(|x| carrier.channel(x, row)).collect())
}

/// A folder as media selects one random image file inside it.
fn resolve_base_image(media: &Path) -> Result<PathBuf> {
    if !media.is_dir() {
        return Ok(media.to_path_buf());
    }

    let candidates: Vec<PathBuf> = fs::read_dir(media)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .map(|e| matches!(e.to_lowercase().as_str(), "png" | "jpg" | "jpeg"))
                .unwrap_or(false)
        })
        .collect();

    let choice = fastrand::choice(candidates).ok_or(RowhideError::NoBaseImage)?;
    info!("using {} as base image", choice.display());

    Ok(choice)
}
