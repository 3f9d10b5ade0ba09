use std::io;

use thiserror::Error;

/// Errors raised while embedding a payload into a carrier row.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EncodeError {
    /// The row is too narrow for the frame plus the payload.
    #[error(
        "capacity exceeded: a row of {width} pixels cannot hold {required} bytes of frame and payload"
    )]
    Capacity { width: usize, required: usize },

    /// Payload bytes would be packed closer than one pixel apart.
    #[error(
        "stride too small: {payload_len} payload bytes do not fit into {remaining} pixels after the frame"
    )]
    StrideTooSmall { payload_len: usize, remaining: usize },

    /// The carrier has no row at the requested index.
    #[error("row {row} is outside of the carrier height {height}")]
    RowOutOfBounds { row: u32, height: u32 },

    /// An empty payload cannot be embedded.
    #[error("payload must not be empty")]
    EmptyPayload,
}

/// Errors raised while recovering a payload from a carrier row.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatError {
    /// The carrier row holds no pixels at all.
    #[error("the carrier row is empty")]
    EmptyRow,

    /// The first row byte is not the expected flag.
    #[error("flag byte not found: expected {expected:#04x}, found {found:#04x}")]
    MissingFlag { expected: u8, found: u8 },

    /// The length field never hit its terminator.
    #[error("no terminator found while scanning the length field")]
    UnterminatedLength,

    /// More length bytes than a u64 can carry, the row is corrupt.
    #[error("length field of {bytes} bytes exceeds the supported range")]
    OversizedLength { bytes: usize },

    /// The length field decodes to zero.
    #[error("decoded message length is zero")]
    EmptyMessage,

    /// The announced message length does not fit the rest of the row.
    #[error("stride too small: {message_len} announced bytes in {remaining} remaining pixels")]
    StrideTooSmall { message_len: usize, remaining: usize },

    /// The carrier has no row at the requested index.
    #[error("row {row} is outside of the carrier height {height}")]
    RowOutOfBounds { row: u32, height: u32 },
}

#[derive(Error, Debug)]
pub enum RowhideError {
    /// Represents an unsupported carrier media. For example, a movie file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure while embedding the payload into the carrier row
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// Represents a failure while parsing or re-sampling the carrier row
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: io::Error },

    /// Represents a failure to write the target file.
    #[error("Write error")]
    WriteError { source: io::Error },

    /// Represents a failure when encoding the output image.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("No payload set")]
    PayloadNotSet,

    /// Represents a scan over all flagged rows that recovered nothing.
    #[error("No hidden payload found")]
    NoPayloadFound,

    /// Represents a base image folder without a single usable image file.
    #[error("No image found in the base image folder")]
    NoBaseImage,
}
