//! # Rowhide Core API
//!
//! Hides a byte payload inside a single scanline of a raster image and
//! recovers it from there later. One row of the carrier is filled with
//! random noise, a small frame (flag byte, payload length, terminator)
//! lands at the row start and the payload bytes are spread over the rest of
//! the row at a fixed stride.
//!
//! There are 3 entry points, each available as a fluent builder:
//! - [`api::hide`] for embedding a payload into an image
//! - [`api::find`] for recovering a payload from an image
//! - [`api::find_raw`] for dumping the raw bytes of a carrier row
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```no_run
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//!
//! rowhide_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_image("base_images/carrier.png")
//!     .with_output(temp_dir.path().join("image-with-a-message-inside.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//! ```
//!
//! ## Recover a message from an image
//!
//! ```no_run
//! let payload = rowhide_core::api::find::prepare()
//!     .from_secret_file("memes/image-with-a-message-inside.png")
//!     .execute()
//!     .expect("Failed to recover message from image");
//! ```
//!
//! ## Drive the codec directly on an in-memory image
//!
//! ```rust
//! use image::GrayImage;
//! use rowhide_core::codec::{decode_row, encode_row};
//! use rowhide_core::DEFAULT_FLAG;
//!
//! let mut carrier = GrayImage::new(64, 4);
//! encode_row(&mut carrier, 3, b"purr", DEFAULT_FLAG).unwrap();
//!
//! let recovered = decode_row(&carrier, 3, DEFAULT_FLAG).unwrap();
//! assert_eq!(recovered, b"purr");
//! ```

pub mod api;
pub mod codec;
pub mod commands;
pub mod error;
pub mod frame;
pub mod media;
pub mod payload;
pub mod result;

pub use crate::codec::{decode_row, encode_row, find_flagged_rows, CodecOptions};
pub use crate::error::{EncodeError, FormatError, RowhideError};
pub use crate::frame::{Frame, ParsedFrame};
pub use crate::media::{Carrier, ChannelAccess, ChannelMode, Persist};
pub use crate::payload::PayloadSource;
pub use crate::result::Result;

/// Default first byte of the frame, marks the carrier row.
pub const DEFAULT_FLAG: u8 = 0x0A;
