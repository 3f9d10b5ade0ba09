pub mod channels;
pub mod types;

use std::path::Path;

pub use channels::ChannelAccess;
pub use types::{Carrier, ChannelMode};

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> crate::Result<()>;
}
