pub mod find;
pub mod find_raw;
pub mod hide;
