pub mod constants;
mod default_utils;
pub mod config_reader;
pub mod file_utils;
pub mod youtube_url;

pub use self::default_utils::*;
