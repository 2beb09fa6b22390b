use std::path::Path;

use log::debug;

use crate::add_song_error::{create_add_song_error_result, AddSongError, AddSongErrorKind};
use crate::model::config::Config;
use crate::utils::constants::CONFIG_FILE;
use crate::utils::file_utils::{file_reader, open_file, path_exists};

fn read_config_file(config_file: &Path) -> Result<Config, AddSongError> {
    let file = match open_file(config_file) {
        Ok(file) => file,
        Err(err) => return create_add_song_error_result!(AddSongErrorKind::Config, "cant read config file {}: {err}", config_file.display()),
    };
    match serde_yaml::from_reader::<_, Config>(file_reader(file)) {
        Ok(config) => {
            debug!("config loaded from {}", config_file.display());
            Ok(config)
        }
        Err(err) => create_add_song_error_result!(AddSongErrorKind::Config, "cant parse config file {}: {err}", config_file.display()),
    }
}

/// Reads the given config file. Without an explicit file the default
/// `add_song.yml` is used when it exists, otherwise built in defaults.
pub fn read_config(config_file: Option<&str>) -> Result<Config, AddSongError> {
    match config_file {
        Some(file) => read_config_file(Path::new(file)),
        None => {
            let default_file = Path::new(CONFIG_FILE);
            if path_exists(default_file) {
                read_config_file(default_file)
            } else {
                debug!("no config file, using defaults");
                Ok(Config::default())
            }
        }
    }
}
