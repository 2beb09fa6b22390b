use std::fs::File;
use std::io::{ErrorKind, Write};
use std::path::Path;

use log::debug;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::add_song_error::{create_add_song_error_result, AddSongError, AddSongErrorKind};
use crate::model::playlist::PlaylistDocument;
use crate::utils::file_utils::{file_reader, file_writer, open_file};

pub(crate) fn load_playlist(file_path: &Path) -> Result<PlaylistDocument, AddSongError> {
    let file = match open_file(file_path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return create_add_song_error_result!(AddSongErrorKind::NotFound, "Error: {} not found", file_path.display());
        }
        Err(err) => {
            return create_add_song_error_result!(AddSongErrorKind::Io, "Error: cant read {}: {err}", file_path.display());
        }
    };
    match serde_json::from_reader::<_, PlaylistDocument>(file_reader(file)) {
        Ok(doc) => {
            debug!("loaded playlist {}", file_path.display());
            Ok(doc)
        }
        Err(err) if err.is_io() => create_add_song_error_result!(AddSongErrorKind::Io, "Error: cant read {}: {err}", file_path.display()),
        Err(err) => {
            debug!("json error in {}: {err}", file_path.display());
            create_add_song_error_result!(AddSongErrorKind::InvalidJson, "Error: {} is not valid JSON", file_path.display())
        }
    }
}

fn write_playlist(file_path: &Path, doc: &PlaylistDocument) -> std::io::Result<()> {
    let mut writer = file_writer(File::create(file_path)?);
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"  "));
    doc.serialize(&mut serializer)?;
    writer.flush()
}

/// Writes the whole document with two space indentation, non ascii characters are written as is.
pub(crate) fn save_playlist(file_path: &Path, doc: &PlaylistDocument) -> Result<(), AddSongError> {
    match write_playlist(file_path, doc) {
        Ok(()) => {
            debug!("saved playlist {}", file_path.display());
            Ok(())
        }
        Err(err) => create_add_song_error_result!(AddSongErrorKind::Io, "Error: cant write {}: {err}", file_path.display()),
    }
}
