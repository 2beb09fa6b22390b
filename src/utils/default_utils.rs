use crate::utils::constants::{DEFAULT_FETCH_TIMEOUT_SECS, SONGS_FILE, YOUTUBE_WATCH_URL, YTDLP_EXECUTABLE};

pub(crate) fn default_songs_file() -> String { String::from(SONGS_FILE) }

pub(crate) fn default_ytdlp_executable() -> String { String::from(YTDLP_EXECUTABLE) }

pub(crate) fn default_watch_url() -> String { String::from(YOUTUBE_WATCH_URL) }

pub(crate) const fn default_fetch_timeout_secs() -> u64 { DEFAULT_FETCH_TIMEOUT_SECS }
