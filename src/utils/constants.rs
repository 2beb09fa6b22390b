use regex::Regex;
use std::sync::LazyLock;

pub const SONGS_FILE: &str = "songs.json";
pub const CONFIG_FILE: &str = "add_song.yml";

pub const YTDLP_EXECUTABLE: &str = "yt-dlp";
pub const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const YOUTUBE_HOSTS: &[&str] = &["www.youtube.com", "youtube.com"];
pub const YOUTUBE_SHORT_HOST: &str = "youtu.be";

/// Escapes found in the inline player json of the watch page.
pub const PAGE_TITLE_ESCAPES: &[(&str, &str)] = &[("\\u0026", "&"), ("\\/", "/")];

pub struct TitlePattern {
    pub name: &'static str,
    pub regex: Regex,
    pub reversed: bool,
}

pub struct Constants {
    pub re_page_title: Regex,
    pub title_patterns: Vec<TitlePattern>,
}

pub static CONSTANTS: LazyLock<Constants> = LazyLock::new(||
    Constants {
        re_page_title: Regex::new(r#""title":"([^"]+)""#).unwrap(),
        // order matters, the first match wins
        title_patterns: vec![
            TitlePattern {
                name: "artist_dash_song",
                regex: Regex::new(r"(?i)^(.+?)\s*[-–—]\s*(.+?)(?:\s*\(.*\))?(?:\s*\[.*\])?$").unwrap(),
                reversed: false,
            },
            TitlePattern {
                name: "artist_colon_song",
                regex: Regex::new(r"(?i)^(.+?)\s*[:|]\s*(.+?)(?:\s*\(.*\))?(?:\s*\[.*\])?$").unwrap(),
                reversed: false,
            },
            TitlePattern {
                name: "quoted_song_by_artist",
                regex: Regex::new(r#"(?i)^"(.+?)"\s+by\s+(.+?)(?:\s*\(.*\))?$"#).unwrap(),
                reversed: true,
            },
        ],
    }
);
