use crate::utils::{default_fetch_timeout_secs, default_songs_file, default_watch_url, default_ytdlp_executable};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetcherConfig {
    #[serde(default = "default_ytdlp_executable")]
    pub ytdlp_executable: String,
    #[serde(default = "default_fetch_timeout_secs")]
    pub ytdlp_timeout_secs: u64,
    #[serde(default = "default_fetch_timeout_secs")]
    pub http_timeout_secs: u64,
    #[serde(default = "default_watch_url")]
    pub watch_url: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            ytdlp_executable: default_ytdlp_executable(),
            ytdlp_timeout_secs: default_fetch_timeout_secs(),
            http_timeout_secs: default_fetch_timeout_secs(),
            watch_url: default_watch_url(),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_songs_file")]
    pub songs_file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    #[serde(default)]
    pub fetcher: FetcherConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            songs_file: default_songs_file(),
            log_level: None,
            fetcher: FetcherConfig::default(),
        }
    }
}

impl Config {
    /// One timeout for both fetch strategies, as given on the command line.
    pub fn set_fetch_timeout(&mut self, secs: u64) {
        self.fetcher.ytdlp_timeout_secs = secs;
        self.fetcher.http_timeout_secs = secs;
    }
}
