use std::path::Path;

use clap::error::ErrorKind;
use clap::Parser;
use log::debug;

use crate::model::config::Config;
use crate::processing::add_song::{add_song, AddSongRequest};
use crate::processing::prompter::ConsolePrompter;
use crate::processing::title_fetcher::TitleFetcher;
use crate::utils::config_reader::read_config;
use crate::utils::constants::DEFAULT_LOG_LEVEL;

mod add_song_error;
mod model;
mod processing;
mod repository;
mod utils;

#[derive(Parser, Debug)]
#[command(name = "add_song", version, about = "Add a song to the DJ set from a YouTube link", long_about = None,
after_help = "Example:\n  add_song 'https://www.youtube.com/watch?v=dQw4w9WgXcQ' 'Rock'\n  add_song 'https://www.youtube.com/watch?v=dQw4w9WgXcQ' 'Rock' 'Rick Astley' 'Never Gonna Give You Up'")]
struct Args {
    /// YouTube video url
    youtube_url: String,

    /// Category to add the song to, matched case-insensitively
    category: String,

    /// Artist, taken from the video title when omitted
    artist: Option<String>,

    /// Song title, taken from the video title when omitted
    song_title: Option<String>,

    /// The playlist json file
    #[arg(short = 'f', long = "file")]
    songs_file: Option<String>,

    /// The config file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// The yt-dlp executable
    #[arg(long = "yt-dlp", value_name = "EXECUTABLE")]
    ytdlp: Option<String>,

    /// Timeout in seconds for each title lookup
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Log level, overrides the config and RUST_LOG
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            if is_help_request(err.kind()) {
                err.exit();
            }
            let _ = err.print();
            std::process::exit(1);
        }
    };

    let config_result = read_config(args.config.as_deref());
    init_logger(resolve_log_level(&args, config_result.as_ref().ok()));
    debug!("add_song {} build {}", env!("CARGO_PKG_VERSION"), option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("?"));

    let mut cfg = match config_result {
        Ok(cfg) => cfg,
        Err(err) => exit!("{err}"),
    };
    apply_args(&mut cfg, &args);

    let request = AddSongRequest {
        youtube_url: args.youtube_url,
        category: args.category,
        artist: args.artist,
        title: args.song_title,
    };
    let fetcher = TitleFetcher::from_config(&cfg.fetcher);
    let mut prompter = ConsolePrompter::stdio();
    match add_song(&request, Path::new(&cfg.songs_file), &fetcher, &mut prompter) {
        Ok(added) => debug!("added {} to '{}' in {}", added.song.youtube_url, added.category, cfg.songs_file),
        Err(err) => exit!("{err}"),
    }
}

const fn is_help_request(kind: ErrorKind) -> bool {
    matches!(kind, ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

/// Command line level first, then the config file, `RUST_LOG` is the fallback in `init_logger`.
fn resolve_log_level<'a>(args: &'a Args, cfg: Option<&'a Config>) -> Option<&'a str> {
    args.log_level.as_deref().or_else(|| cfg.and_then(|c| c.log_level.as_deref()))
}

fn apply_args(cfg: &mut Config, args: &Args) {
    if let Some(songs_file) = &args.songs_file {
        songs_file.clone_into(&mut cfg.songs_file);
    }
    if let Some(executable) = &args.ytdlp {
        executable.clone_into(&mut cfg.fetcher.ytdlp_executable);
    }
    if let Some(secs) = args.timeout {
        cfg.set_fetch_timeout(secs);
    }
}

fn init_logger(log_level: Option<&str>) {
    let env = env_logger::Env::default().default_filter_or(DEFAULT_LOG_LEVEL);
    let mut log_builder = env_logger::Builder::from_env(env);
    if let Some(level) = log_level {
        log_builder.parse_filters(level);
    }
    log_builder
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();
}
