use std::process::Stdio;
use std::time::Duration;

use log::debug;
use tokio::process::Command;
use url::Url;

use crate::model::config::FetcherConfig;
use crate::utils::constants::{CONSTANTS, PAGE_TITLE_ESCAPES};
use crate::utils::youtube_url::extract_video_id;

/// One way of getting the display title of a video.
/// Implementations swallow their failures and return `None`.
pub trait TitleStrategy {
    fn name(&self) -> &str;
    fn fetch_title(&self, youtube_url: &str, video_id: &str) -> Option<String>;
}

fn non_empty_title(title: &str) -> Option<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}

pub struct YtDlpTitleStrategy {
    executable: String,
    timeout: Duration,
}

impl YtDlpTitleStrategy {
    pub fn new(executable: &str, timeout: Duration) -> Self {
        Self { executable: executable.to_string(), timeout }
    }

    async fn run(&self, youtube_url: &str) -> Option<String> {
        let child = Command::new(&self.executable)
            .args(["--get-title", "--no-playlist", youtube_url])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn();
        let child = match child {
            Ok(child) => child,
            Err(err) => {
                debug!("cant start {}: {err}", self.executable);
                return None;
            }
        };
        // on timeout the child is dropped and killed
        match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) if output.status.success() => non_empty_title(&String::from_utf8_lossy(&output.stdout)),
            Ok(Ok(output)) => {
                debug!("{} exited with {}", self.executable, output.status);
                None
            }
            Ok(Err(err)) => {
                debug!("{} failed: {err}", self.executable);
                None
            }
            Err(_) => {
                debug!("{} timed out after {}s", self.executable, self.timeout.as_secs_f32());
                None
            }
        }
    }
}

impl TitleStrategy for YtDlpTitleStrategy {
    fn name(&self) -> &str {
        "yt-dlp"
    }

    fn fetch_title(&self, youtube_url: &str, _video_id: &str) -> Option<String> {
        let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
            Ok(runtime) => runtime,
            Err(err) => {
                debug!("cant create runtime: {err}");
                return None;
            }
        };
        runtime.block_on(self.run(youtube_url))
    }
}

/// Takes the first `"title":"..."` fragment of the watch page.
pub fn extract_page_title(body: &str) -> Option<String> {
    let captures = CONSTANTS.re_page_title.captures(body)?;
    let title = PAGE_TITLE_ESCAPES.iter()
        .fold(captures[1].to_string(), |title, (escaped, plain)| title.replace(escaped, plain));
    Some(title)
}

pub struct PageScrapeTitleStrategy {
    watch_url: String,
    timeout: Duration,
}

impl PageScrapeTitleStrategy {
    pub fn new(watch_url: &str, timeout: Duration) -> Self {
        Self { watch_url: watch_url.to_string(), timeout }
    }

    fn download_page(&self, video_id: &str) -> Result<String, String> {
        let mut url = Url::parse(&self.watch_url).map_err(|err| format!("malformed watch url {}: {err}", self.watch_url))?;
        url.query_pairs_mut().append_pair("v", video_id);
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|err| err.to_string())?;
        match client.get(url).send() {
            Ok(response) => {
                if response.status().is_success() {
                    response.text().map_err(|err| err.to_string())
                } else {
                    Err(format!("Request failed: {}", response.status()))
                }
            }
            Err(err) => Err(err.to_string())
        }
    }
}

impl TitleStrategy for PageScrapeTitleStrategy {
    fn name(&self) -> &str {
        "page"
    }

    fn fetch_title(&self, _youtube_url: &str, video_id: &str) -> Option<String> {
        match self.download_page(video_id) {
            Ok(body) => extract_page_title(&body),
            Err(err) => {
                debug!("cant download watch page for {video_id}: {err}");
                None
            }
        }
    }
}

/// Runs the strategies in order and returns the first title found.
pub struct TitleFetcher {
    strategies: Vec<Box<dyn TitleStrategy>>,
}

impl TitleFetcher {
    pub fn new(strategies: Vec<Box<dyn TitleStrategy>>) -> Self {
        Self { strategies }
    }

    pub fn from_config(cfg: &FetcherConfig) -> Self {
        Self::new(vec![
            Box::new(YtDlpTitleStrategy::new(&cfg.ytdlp_executable, Duration::from_secs(cfg.ytdlp_timeout_secs))),
            Box::new(PageScrapeTitleStrategy::new(&cfg.watch_url, Duration::from_secs(cfg.http_timeout_secs))),
        ])
    }

    pub fn fetch(&self, youtube_url: &str) -> Option<String> {
        let Some(video_id) = extract_video_id(youtube_url) else {
            debug!("no video id in {youtube_url}");
            return None;
        };
        self.strategies.iter().find_map(|strategy| {
            let title = strategy.fetch_title(youtube_url, &video_id).and_then(|title| non_empty_title(&title));
            match &title {
                Some(value) => debug!("{} found title {value:?}", strategy.name()),
                None => debug!("{} found no title", strategy.name()),
            }
            title
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    use crate::processing::title_fetcher::{extract_page_title, TitleFetcher, TitleStrategy, YtDlpTitleStrategy};

    struct FixedStrategy {
        title: Option<&'static str>,
        calls: Rc<Cell<usize>>,
    }

    impl TitleStrategy for FixedStrategy {
        fn name(&self) -> &str {
            "fixed"
        }

        fn fetch_title(&self, _youtube_url: &str, video_id: &str) -> Option<String> {
            assert_eq!(video_id, "dQw4w9WgXcQ");
            self.calls.set(self.calls.get() + 1);
            self.title.map(String::from)
        }
    }

    fn build_fetcher(titles: &[Option<&'static str>]) -> (TitleFetcher, Vec<Rc<Cell<usize>>>) {
        let counters: Vec<Rc<Cell<usize>>> = titles.iter().map(|_| Rc::new(Cell::new(0))).collect();
        let strategies = titles.iter().zip(&counters)
            .map(|(title, calls)| Box::new(FixedStrategy { title: *title, calls: Rc::clone(calls) }) as Box<dyn TitleStrategy>)
            .collect();
        (TitleFetcher::new(strategies), counters)
    }

    #[test]
    fn test_first_success_short_circuits() {
        let (fetcher, calls) = build_fetcher(&[Some("Rick Astley - Never Gonna Give You Up"), Some("other")]);
        assert_eq!(fetcher.fetch("https://youtu.be/dQw4w9WgXcQ"), Some("Rick Astley - Never Gonna Give You Up".to_string()));
        assert_eq!(calls[0].get(), 1);
        assert_eq!(calls[1].get(), 0);
    }

    #[test]
    fn test_falls_back_on_failure_and_blank_title() {
        let (fetcher, calls) = build_fetcher(&[None, Some("  "), Some("Imagine")]);
        assert_eq!(fetcher.fetch("https://www.youtube.com/watch?v=dQw4w9WgXcQ"), Some("Imagine".to_string()));
        assert!(calls.iter().all(|c| c.get() == 1));

        let (fetcher, _) = build_fetcher(&[None, None]);
        assert_eq!(fetcher.fetch("https://youtu.be/dQw4w9WgXcQ"), None);
    }

    #[test]
    fn test_unrecognized_url_runs_no_strategy() {
        let (fetcher, calls) = build_fetcher(&[Some("title")]);
        assert_eq!(fetcher.fetch("https://vimeo.com/123456789"), None);
        assert_eq!(calls[0].get(), 0);
    }

    #[test]
    fn test_extract_page_title() {
        let body = r#"<script>var ytInitialPlayerResponse = {"videoDetails":{"videoId":"x","title":"Simon & Garfunkel - Mrs. Robinson \/ Live","lengthSeconds":"240"},"title":"second"}</script>"#;
        assert_eq!(extract_page_title(body), Some("Simon & Garfunkel - Mrs. Robinson / Live".to_string()));
        assert_eq!(extract_page_title("<html><title>YouTube</title></html>"), None);
    }

    #[test]
    fn test_ytdlp_missing_executable() {
        let strategy = YtDlpTitleStrategy::new("add-song-test-missing-yt-dlp", Duration::from_secs(1));
        assert_eq!(strategy.fetch_title("https://youtu.be/dQw4w9WgXcQ", "dQw4w9WgXcQ"), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_ytdlp_script() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let write_script = |name: &str, body: &str| {
            let path = dir.path().join(name);
            fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path.to_str().unwrap().to_string()
        };

        let echo = write_script("echo-title", "echo \"  Rick Astley - $3  \"");
        let strategy = YtDlpTitleStrategy::new(&echo, Duration::from_secs(5));
        assert_eq!(strategy.fetch_title("Never Gonna Give You Up", "dQw4w9WgXcQ"), Some("Rick Astley - Never Gonna Give You Up".to_string()));

        let failing = write_script("fail", "echo title; exit 3");
        let strategy = YtDlpTitleStrategy::new(&failing, Duration::from_secs(5));
        assert_eq!(strategy.fetch_title("https://youtu.be/dQw4w9WgXcQ", "dQw4w9WgXcQ"), None);

        let sleeping = write_script("sleep", "sleep 5; echo late");
        let strategy = YtDlpTitleStrategy::new(&sleeping, Duration::from_millis(200));
        assert_eq!(strategy.fetch_title("https://youtu.be/dQw4w9WgXcQ", "dQw4w9WgXcQ"), None);
    }
}
