use url::Url;

use crate::utils::constants::{YOUTUBE_HOSTS, YOUTUBE_SHORT_HOST};

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() { None } else { Some(value.to_string()) }
}

/// Extracts the video id from `watch?v=`, `/embed/` and `youtu.be/` urls.
pub fn extract_video_id(youtube_url: &str) -> Option<String> {
    let url = Url::parse(youtube_url).ok()?;
    let host = url.host_str()?;
    let path = url.path();

    if YOUTUBE_HOSTS.contains(&host) {
        if path == "/watch" {
            return url.query_pairs()
                .find(|(key, _)| key == "v")
                .and_then(|(_, value)| non_empty(&value));
        }
        if let Some(rest) = path.strip_prefix("/embed/") {
            return rest.split('/').next().and_then(non_empty);
        }
    } else if host == YOUTUBE_SHORT_HOST {
        return path.strip_prefix('/').and_then(non_empty);
    }
    None
}
