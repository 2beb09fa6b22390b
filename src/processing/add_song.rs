use std::path::Path;

use log::debug;

use crate::add_song_error::{create_add_song_error_result, AddSongError, AddSongErrorKind};
use crate::model::playlist::{PlaylistDocument, Song};
use crate::processing::prompter::Prompter;
use crate::processing::title_fetcher::TitleFetcher;
use crate::processing::title_parser::parse_title;
use crate::repository::playlist_repository::{load_playlist, save_playlist};

const ARTIST_PROMPT: &str = "Enter artist name: ";
const TITLE_PROMPT: &str = "Enter song title: ";

#[derive(Debug, Clone, Default)]
pub struct AddSongRequest {
    pub youtube_url: String,
    pub category: String,
    pub artist: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedSong {
    pub song: Song,
    pub category: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Takes the given value, else the parsed one, else asks the operator.
fn resolve_value(given: Option<String>, parsed: Option<String>, prompter: &mut dyn Prompter, message: &str) -> String {
    given.or_else(|| non_empty(parsed)).unwrap_or_else(|| prompter.prompt(message))
}

fn resolve_artist_and_title(request: &AddSongRequest, fetcher: &TitleFetcher, prompter: &mut dyn Prompter) -> (String, String) {
    let artist = non_empty(request.artist.clone());
    let title = non_empty(request.title.clone());
    if let (Some(artist), Some(title)) = (&artist, &title) {
        return (artist.clone(), title.clone());
    }

    prompter.print("Fetching video information from YouTube...");
    let (parsed_artist, parsed_title) = match fetcher.fetch(&request.youtube_url) {
        Some(video_title) => {
            prompter.print(&format!("Video title: {video_title}"));
            parse_title(Some(&video_title))
        }
        None => {
            prompter.print("Could not fetch video title. Please enter manually:");
            (None, None)
        }
    };
    let artist = resolve_value(artist, parsed_artist, prompter, ARTIST_PROMPT);
    let title = resolve_value(title, parsed_title, prompter, TITLE_PROMPT);
    (artist, title)
}

fn resolve_category(doc: &mut PlaylistDocument, name: &str, prompter: &mut dyn Prompter) -> Result<usize, AddSongError> {
    if let Some(index) = doc.find_category(name) {
        return Ok(index);
    }
    prompter.print(&format!("Category '{name}' not found."));
    prompter.print("Available categories:");
    for category in doc.category_names() {
        prompter.print(&format!("  - {category}"));
    }
    let answer = prompter.prompt(&format!("\nCreate new category '{name}'? (y/n): "));
    if answer.trim().eq_ignore_ascii_case("y") {
        doc.create_category(name)
    } else {
        create_add_song_error_result!(AddSongErrorKind::Declined, "Category '{name}' not created")
    }
}

/// Adds one song to the playlist file, asking the operator for anything it cannot find out.
pub fn add_song(request: &AddSongRequest, songs_file: &Path, fetcher: &TitleFetcher, prompter: &mut dyn Prompter) -> Result<AddedSong, AddSongError> {
    let mut doc = load_playlist(songs_file)?;

    let (artist, title) = resolve_artist_and_title(request, fetcher, prompter);
    if artist.is_empty() || title.is_empty() {
        return create_add_song_error_result!(AddSongErrorKind::MissingField, "Error: Artist and song title are required");
    }

    let index = resolve_category(&mut doc, &request.category, prompter)?;
    let song = Song {
        title,
        artist,
        youtube_url: request.youtube_url.clone(),
    };
    doc.append_song(index, &song)?;
    save_playlist(songs_file, &doc)?;

    let category = doc.category_name(index).unwrap_or(request.category.as_str()).to_string();
    debug!("category '{category}' has {} songs", doc.songs(index).len());
    prompter.print(&format!("\n✓ Added '{}' by {} to category '{category}'", song.title, song.artist));
    Ok(AddedSong { song, category })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use serde_json::{json, Value};
    use tempfile::TempDir;

    use crate::add_song_error::AddSongErrorKind;
    use crate::processing::add_song::{add_song, AddSongRequest};
    use crate::processing::prompter::ScriptedPrompter;
    use crate::processing::title_fetcher::{TitleFetcher, TitleStrategy};

    const URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

    struct FixedTitle(Option<&'static str>);

    impl TitleStrategy for FixedTitle {
        fn name(&self) -> &str {
            "fixed"
        }

        fn fetch_title(&self, _youtube_url: &str, _video_id: &str) -> Option<String> {
            self.0.map(String::from)
        }
    }

    fn fetcher(title: Option<&'static str>) -> TitleFetcher {
        TitleFetcher::new(vec![Box::new(FixedTitle(title))])
    }

    fn songs_file() -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("songs.json");
        let doc = json!({
            "dj_set": {
                "categories": [
                    {"category": "Warm Up", "songs": [{"title": "Teardrop", "artist": "Massive Attack", "youtube_url": "https://youtu.be/u7K72X4eo_s"}]},
                    {"category": "80s Pop", "songs": []}
                ]
            }
        });
        fs::write(&path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();
        (dir, path)
    }

    fn read(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    fn request(category: &str, artist: Option<&str>, title: Option<&str>) -> AddSongRequest {
        AddSongRequest {
            youtube_url: URL.to_string(),
            category: category.to_string(),
            artist: artist.map(String::from),
            title: title.map(String::from),
        }
    }

    #[test]
    fn test_add_with_explicit_values() {
        let (_dir, path) = songs_file();
        let mut prompter = ScriptedPrompter::new(&[]);
        let added = add_song(&request("80s", Some("Rick Astley"), Some("Never Gonna Give You Up")), &path, &fetcher(None), &mut prompter).unwrap();

        assert_eq!(added.category, "80s Pop");
        assert!(prompter.prompts.is_empty());
        let confirmation = prompter.printed.last().unwrap();
        assert!(confirmation.contains("Never Gonna Give You Up"));
        assert!(confirmation.contains("Rick Astley"));

        let doc = read(&path);
        assert_eq!(doc["dj_set"]["categories"][0]["songs"].as_array().unwrap().len(), 1);
        assert_eq!(doc["dj_set"]["categories"][1]["songs"], json!([{
            "title": "Never Gonna Give You Up",
            "artist": "Rick Astley",
            "youtube_url": URL
        }]));
    }

    #[test]
    fn test_add_with_parsed_title() {
        let (_dir, path) = songs_file();
        let mut prompter = ScriptedPrompter::new(&[]);
        let added = add_song(&request("warm up", None, None), &path, &fetcher(Some("Rick Astley - Never Gonna Give You Up (Official Video)")), &mut prompter).unwrap();

        assert_eq!(added.song.artist, "Rick Astley");
        assert_eq!(added.song.title, "Never Gonna Give You Up");
        assert!(prompter.prompts.is_empty());
        assert_eq!(prompter.printed[0], "Fetching video information from YouTube...");
        assert_eq!(prompter.printed[1], "Video title: Rick Astley - Never Gonna Give You Up (Official Video)");
        assert_eq!(read(&path)["dj_set"]["categories"][0]["songs"][1]["artist"], "Rick Astley");
    }

    #[test]
    fn test_explicit_value_wins_over_parsed() {
        let (_dir, path) = songs_file();
        let mut prompter = ScriptedPrompter::new(&[]);
        let added = add_song(&request("Warm Up", Some("Rick"), None), &path, &fetcher(Some("Rick Astley - Never Gonna Give You Up")), &mut prompter).unwrap();
        assert_eq!(added.song.artist, "Rick");
        assert_eq!(added.song.title, "Never Gonna Give You Up");
    }

    #[test]
    fn test_prompt_when_title_unparseable() {
        let (_dir, path) = songs_file();
        let mut prompter = ScriptedPrompter::new(&["Rick Astley", " Never Gonna Give You Up "]);
        let added = add_song(&request("Warm Up", None, None), &path, &fetcher(Some("Never Gonna Give You Up")), &mut prompter).unwrap();
        assert_eq!(prompter.prompts, vec!["Enter artist name: ", "Enter song title: "]);
        assert_eq!(added.song.title, "Never Gonna Give You Up");
    }

    #[test]
    fn test_prompt_when_fetch_fails() {
        let (_dir, path) = songs_file();
        let mut prompter = ScriptedPrompter::new(&["Never Gonna Give You Up"]);
        let added = add_song(&request("Warm Up", Some("Rick Astley"), None), &path, &fetcher(None), &mut prompter).unwrap();
        assert_eq!(prompter.printed[0], "Fetching video information from YouTube...");
        assert_eq!(prompter.printed[1], "Could not fetch video title. Please enter manually:");
        assert_eq!(prompter.prompts, vec!["Enter song title: "]);
        assert_eq!(added.song.artist, "Rick Astley");
    }

    #[test]
    fn test_missing_fields() {
        let (_dir, path) = songs_file();
        let before = fs::read_to_string(&path).unwrap();
        let mut prompter = ScriptedPrompter::new(&["", ""]);
        let err = add_song(&request("Warm Up", None, None), &path, &fetcher(None), &mut prompter).unwrap_err();
        assert_eq!(err.kind, AddSongErrorKind::MissingField);
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_create_category_on_confirm() {
        let (_dir, path) = songs_file();
        let mut prompter = ScriptedPrompter::new(&["Y"]);
        let added = add_song(&request("Techno", Some("Ben Klock"), Some("Subzero")), &path, &fetcher(None), &mut prompter).unwrap();
        assert_eq!(added.category, "Techno");
        assert_eq!(prompter.printed[..4], ["Category 'Techno' not found.", "Available categories:", "  - Warm Up", "  - 80s Pop"]);

        let doc = read(&path);
        assert_eq!(doc["dj_set"]["categories"][2]["category"], "Techno");
        assert_eq!(doc["dj_set"]["categories"][2]["songs"][0]["title"], "Subzero");
    }

    #[test]
    fn test_declined_category() {
        let (_dir, path) = songs_file();
        let before = fs::read_to_string(&path).unwrap();
        let mut prompter = ScriptedPrompter::new(&["n"]);
        let err = add_song(&request("Techno", Some("Ben Klock"), Some("Subzero")), &path, &fetcher(None), &mut prompter).unwrap_err();
        assert_eq!(err.kind, AddSongErrorKind::Declined);
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_missing_and_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("songs.json");
        let mut prompter = ScriptedPrompter::new(&[]);
        let err = add_song(&request("Warm Up", Some("a"), Some("b")), &path, &fetcher(None), &mut prompter).unwrap_err();
        assert_eq!(err.kind, AddSongErrorKind::NotFound);
        assert!(err.to_string().contains("not found"));

        fs::write(&path, "not json").unwrap();
        let err = add_song(&request("Warm Up", Some("a"), Some("b")), &path, &fetcher(None), &mut prompter).unwrap_err();
        assert_eq!(err.kind, AddSongErrorKind::InvalidJson);
        assert!(err.to_string().contains("not valid JSON"));
    }
}
