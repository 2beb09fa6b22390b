use serde_json::{Map, Value};

use crate::add_song_error::{create_add_song_error, create_add_song_error_result, AddSongError, AddSongErrorKind};

pub const DJ_SET_FIELD: &str = "dj_set";
pub const CATEGORIES_FIELD: &str = "categories";
pub const CATEGORY_FIELD: &str = "category";
pub const SONGS_FIELD: &str = "songs";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Song {
    pub title: String,
    pub artist: String,
    pub youtube_url: String,
}

/// The playlist json document.
///
/// Only `dj_set.categories[].category` and `dj_set.categories[].songs` are
/// interpreted, everything else is kept as read so a load/save cycle does
/// not lose any content.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PlaylistDocument {
    root: Value,
}

fn category_name(category: &Value) -> &str {
    category.get(CATEGORY_FIELD).and_then(Value::as_str).unwrap_or_default()
}

impl PlaylistDocument {
    #[cfg(test)]
    pub const fn new(root: Value) -> Self {
        Self { root }
    }

    #[cfg(test)]
    pub const fn as_value(&self) -> &Value {
        &self.root
    }

    fn categories(&self) -> &[Value] {
        self.root.get(DJ_SET_FIELD)
            .and_then(|dj_set| dj_set.get(CATEGORIES_FIELD))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn categories_mut(&mut self) -> Result<&mut Vec<Value>, AddSongError> {
        let Some(root) = self.root.as_object_mut() else {
            return create_add_song_error_result!(AddSongErrorKind::InvalidDocument, "Error: playlist document is not a json object");
        };
        let Some(dj_set) = root.entry(DJ_SET_FIELD).or_insert_with(|| Value::Object(Map::new())).as_object_mut() else {
            return create_add_song_error_result!(AddSongErrorKind::InvalidDocument, "Error: '{DJ_SET_FIELD}' is not a json object");
        };
        dj_set.entry(CATEGORIES_FIELD).or_insert_with(|| Value::Array(Vec::new())).as_array_mut()
            .ok_or_else(|| create_add_song_error!(AddSongErrorKind::InvalidDocument, "Error: '{CATEGORIES_FIELD}' is not a json array"))
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories().iter().map(category_name).collect()
    }

    pub fn category_name(&self, index: usize) -> Option<&str> {
        self.categories().get(index).map(category_name)
    }

    /// Exact case-insensitive match first, then the first category containing `name`.
    pub fn find_category(&self, name: &str) -> Option<usize> {
        let query = name.to_lowercase();
        let names: Vec<String> = self.categories().iter().map(|cat| category_name(cat).to_lowercase()).collect();
        names.iter().position(|cat| *cat == query)
            .or_else(|| names.iter().position(|cat| cat.contains(query.as_str())))
    }

    /// Appends an empty category at the end of the list and returns its index.
    pub fn create_category(&mut self, name: &str) -> Result<usize, AddSongError> {
        let categories = self.categories_mut()?;
        let mut category = Map::new();
        category.insert(CATEGORY_FIELD.to_string(), Value::String(name.to_string()));
        category.insert(SONGS_FIELD.to_string(), Value::Array(Vec::new()));
        categories.push(Value::Object(category));
        Ok(categories.len() - 1)
    }

    pub fn append_song(&mut self, index: usize, song: &Song) -> Result<(), AddSongError> {
        let value = serde_json::to_value(song)
            .map_err(|err| create_add_song_error!(AddSongErrorKind::InvalidDocument, "Error: cant serialize song: {err}"))?;
        let categories = self.categories_mut()?;
        let Some(category) = categories.get_mut(index).and_then(Value::as_object_mut) else {
            return create_add_song_error_result!(AddSongErrorKind::InvalidDocument, "Error: category at index {index} is not a json object");
        };
        match category.entry(SONGS_FIELD).or_insert_with(|| Value::Array(Vec::new())) {
            Value::Array(songs) => {
                songs.push(value);
                Ok(())
            }
            _ => create_add_song_error_result!(AddSongErrorKind::InvalidDocument, "Error: '{SONGS_FIELD}' is not a json array"),
        }
    }

    pub fn songs(&self, index: usize) -> &[Value] {
        self.categories().get(index)
            .and_then(|category| category.get(SONGS_FIELD))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
