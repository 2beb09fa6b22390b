use std::error::Error;
use std::fmt::{Display, Formatter, Result};

#[macro_export]
macro_rules! create_add_song_error {
     ($kind: expr, $($arg:tt)*) => {
        $crate::add_song_error::AddSongError::new($kind, format!($($arg)*))
    }
}

#[macro_export]
macro_rules! create_add_song_error_result {
     ($kind: expr, $($arg:tt)*) => {
        Err($crate::add_song_error::AddSongError::new($kind, format!($($arg)*)))
    }
}

pub use create_add_song_error;
pub use create_add_song_error_result;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AddSongErrorKind {
    NotFound,
    InvalidJson,
    InvalidDocument,
    MissingField,
    Declined,
    Config,
    Io,
}

#[derive(Debug)]
pub struct AddSongError {
    pub kind: AddSongErrorKind,
    pub message: String,
}

impl AddSongError {
    pub const fn new(kind: AddSongErrorKind, message: String) -> Self {
        Self {
            kind,
            message,
        }
    }
}

impl Display for AddSongError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}", self.message)
    }
}

impl Error for AddSongError {}
