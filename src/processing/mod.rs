pub mod add_song;
pub mod prompter;
pub mod title_fetcher;
pub mod title_parser;
