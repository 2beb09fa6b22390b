pub(crate) mod playlist_repository;
