use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

#[macro_export]
macro_rules! exit {
    ($($arg:tt)*) => {{
        $crate::utils::file_utils::report_fatal(&format!($($arg)*), &mut std::io::stderr());
        std::process::exit(1);
    }};
}

/// Fatal messages are logged, or written to `out` when error logging is switched off.
pub fn report_fatal<W: Write>(message: &str, out: &mut W) {
    if log::log_enabled!(log::Level::Error) {
        log::error!("{message}");
    } else {
        let _ = writeln!(out, "{message}");
    }
}

pub fn file_writer<W>(w: W) -> BufWriter<W>
where
    W: Write,
{
    BufWriter::with_capacity(131_072, w)
}

pub fn file_reader<R>(r: R) -> BufReader<R>
where
    R: Read,
{
    BufReader::with_capacity(131_072, r)
}

#[inline]
pub fn open_file(file_name: &Path) -> Result<File, std::io::Error> {
    File::open(file_name)
}

pub fn path_exists(file_path: &Path) -> bool {
    if let Ok(metadata) = fs::metadata(file_path) {
        return metadata.is_file();
    }
    false
}
