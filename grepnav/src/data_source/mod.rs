pub mod line_registry;

use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::{Path, PathBuf};

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Direction {
    Forward, Backward
}

/// Source of bytes to search in.
///
/// Every call to `new_reader` returns an independent reader positioned at the beginning of the
/// content. Implementations must not change the content between calls.
pub trait ByteSource {
    type Reader: Read + Seek;

    fn get_length(&self) -> std::io::Result<u64>;

    fn new_reader(&self) -> std::io::Result<BufReader<Self::Reader>>;
}

/// Reads a file from disk. The file is (re-)opened on every `new_reader`, so a file that is
/// missing now may become readable later.
#[derive(Debug, Clone)]
pub struct FileBackend {
    file_name: PathBuf
}

impl FileBackend {
    pub fn new<P: Into<PathBuf>>(file_name: P) -> Self {
        FileBackend { file_name: file_name.into() }
    }

    pub fn file_name(&self) -> &Path {
        self.file_name.as_path()
    }
}

impl ByteSource for FileBackend {
    type Reader = File;

    fn get_length(&self) -> std::io::Result<u64> {
        Ok(std::fs::metadata(self.file_name.as_path())?.len())
    }

    fn new_reader(&self) -> std::io::Result<BufReader<File>> {
        log::trace!("Opening {:?}", self.file_name);
        Ok(BufReader::new(File::open(&self.file_name)?))
    }
}

/// In-memory content. Cheap to copy, so the same bytes may back several navigators.
#[derive(Debug, Clone, Copy)]
pub struct StrBackend<'a> {
    s: &'a [u8]
}

impl<'a> StrBackend<'a> {
    pub fn new(s: &'a str) -> Self {
        StrBackend { s: s.as_bytes() }
    }

    pub fn from_bytes(s: &'a [u8]) -> Self {
        StrBackend { s }
    }
}

impl<'a> ByteSource for StrBackend<'a> {
    type Reader = Cursor<&'a [u8]>;

    fn get_length(&self) -> std::io::Result<u64> {
        Ok(self.s.len() as u64)
    }

    fn new_reader(&self) -> std::io::Result<BufReader<Cursor<&'a [u8]>>> {
        Ok(BufReader::new(Cursor::new(self.s)))
    }
}

impl<B: ByteSource + ?Sized> ByteSource for &B {
    type Reader = B::Reader;

    fn get_length(&self) -> std::io::Result<u64> {
        (**self).get_length()
    }

    fn new_reader(&self) -> std::io::Result<BufReader<Self::Reader>> {
        (**self).new_reader()
    }
}
