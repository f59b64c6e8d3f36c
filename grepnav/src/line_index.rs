use std::io::{BufRead, BufReader, ErrorKind, Read, Seek};
use crate::advanced_io::seek_to::SeekTo;
use crate::data_source::line_registry::LineRegistry;
use crate::utils;

/// Line that contains some offset
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LineLocation {
    /// 1-based
    pub line_no: u64,
    /// offset of the first byte of the line
    pub start: u64,
    /// byte offset within the line, 0-based
    pub column: u64,
    /// length of `content` in bytes
    pub length: u64,
    /// line without its terminator and trailing `\r`. Invalid UTF-8 is replaced.
    pub content: String,
}

/// Maps absolute byte offsets to lines.
///
/// Lines are separated by `\n`. A line owns every offset from its first byte up to and including
/// its terminator, so an offset pointing at `\n` (or at `\r` of `\r\n`) belongs to the line being
/// terminated. An offset right after a final `\n` belongs to an empty line that follows it.
/// All positions are in bytes; no encoding is assumed.
#[derive(Debug, Default)]
pub struct LineIndex {
    registry: LineRegistry,
}

impl LineIndex {
    pub fn new() -> Self {
        LineIndex {
            registry: LineRegistry::new(),
        }
    }

    pub fn with_registry(registry: LineRegistry) -> Self {
        LineIndex { registry }
    }

    /// Resolves `offset` into line number, column and line content. `reader` must read the same
    /// content on every call.
    pub fn resolve<R: Read + Seek>(&mut self, reader: &mut BufReader<R>, offset: u64) -> std::io::Result<LineLocation> {
        let (line_no, start) = self.locate(reader, offset)?;

        reader.seek_to(start)?;
        let mut bytes = vec![];
        reader.read_until(b'\n', &mut bytes)?;
        utils::trim_newline(&mut bytes);

        let location = LineLocation {
            line_no,
            start,
            column: offset - start,
            length: bytes.len() as u64,
            content: String::from_utf8_lossy(&bytes).into_owned(),
        };
        log::trace!("LineIndex#resolve offset={} -> {:?}", offset, location);
        Ok(location)
    }

    /// Returns offset of the first byte of the line that contains `offset`
    pub fn line_start<R: Read + Seek>(&mut self, reader: &mut BufReader<R>, offset: u64) -> std::io::Result<u64> {
        self.locate(reader, offset).map(|(_, start)| start)
    }

    fn locate<R: Read + Seek>(&mut self, reader: &mut BufReader<R>, offset: u64) -> std::io::Result<(u64, u64)> {
        self.registry.crawl_until(reader, offset)?;
        if self.registry.is_complete() && offset > self.registry.crawled() {
            return Err(std::io::Error::new(
                ErrorKind::InvalidInput,
                format!("Offset {} is beyond the end of data ({})", offset, self.registry.crawled())));
        }
        let preceding_breaks = self.registry.count_before(offset);
        let start = match preceding_breaks {
            0 => 0,
            n => self.registry.line_break(n - 1).map_or(0, |b| b + 1),
        };
        Ok((preceding_breaks as u64 + 1, start))
    }
}

// Tests are included according to http://xion.io/post/code/rust-unit-test-placement.html
#[cfg(test)]
#[path = "./line_index_tests.rs"]
mod line_index_tests;
