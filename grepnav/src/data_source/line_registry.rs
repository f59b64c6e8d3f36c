use std::io::{BufReader, Read, Seek};
use metrics::{describe_histogram, Unit};
use crate::advanced_io::advanced_buf_reader::BidirectionalBufRead;
use crate::advanced_io::seek_to::SeekTo;
use crate::utils::stat;

pub const BUFFER_SIZE: usize = 1024 * 1024; // 1MB

const METRIC_CRAWL: &str = "LineRegistry: crawl";

/// Keeps ordered set of offsets of line break symbols.
///
/// The registry is filled lazily from the beginning of data: only the prefix that has been
/// asked for is ever read. Content is assumed immutable, so crawled data never expires.
#[derive(Debug)]
pub struct LineRegistry {
    line_breaks: Vec<u64>,
    crawled: u64,
    complete: bool,
    buffer_size: usize,
}

impl LineRegistry {
    pub fn new() -> Self {
        Self::with_buffer_size(BUFFER_SIZE)
    }

    pub fn with_buffer_size(buffer_size: usize) -> Self {
        describe_histogram!(METRIC_CRAWL, Unit::Microseconds, "Registering line breaks");
        LineRegistry {
            line_breaks: vec![],
            crawled: 0,
            complete: false,
            buffer_size: buffer_size.max(1),
        }
    }

    /// Makes sure every line break located before `offset` is registered
    pub fn crawl_until<R: Read + Seek>(&mut self, reader: &mut BufReader<R>, offset: u64) -> std::io::Result<()> {
        if self.complete || self.crawled >= offset {
            return Ok(());
        }
        stat(METRIC_CRAWL, &Unit::Microseconds, || {
            reader.seek_to(self.crawled)?;
            while !self.complete && self.crawled < offset {
                let mut pos = self.crawled;
                let mut found = vec![];
                let bytes_read = reader.read_fluently(self.buffer_size as i64, |chunk| {
                    found.extend(chunk.iter()
                        .enumerate()
                        .filter(|(_, b)| **b == b'\n')
                        .map(|(i, _)| pos + i as u64));
                    pos += chunk.len() as u64;
                })?;
                // registered only after the whole block has been read, so that a failed read
                // can be retried without duplicates
                self.line_breaks.append(&mut found);
                self.crawled += bytes_read;
                if bytes_read == 0 {
                    self.complete = true;
                }
            }
            log::trace!("LineRegistry crawled={}, line breaks={}", self.crawled, self.line_breaks.len());
            Ok(())
        })
    }

    /// Number of registered line breaks strictly before `offset`
    pub fn count_before(&self, offset: u64) -> usize {
        self.line_breaks.partition_point(|b| *b < offset)
    }

    /// Offset of `i`-th line break (0-based)
    pub fn line_break(&self, i: usize) -> Option<u64> {
        self.line_breaks.get(i).copied()
    }

    /// Number of bytes scanned so far. Equals the data length once `is_complete`.
    pub fn crawled(&self) -> u64 {
        self.crawled
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

impl Default for LineRegistry {
    fn default() -> Self {
        Self::new()
    }
}
