use std::cmp::{max, min};
use std::io::{BufReader, Read, Seek, SeekFrom};
use metrics::{describe_histogram, Unit};
use crate::advanced_io::advanced_buf_reader::BidirectionalBufRead;
use crate::advanced_io::seek_to::SeekTo;
use crate::data_source::Direction;
use crate::interval::Interval;
use crate::search::search_utils::{calculate_start_bounds, find_first, find_last, StartBounds};
use crate::search::searcher::{Occurrence, Searcher, SearchResult};
use crate::search::searcher::SearchError::NotFound;
use crate::utils::stat;

pub const BUFFER_SIZE: usize = 64 * 1024;

const METRIC_SCAN: &str = "Searcher: scan";

/// Fixed-string searcher. Streams the reader block by block, so only `O(block + pattern)` bytes
/// are held in memory at once.
pub struct SearcherImpl<'a, R>
    where R: Read + Seek
{
    reader: &'a mut BufReader<R>,
    pattern: &'a [u8],
    buffer_size: usize,
}

impl<'a, R> SearcherImpl<'a, R>
    where R: Read + Seek
{
    pub fn new(reader: &'a mut BufReader<R>, pattern: &'a [u8]) -> Self {
        Self::with_buffer_size(reader, pattern, BUFFER_SIZE)
    }

    /// `buffer_size` is the number of bytes read per block. It never gets below 1.
    pub fn with_buffer_size(reader: &'a mut BufReader<R>, pattern: &'a [u8], buffer_size: usize) -> Self {
        describe_histogram!(METRIC_SCAN, Unit::Microseconds, "Scanning for a fixed string");
        SearcherImpl {
            reader,
            pattern,
            buffer_size: max(buffer_size, 1),
        }
    }
}

impl<'a, R> Searcher for SearcherImpl<'a, R>
    where R: Read + Seek
{
    fn search(&mut self, direction: Direction, range: Interval<u64>) -> SearchResult {
        if self.pattern.is_empty() {
            return Err(NotFound);
        }
        let bounds = calculate_start_bounds(&range)?;
        log::trace!("SearcherImpl#search direction={:?}, range={}", direction, range);

        stat(METRIC_SCAN, &Unit::Microseconds, || match direction {
            Direction::Forward => self.scan(bounds),
            Direction::Backward => self.scan_backward(bounds),
        })
    }
}

impl<'a, R> SearcherImpl<'a, R> where R: Read + Seek {

    fn scan(&mut self, bounds: StartBounds) -> SearchResult {
        let pattern = self.pattern;
        let length = self.reader.seek(SeekFrom::End(0))?;
        if bounds.first.saturating_add(pattern.len() as u64) > length {
            return Err(NotFound);
        }
        self.reader.seek_to(bounds.first)?;

        // window always starts at `window_start` and keeps `pattern.len() - 1` bytes of the
        // previous block, so occurrences crossing a block boundary are seen in full
        let mut window: Vec<u8> = Vec::with_capacity(self.buffer_size + pattern.len());
        let mut window_start = bounds.first;
        loop {
            let bytes_read = self.reader.read_fluently(self.buffer_size as i64, |chunk| {
                window.extend_from_slice(chunk)
            })?;
            if let Some(i) = find_first(&window, pattern) {
                let start = window_start + i as u64;
                log::trace!("SearcherImpl#scan found {}", start);
                break if bounds.last.map_or(true, |last| start <= last) {
                    Ok(Occurrence::with_len(start, pattern.len()))
                } else {
                    Err(NotFound)
                };
            }
            if bytes_read == 0 {
                break Err(NotFound);
            }
            let keep = min(pattern.len() - 1, window.len());
            let drained = window.len() - keep;
            window.drain(..drained);
            window_start += drained as u64;
            if bounds.last.filter(|last| window_start > *last).is_some() {
                break Err(NotFound);
            }
        }
    }

    fn scan_backward(&mut self, bounds: StartBounds) -> SearchResult {
        let pattern = self.pattern;
        let pattern_len = pattern.len() as u64;
        let length = self.reader.seek(SeekFrom::End(0))?;
        let end = match bounds.last {
            Some(last) => min(last.saturating_add(pattern_len), length),
            None => length,
        };
        if end < bounds.first.saturating_add(pattern_len) {
            return Err(NotFound);
        }
        self.reader.seek_to(end)?;

        // `carry` holds the first `pattern.len() - 1` bytes of the block to the right
        let mut carry: Vec<u8> = vec![];
        loop {
            let mut block = Vec::with_capacity(self.buffer_size + carry.len());
            let bytes_read = self.reader.read_fluently(-(self.buffer_size as i64), |chunk| {
                block.extend_from_slice(chunk)
            })?;
            let block_start = self.reader.stream_position()?;
            block.extend_from_slice(&carry);
            if let Some(i) = find_last(&block, pattern) {
                let start = block_start + i as u64;
                log::trace!("SearcherImpl#scan_backward found {}", start);
                break if start >= bounds.first {
                    Ok(Occurrence::with_len(start, pattern.len()))
                } else {
                    Err(NotFound)
                };
            }
            if bytes_read == 0 || block_start <= bounds.first {
                break Err(NotFound);
            }
            block.truncate(min(pattern.len() - 1, block.len()));
            carry = block;
        }
    }
}

// Tests are included according to http://xion.io/post/code/rust-unit-test-placement.html
#[cfg(test)]
#[path = "./searcher_tests.rs"]
mod searcher_tests;
