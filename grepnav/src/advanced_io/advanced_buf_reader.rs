use std::cmp::min;
use std::io::{BufReader, Read, Seek};

const CHUNK_SIZE: usize = 8192;

pub trait BidirectionalBufRead {
    /// Reads at most `abs(n)` bytes and feeds them to `consumer` chunk by chunk.
    ///
    /// If `n >= 0`, bytes are read forward from the current position, which is left right after
    /// the last byte read.
    ///
    /// If `n < 0`, the bytes *preceding* the current position are read (fewer if the beginning of
    /// the stream is reached). Chunks are delivered in their natural (left-to-right) order and
    /// the position is left at the first byte of the block.
    ///
    /// Returns the number of bytes read.
    fn read_fluently<F>(&mut self, n: i64, consumer: F) -> std::io::Result<u64>
        where F: FnMut(&[u8]);
}

impl<R: Seek + Read> BidirectionalBufRead for BufReader<R> {
    fn read_fluently<F>(&mut self, n: i64, mut consumer: F) -> std::io::Result<u64>
        where F: FnMut(&[u8]) {
        let bytes_to_read = if n < 0 {
            let stream_position = self.stream_position()?;
            let len = min(n.unsigned_abs(), stream_position);
            self.seek_relative(-(len as i64))?;
            len
        } else {
            n as u64
        };
        let mut buffer = [0_u8; CHUNK_SIZE];
        let mut bytes_read = 0_u64;
        while bytes_read < bytes_to_read {
            let d = min((bytes_to_read - bytes_read) as usize, buffer.len());
            let b = self.read(&mut buffer[0..d])?;
            if b == 0 {
                break;
            }
            bytes_read += b as u64;
            consumer(&buffer[0..b]);
        }
        if n < 0 {
            self.seek_relative(-(bytes_read as i64))?;
        }
        Ok(bytes_read)
    }
}
