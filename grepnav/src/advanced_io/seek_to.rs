use std::io::{BufReader, Read, Seek};

pub trait SeekTo {
    /// Moves to absolute position `pos`, keeping the read buffer whenever possible.
    fn seek_to(&mut self, pos: u64) -> std::io::Result<()>;
}

impl<R: Read + Seek> SeekTo for BufReader<R> {
    fn seek_to(&mut self, pos: u64) -> std::io::Result<()> {
        let cur = self.stream_position()?;
        if pos == cur {
            return Ok(());
        }
        self.seek_relative(pos as i64 - cur as i64)
    }
}
