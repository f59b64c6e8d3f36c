pub mod hit;
pub mod options;

use crate::data_source::{ByteSource, Direction};
use crate::error::{NavigatorError, NavigatorResult};
use crate::interval::Interval;
use crate::line_index::LineIndex;
use crate::navigator::hit::Hit;
use crate::navigator::options::NavigatorOptions;
use crate::search::searcher::{Searcher, SearchError};
use crate::search::searcher_impl::SearcherImpl;

/// Steps through occurrences of a fixed string, back and forth, starting from a cursor.
///
/// `next` reports the first occurrence that starts strictly after the cursor and moves the
/// cursor one byte past its start. `previous` reports the last occurrence that starts strictly
/// before the cursor and moves the cursor onto its start. Hence repeated calls in one direction
/// never report the same occurrence twice, and a step forth followed by a step back lands on the
/// same occurrence.
///
/// If nothing qualifies and wrapping is enabled, the search is repeated over the whole content.
/// "Nothing found" is `Ok(None)`; `Err` means the content could not be read, in which case the
/// cursor stays where it was.
///
/// Not meant to be shared between threads without external synchronization.
pub struct Navigator<B: ByteSource> {
    source: B,
    pattern: Vec<u8>,
    cursor: u64,
    wrap: bool,
    line_index: LineIndex,
}

impl<B: ByteSource> Navigator<B> {
    pub fn new<P: AsRef<[u8]>>(source: B, pattern: P) -> NavigatorResult<Self> {
        Self::with_options(source, pattern, NavigatorOptions::default())
    }

    pub fn with_options<P: AsRef<[u8]>>(source: B, pattern: P, options: NavigatorOptions) -> NavigatorResult<Self> {
        let pattern = pattern.as_ref().to_vec();
        if pattern.is_empty() {
            return Err(NavigatorError::InvalidInput("Pattern is empty"));
        }
        log::info!("Search: {:?}, {:?}", String::from_utf8_lossy(&pattern), options);
        Ok(Navigator {
            source,
            pattern,
            cursor: options.initial_cursor,
            wrap: options.wrap,
            line_index: LineIndex::new(),
        })
    }

    pub fn next(&mut self) -> NavigatorResult<Option<Hit>> {
        match self.find(Direction::Forward)? {
            Some(hit) => {
                self.cursor = hit.offset + 1;
                Ok(Some(hit))
            },
            None => {
                self.park_on_last_hit()?;
                Ok(None)
            },
        }
    }

    pub fn previous(&mut self) -> NavigatorResult<Option<Hit>> {
        let hit = self.find(Direction::Backward)?;
        if let Some(hit) = &hit {
            self.cursor = hit.offset;
        }
        Ok(hit)
    }

    /// Negative values are clamped to 0
    pub fn set_cursor<I: Into<i128>>(&mut self, offset: I) {
        let offset: i128 = offset.into();
        self.cursor = offset.clamp(0, u64::MAX as i128) as u64;
    }

    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    pub fn set_wrap_enabled(&mut self, wrap: bool) {
        self.wrap = wrap;
    }

    pub fn is_wrap_enabled(&self) -> bool {
        self.wrap
    }

    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    /// Forward search has run off the end. If an occurrence starts right before the cursor (that
    /// is, the cursor is where the last `next` left it), the cursor moves onto that occurrence,
    /// the same place `previous` would have put it. `previous` then continues with the occurrence
    /// before it.
    fn park_on_last_hit(&mut self) -> NavigatorResult<()> {
        let last = match self.cursor.checked_sub(1) {
            Some(last) => last,
            None => return Ok(()),
        };
        let mut reader = self.source.new_reader()?;
        let mut searcher = SearcherImpl::new(&mut reader, &self.pattern);
        match searcher.search(Direction::Forward, Interval::closed(last, last)) {
            Ok(_) => {
                log::debug!("End reached, cursor parked at {}", last);
                self.cursor = last;
                Ok(())
            },
            Err(SearchError::NotFound) => Ok(()),
            Err(SearchError::IO(e)) => Err(NavigatorError::IO(e)),
        }
    }

    fn find(&mut self, direction: Direction) -> NavigatorResult<Option<Hit>> {
        let scope = match direction {
            Direction::Forward => Interval::open_inf(self.cursor),
            Direction::Backward => Interval::inf_open(self.cursor),
        };
        let mut reader = self.source.new_reader()?;

        let occurrence = {
            let mut searcher = SearcherImpl::new(&mut reader, &self.pattern);
            match searcher.search(direction, scope) {
                Err(SearchError::NotFound) if self.wrap => {
                    log::debug!("Nothing found in {}, wrapping around", scope);
                    searcher.search(direction, Interval::all())
                },
                result => result,
            }
        };

        match occurrence {
            Ok(occurrence) => {
                let location = self.line_index.resolve(&mut reader, occurrence.start)?;
                let hit = Hit::located_at(occurrence.start, location);
                log::debug!("{:?} from {}: {}", direction, self.cursor, hit);
                Ok(Some(hit))
            },
            Err(SearchError::NotFound) => {
                log::debug!("{:?} from {}: not found", direction, self.cursor);
                Ok(None)
            },
            Err(SearchError::IO(e)) => {
                log::error!("Failed to search {:?} from {}: {}", direction, self.cursor, e);
                Err(NavigatorError::IO(e))
            },
        }
    }
}
