use crate::data_source::Direction;
use crate::interval::Interval;

// half-open segment [start, end)
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Occurrence {
    pub start: u64,
    pub end: u64,
}

pub trait Searcher {
    /// Finds the occurrence whose start belongs to `range`: the first one if `direction` is
    /// `Forward`, the last one otherwise.
    fn search(&mut self, direction: Direction, range: Interval<u64>) -> SearchResult;
}

#[derive(Debug)]
pub enum SearchError {
    NotFound,
    IO(std::io::Error)
}

pub type SearchResult = Result<Occurrence, SearchError>;

impl Occurrence {
    pub fn new(start: u64, end: u64) -> Self {
        Occurrence { start, end }
    }

    pub fn with_len(start: u64, len: usize) -> Self {
        Self::new(start, start + len as u64)
    }
}

impl From<std::io::Error> for SearchError {
    fn from(e: std::io::Error) -> Self {
        SearchError::IO(e)
    }
}

impl PartialEq<SearchError> for SearchError {
    fn eq(&self, other: &SearchError) -> bool {
        match (self, other) {
            (SearchError::NotFound, SearchError::NotFound) => true,
            (SearchError::IO(a), SearchError::IO(b)) => a.kind() == b.kind(),
            _ => false,
        }
    }
}
