use std::fmt::{Display, Formatter};
use crate::line_index::LineLocation;

/// Single match reported by [`Navigator`](crate::navigator::Navigator)
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Hit {
    /// absolute byte offset of the match
    pub offset: u64,
    /// 1-based
    pub line_no: u64,
    /// byte offset of the match within its line, 0-based
    pub column: u64,
    /// the whole line, terminator stripped
    pub line: String,
}

impl Hit {
    pub fn new<T: ToString>(offset: u64, line_no: u64, column: u64, line: T) -> Self {
        Hit {
            offset,
            line_no,
            column,
            line: line.to_string(),
        }
    }

    pub fn located_at(offset: u64, location: LineLocation) -> Self {
        Hit {
            offset,
            line_no: location.line_no,
            column: location.column,
            line: location.content,
        }
    }
}

/// `line_no,column,offset,line`
impl Display for Hit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{},{}", self.line_no, self.column, self.offset, self.line)
    }
}
