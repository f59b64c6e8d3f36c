pub mod advanced_io;
pub mod data_source;
pub mod error;
pub mod interval;
pub mod line_index;
pub mod navigator;
pub mod search;
pub mod utils;

#[cfg(test)]
mod test_extensions;

pub use data_source::{ByteSource, FileBackend, StrBackend};
pub use error::{NavigatorError, NavigatorResult};
pub use navigator::Navigator;
pub use navigator::hit::Hit;
pub use navigator::options::{NavigatorOptions, NavigatorOptionsBuilder};
