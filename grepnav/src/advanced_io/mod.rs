pub mod advanced_buf_reader;
pub mod seek_to;

#[cfg(test)]
mod tests;
