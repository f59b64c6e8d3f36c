pub mod searcher;
pub mod searcher_impl;
pub mod search_utils;
