use std::path::PathBuf;
use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    #[arg(short, long, help = "File to search in")]
    pub file: PathBuf,

    #[arg(short, long, help = "Fixed string to look for (not a regular expression)")]
    pub pattern: String,

    #[arg(short, long, help = "Continue from the opposite end when nothing is found")]
    pub wrap: bool,

    #[arg(short, long, default_value_t = 0, allow_hyphen_values = true, help = "Initial byte offset. Negative values are clamped to 0.")]
    pub cursor: i64,

    #[arg(short='L', long="loglevel", help="One of \"OFF\", \"ERROR\", \"WARN\", \"INFO\", \"DEBUG\", \"TRACE\". Case-insensitive.")]
    pub log_level: Option<LevelFilter>,

    #[arg(value_enum, help = "Steps to make, in order. A single `next` by default.")]
    pub steps: Vec<Step>,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum Step {
    #[value(alias = "n")]
    Next,
    #[value(name = "prev", alias = "p")]
    Previous,
}
