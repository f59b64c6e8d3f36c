extern crate clap;
extern crate log4rs;

mod args;

use std::fs::OpenOptions;
use std::panic;
use anyhow::Context;
use clap::Parser;
use log4rs::append::file::FileAppender;
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Config;
use log4rs::config::{Appender, Root};
use log::LevelFilter;
use grepnav::{FileBackend, Navigator, NavigatorOptionsBuilder};
use crate::args::{Args, Step};

const LOG_FILE: &str = "./grepnav.log";

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(args.log_level.unwrap_or(LevelFilter::Info))?;
    init_panic_hook();

    run(args)
}

fn init_logging(level: LevelFilter) -> anyhow::Result<()> {
    let file = OpenOptions::new().write(true).open(LOG_FILE);
    if let Ok(file) = file {
        let _ = file.set_len(0);
    }

    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d} {l} {t} - {m}{n}")))
        .build(LOG_FILE)?;

    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder()
            .appender("logfile")
            .build(level))?;

    log4rs::init_config(config)?;

    log::info!("Logging from grepnav started");
    Ok(())
}

fn init_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        if let Some(location) = panic_info.location() {
            log::error!("panic occurred: {:?} at {} line {}:{}", panic_info, location.file(), location.line(), location.column());
        } else {
            log::error!("panic occurred: {:?}", panic_info);
        }
    }));
}

fn run(args: Args) -> anyhow::Result<()> {
    let options = NavigatorOptionsBuilder::default()
        .wrap(args.wrap)
        .build()?;
    let mut navigator = Navigator::with_options(FileBackend::new(&args.file), &args.pattern, options)?;
    navigator.set_cursor(args.cursor);

    let steps = if args.steps.is_empty() { vec![Step::Next] } else { args.steps };
    for step in steps {
        let hit = match step {
            Step::Next => navigator.next(),
            Step::Previous => navigator.previous(),
        }.with_context(|| format!("Failed to read {:?}", args.file))?;

        match hit {
            Some(hit) => println!("{}", hit),
            None => println!("-"),
        }
    }
    Ok(())
}
