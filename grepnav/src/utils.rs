use std::time::Duration;
use log::Level;
use metrics::{histogram, Unit};
use stopwatch::Stopwatch;

/// Strips one trailing `\n` and then one trailing `\r`. Returns the number of bytes removed.
pub fn trim_newline(s: &mut Vec<u8>) -> usize {
    let mut bytes_removed = 0;
    if s.last() == Some(&b'\n') {
        s.pop();
        bytes_removed += 1;
    }
    if s.last() == Some(&b'\r') {
        s.pop();
        bytes_removed += 1;
    }
    bytes_removed
}

/// Runs `f`, logs its duration and records it to histogram `descr`
pub fn stat<R, F>(descr: &'static str, unit: &Unit, f: F) -> R
    where F: FnOnce() -> R {
    stat_l(Level::Trace, descr, unit, f)
}

pub fn stat_l<R, F>(level: Level, descr: &'static str, unit: &Unit, f: F) -> R
    where F: FnOnce() -> R {
    let sw = Stopwatch::start_new();
    let result = f();
    let duration = sw.elapsed();
    log::log!(level, "{} {:?}", descr, duration);
    histogram!(descr).record(duration.to_unit(unit));
    result
}

trait ToUnit {
    fn to_unit(&self, unit: &Unit) -> f64;
}

impl ToUnit for Duration {
    fn to_unit(&self, unit: &Unit) -> f64 {
        match unit {
            Unit::Seconds => self.as_secs_f64(),
            Unit::Milliseconds => self.as_millis() as f64,
            Unit::Nanoseconds => self.as_nanos() as f64,
            _ => self.as_micros() as f64,
        }
    }
}
