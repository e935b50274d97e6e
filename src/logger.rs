//! In-memory log sink.
//!
//! Pickers usually run inside a host UI without a usable stdout. This logger
//! keeps the most recent records in a bounded global queue so the host can
//! display them (for example in a debug overlay).

use lazy_static::lazy_static;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

/// Default number of records kept by [`init()`] and [`get_logger()`].
pub const DEFAULT_CAPACITY: usize = 1_000;

/// Saves all log records in a global deque.
pub struct WheelLogger;

static LOGGER: WheelLogger = WheelLogger;

/// A log record.
#[derive(Clone, Debug)]
pub struct Record {
    /// Log level used for this record
    pub level: log::Level,
    /// Module that emitted the record
    pub target: String,
    /// Time this message was logged
    pub time: time::OffsetDateTime,
    /// Message content
    pub message: String,
}

lazy_static! {
    /// Circular buffer for logs.
    pub static ref LOGS: Mutex<VecDeque<Record>> =
        Mutex::new(VecDeque::new());
}

fn logs() -> MutexGuard<'static, VecDeque<Record>> {
    // A panic while holding the lock leaves the queue itself intact.
    LOGS.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Log a record in the picker's log queue.
///
/// When the queue is full, the oldest record is dropped.
pub fn log(record: &log::Record<'_>) {
    let mut logs = logs();
    if logs.capacity() == 0 {
        return;
    }
    if logs.len() == logs.capacity() {
        logs.pop_front();
    }
    logs.push_back(Record {
        level: record.level(),
        target: record.target().to_string(),
        message: format!("{}", record.args()),
        time: time::OffsetDateTime::now_local()
            .unwrap_or_else(|_| time::OffsetDateTime::now_utc()),
    });
}

impl log::Log for WheelLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        log(record);
    }

    fn flush(&self) {}
}

/// Initialize the picker logger as the global `log` backend.
///
/// Returns an error if another logger was already installed.
pub fn init() -> Result<(), log::SetLoggerError> {
    reserve_logs(DEFAULT_CAPACITY);

    log::set_logger(&LOGGER)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

/// Return a logger that stores records in the picker's log queue.
///
/// Useful when composing with another logger.
pub fn get_logger() -> WheelLogger {
    reserve_logs(DEFAULT_CAPACITY);
    WheelLogger
}

/// Adds `n` more entries to the log queue.
///
/// You should call this if you're not using `init()` nor `get_logger()`.
pub fn reserve_logs(n: usize) {
    logs().reserve(n);
}

/// Returns a copy of the records currently in the queue, oldest first.
pub fn snapshot() -> Vec<Record> {
    logs().iter().cloned().collect()
}

/// Removes every record from the queue.
pub fn clear() {
    logs().clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_queued() {
        reserve_logs(16);

        log(&log::Record::builder()
            .args(format_args!("settled on row {}", 3))
            .level(log::Level::Debug)
            .target("wheel_picker::test")
            .build());

        let records = snapshot();
        let record = records
            .iter()
            .rev()
            .find(|r| r.target == "wheel_picker::test")
            .expect("record should be queued");
        assert_eq!(record.level, log::Level::Debug);
        assert_eq!(record.message, "settled on row 3");
    }
}
