use std::{
    io::{self, Write},
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex, MutexGuard, OnceLock, PoisonError, RwLock,
    },
    time::{Duration, Instant},
};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    const DEFAULT_DECAY: Duration = Duration::from_secs(5);
    const DEFAULT_MAX_VISIBLE: usize = 5;

    LOGGER.get_or_init(|| AppLogger::new(LevelFilter::Warn, DEFAULT_DECAY, DEFAULT_MAX_VISIBLE))
}

/// Installs the app logger as the `log` backend.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = get_logger();
    logger.set_min_level(level);
    log::set_logger(logger)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

#[derive(Debug, Clone)]
pub struct Message {
    pub level: log::Level,
    pub pushed: Instant,
    pub message: String,
    pub source: String,
}

/// Recent messages bucketed by level, newest first in each bucket.
#[derive(Debug, Default)]
struct Logs {
    logs: [Vec<Message>; 5],
}

impl Logs {
    fn push(&mut self, message: Message) {
        self.logs[message.level as usize - 1].insert(0, message);
    }

    fn clear_old(&mut self, now: Instant, decay: Duration) {
        for level in self.logs.iter_mut() {
            level.retain(|msg| now.duration_since(msg.pushed) < decay);
        }
    }
}

/// `log` backend of the app.
///
/// Keeps the last few messages around for the play screen and, unless echo is turned
/// off, also writes them to stderr.
#[derive(Debug)]
pub struct AppLogger {
    min_level: RwLock<LevelFilter>,
    echo: AtomicBool,
    pub decay: Duration,
    pub max_visible: usize,
    logs: Mutex<Logs>,
}

impl AppLogger {
    fn new(min_level: LevelFilter, decay: Duration, max_visible: usize) -> Self {
        Self {
            min_level: RwLock::new(min_level),
            echo: AtomicBool::new(true),
            decay,
            max_visible,
            logs: Mutex::new(Logs::default()),
        }
    }

    pub fn min_level(&self) -> LevelFilter {
        *self.min_level.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_min_level(&self, level: LevelFilter) {
        *self.min_level.write().unwrap_or_else(PoisonError::into_inner) = level;
    }

    /// Turns the stderr copy on or off, the play screen draws messages itself.
    pub fn set_echo(&self, echo: bool) {
        self.echo.store(echo, Ordering::Relaxed);
    }

    fn borrow_mut_logs(&self) -> MutexGuard<'_, Logs> {
        // a panic mid-push leaves the buckets usable
        self.logs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Messages younger than `decay`, most severe first, at most `max_visible` of them.
    pub fn recent(&self) -> Vec<Message> {
        let mut logs = self.borrow_mut_logs();
        logs.clear_old(Instant::now(), self.decay);

        logs.logs
            .iter()
            .flatten()
            .take(self.max_visible)
            .cloned()
            .collect()
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = Message {
            level: record.level(),
            pushed: Instant::now(),
            message: record.args().to_string(),
            source: record.module_path().unwrap_or("unknown").to_string(),
        };

        if self.echo.load(Ordering::Relaxed) {
            eprintln!("[{}] {}: {}", message.level, message.source, message.message);
        }

        self.borrow_mut_logs().push(message);
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}
