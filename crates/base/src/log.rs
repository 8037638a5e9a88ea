use {
    anyhow::Result,
    std::{
        fs::{File, OpenOptions, create_dir_all},
        io::Write,
        path::{Path, PathBuf},
        sync::Mutex,
        time::{SystemTime, UNIX_EPOCH},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Debug => write!(f, "DEBUG"),
            Level::Info => write!(f, "INFO"),
            Level::Warn => write!(f, "WARN"),
            Level::Error => write!(f, "ERROR"),
            Level::Fatal => write!(f, "FATAL"),
        }
    }
}

pub trait Logger: Send + Sync {
    fn log(&self, level: Level, file: &str, line: usize, message: &str);
}

pub static LOGGER: Mutex<Option<Box<dyn Logger>>> = Mutex::new(None);

/// Lowest level that reaches the installed logger.
///
/// Debug builds pass everything, release builds drop `Level::Debug`.
pub fn max_level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    }
}

/// Forward one record to the installed logger, if any. Used by the `log_*!` macros.
pub fn dispatch(level: Level, file: &str, line: usize, message: &str) {
    if level < max_level() {
        return;
    }
    if let Some(logger) = LOGGER.lock().unwrap_or_else(|e| e.into_inner()).as_ref() {
        logger.log(level, file, line, message);
    }
}

/// Replace the installed logger.
pub fn set_logger(logger: Box<dyn Logger>) {
    LOGGER
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .replace(logger);
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub fn format_timestamp() -> String {
    let secs = now_secs();
    let (year, month, day) = civil_from_days((secs / 86400) as i64);
    let time_of_day = secs % 86400;
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
        year,
        month,
        day,
        time_of_day / 3600,
        (time_of_day % 3600) / 60,
        time_of_day % 60
    )
}

pub fn format_today() -> String {
    let (year, month, day) = civil_from_days((now_secs() / 86400) as i64);
    format!("{:04}-{:02}-{:02}", year, month, day)
}

// days since 1970-01-01 to (year, month, day), Howard Hinnant's algorithm
pub(crate) fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y, m, d)
}

pub fn format_line(level: Level, file: &str, line: usize, message: &str) -> String {
    format!(
        "{} [{}] {}:{} - {}",
        format_timestamp(),
        level,
        file,
        line,
        message
    )
}

pub struct StdoutLogger;

impl Logger for StdoutLogger {
    fn log(&self, level: Level, file: &str, line: usize, message: &str) {
        println!("{}", format_line(level, file, line, message));
    }
}

pub fn init_stdout_logger() {
    set_logger(Box::new(StdoutLogger));
}

struct FileLoggerState {
    dir: PathBuf,
    current_date: String,
    file: File,
}

/// Appends to `<dir>/YYYY-MM-DD.log`, switching files when the date changes.
pub struct FileLogger {
    state: Mutex<FileLoggerState>,
}

impl FileLogger {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        create_dir_all(&dir)?;
        let current_date = format_today();
        let file = open_day_file(&dir, &current_date)?;
        Ok(FileLogger {
            state: Mutex::new(FileLoggerState {
                dir,
                current_date,
                file,
            }),
        })
    }
}

fn open_day_file(dir: &Path, date: &str) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(format!("{}.log", date)))
}

impl Logger for FileLogger {
    fn log(&self, level: Level, file: &str, line: usize, message: &str) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let today = format_today();
        if today != state.current_date {
            match open_day_file(&state.dir, &today) {
                Ok(new_file) => {
                    state.file = new_file;
                    state.current_date = today;
                }
                Err(error) => {
                    eprintln!("Failed to open log file for {}: {}", today, error);
                }
            }
        }
        let log_line = format_line(level, file, line, message);
        if let Err(error) = writeln!(state.file, "{}", log_line) {
            eprintln!("Failed to write to log file: {}", error);
            eprintln!("{}", log_line);
        }
    }
}

pub fn init_file_logger(dir: impl Into<PathBuf>) -> Result<()> {
    set_logger(Box::new(FileLogger::new(dir)?));
    Ok(())
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{ $crate::log::dispatch($crate::log::Level::Debug, file!(), line!() as usize, &format!($($arg)*)); }};
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{ $crate::log::dispatch($crate::log::Level::Info, file!(), line!() as usize, &format!($($arg)*)); }};
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{ $crate::log::dispatch($crate::log::Level::Warn, file!(), line!() as usize, &format!($($arg)*)); }};
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{ $crate::log::dispatch($crate::log::Level::Error, file!(), line!() as usize, &format!($($arg)*)); }};
}

#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)*) => {{ let message = format!($($arg)*); $crate::log::dispatch($crate::log::Level::Fatal, file!(), line!() as usize, &message); println!("FATAL ERROR: {}", message); std::process::exit(1); }};
}
