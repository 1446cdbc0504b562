use std::sync::OnceLock;
use chrono::{DateTime, Local};

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        println!("{}", self.format_line(Local::now(), file, line, message));
    }

    fn format_line(&self, now: DateTime<Local>, file: &str, line: u32, message: &str) -> String {
        let timestamp = now.format("%Y-%m-%d %H:%M:%S%.3f");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

/// Messages logged before [`init_logger`] are dropped silently, so library
/// code and unit tests can log without any setup.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    #[test]
    fn test_format_without_prefix_strips_directories() {
        let logger = Logger::new(None);
        let line = logger.format_line(fixed_time(), "common/src/games/snake/game_state.rs", 42, "hello");
        assert_eq!(line, "[2024-03-09 14:05:07.000][game_state.rs:42] hello");
    }

    #[test]
    fn test_format_with_prefix() {
        let logger = Logger::new(Some("Client".to_string()));
        let line = logger.format_line(fixed_time(), "C:\\src\\main.rs", 7, "started");
        assert_eq!(line, "[2024-03-09 14:05:07.000][Client][main.rs:7] started");
    }
}
