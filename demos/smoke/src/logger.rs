use log::LevelFilter;

/// Writes every record to stderr as `[LEVEL]: file@line: message`.
pub struct Logger;

impl log::Log for Logger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level_msg = format!("[{:>5}]: ", record.level());
        let file_msg = match (record.file(), record.line()) {
            (Some(file), Some(line)) => format!("{file}@{line}: "),
            _ => "???@???: ".to_string(),
        };

        // Continuation lines line up with the first line's message.
        let indent = " ".repeat(level_msg.chars().count() + file_msg.chars().count());
        let content_msg = record.args().to_string().replace('\n', &format!("\n{indent}"));

        eprintln!("{level_msg}{file_msg}{content_msg}");
    }

    fn flush(&self) {}
}

static LOGGER: Logger = Logger;

pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
