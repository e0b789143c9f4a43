use env_logger::{fmt::Formatter, Builder, Env, Logger, Target, WriteStyle};
use log::Record;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Copies every log line to stderr and to the append-only log file.
struct Tee {
    file: File,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // A closed stderr must not stop the file from being written.
        let _ = io::stderr().write_all(buf);
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let _ = io::stderr().flush();
        self.file.flush()
    }
}

fn format_line(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    writeln!(
        buf,
        "{} - {} - {}",
        buf.timestamp_millis(),
        record.level(),
        record.args()
    )
}

pub fn build_logger(log_file: &Path) -> io::Result<Logger> {
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;

    Ok(Builder::from_env(Env::default().default_filter_or("info"))
        .format(format_line)
        .write_style(WriteStyle::Never)
        .target(Target::Pipe(Box::new(Tee { file })))
        .build())
}

pub fn init_logging(log_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let logger = build_logger(log_file)?;
    log::set_max_level(logger.filter());
    log::set_boxed_logger(Box::new(logger))?;
    Ok(())
}
