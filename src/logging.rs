//! Logging integration.
//!
//! The engine reports through the `log` facade: cache activity and hover
//! decisions at `trace`, clamped weights, zero-brightness guards and gray
//! fallbacks at `debug`. [`ColoreLogger`] is a small `log::Log`
//! implementation that writes those records as plain lines to stderr or any
//! other writer.
//!
//! Optional tracing integration is available via `ColoreTracingLayer` when the
//! `tracing` feature is enabled.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use time::{OffsetDateTime, format_description::OwnedFormatItem};

use crate::sync::lock_recover;

/// Plain-text logger for the `log` crate.
///
/// Each record becomes one line:
///
/// ```text
/// 12:03:44 DEBUG    weight 150 clamped to 100 src/mix.rs:48
/// ```
///
/// # Thread Safety
///
/// The output sink and the last printed timestamp are guarded by mutexes
/// with poison recovery, so the logger can be shared across threads.
pub struct ColoreLogger {
    writer: Mutex<Box<dyn Write + Send>>,
    level: LevelFilter,
    show_time: bool,
    omit_repeated_times: bool,
    show_level: bool,
    show_path: bool,
    time_format: OwnedFormatItem,
    last_time: Mutex<Option<String>>,
}

impl Default for ColoreLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ColoreLogger {
    /// Create a logger writing to stderr at `Info` level.
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }

    /// Create a logger writing to `writer`.
    #[must_use]
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        let time_format = time::format_description::parse_owned::<2>("[hour]:[minute]:[second]")
            .unwrap_or_else(|_| OwnedFormatItem::Literal(Vec::<u8>::new().into_boxed_slice()));
        Self {
            writer: Mutex::new(Box::new(writer)),
            level: LevelFilter::Info,
            show_time: true,
            omit_repeated_times: true,
            show_level: true,
            show_path: true,
            time_format,
            last_time: Mutex::new(None),
        }
    }

    /// Set the minimum log level.
    #[must_use]
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable timestamps.
    #[must_use]
    pub fn show_time(mut self, show: bool) -> Self {
        self.show_time = show;
        self
    }

    /// Omit repeated timestamps.
    #[must_use]
    pub fn omit_repeated_times(mut self, omit: bool) -> Self {
        self.omit_repeated_times = omit;
        self
    }

    /// Enable or disable log levels.
    #[must_use]
    pub fn show_level(mut self, show: bool) -> Self {
        self.show_level = show;
        self
    }

    /// Enable or disable the source path column.
    #[must_use]
    pub fn show_path(mut self, show: bool) -> Self {
        self.show_path = show;
        self
    }

    /// Override time format. Invalid descriptions keep the current format.
    #[must_use]
    pub fn time_format(mut self, format: &str) -> Self {
        if let Ok(parsed) = time::format_description::parse_owned::<2>(format) {
            self.time_format = parsed;
        }
        self
    }

    /// Install as the global logger.
    ///
    /// The global max level changes only when the install succeeds.
    ///
    /// # Errors
    ///
    /// Returns `SetLoggerError` if a global logger is already installed.
    pub fn init(self) -> Result<(), SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self)).map(|()| log::set_max_level(level))
    }

    fn format_time(&self) -> String {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        now.format(&self.time_format)
            .unwrap_or_else(|_| now.to_string())
    }

    fn format_record(&self, record: &Record<'_>) -> String {
        let mut line = String::new();

        if self.show_time {
            let time_str = self.format_time();
            let display = if self.omit_repeated_times {
                let mut last = lock_recover(&self.last_time);
                if last.as_ref() == Some(&time_str) {
                    " ".repeat(time_str.len())
                } else {
                    *last = Some(time_str.clone());
                    time_str
                }
            } else {
                time_str
            };
            line.push_str(&display);
            line.push(' ');
        }

        if self.show_level {
            let _ = write!(line, "{:<8} ", record.level().as_str());
        }

        let _ = write!(line, "{}", record.args());

        if self.show_path
            && let Some(path) = record.file()
        {
            line.push(' ');
            line.push_str(path);
            if let Some(line_no) = record.line() {
                let _ = write!(line, ":{line_no}");
            }
        }

        line
    }
}

impl Log for ColoreLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.format_record(record);
        let mut writer = lock_recover(&self.writer);
        let _ = writeln!(writer, "{line}");
    }

    fn flush(&self) {
        let _ = lock_recover(&self.writer).flush();
    }
}

#[cfg(feature = "tracing")]
mod tracing_integration {
    use super::ColoreLogger;
    use log::{Level, Log};
    use std::fmt::{self, Write as _};

    use tracing::field::{Field, Visit};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::{Layer, layer::Context};

    /// Tracing layer that writes events through a [`ColoreLogger`].
    ///
    /// The event message comes first, followed by the remaining fields as
    /// `key=value` pairs in recording order.
    pub struct ColoreTracingLayer {
        logger: ColoreLogger,
    }

    impl Default for ColoreTracingLayer {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ColoreTracingLayer {
        /// Create a tracing layer writing to stderr.
        #[must_use]
        pub fn new() -> Self {
            Self::with_logger(ColoreLogger::new())
        }

        /// Use an existing logger configuration.
        #[must_use]
        pub fn with_logger(logger: ColoreLogger) -> Self {
            Self { logger }
        }

        /// Install as the global tracing subscriber.
        ///
        /// # Errors
        ///
        /// Returns an error if a global subscriber is already set.
        pub fn init(self) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
            use tracing_subscriber::prelude::*;

            tracing::subscriber::set_global_default(tracing_subscriber::registry().with(self))
        }
    }

    /// Collects an event into `message` plus a `key=value` tail.
    #[derive(Default)]
    struct LineBuilder {
        message: String,
        fields: String,
    }

    impl LineBuilder {
        fn push_field(&mut self, field: &Field, value: fmt::Arguments<'_>) {
            if !self.fields.is_empty() {
                self.fields.push(' ');
            }
            let _ = write!(self.fields, "{}={value}", field.name());
        }

        fn finish(self) -> String {
            match (self.message.is_empty(), self.fields.is_empty()) {
                (_, true) => self.message,
                (true, false) => self.fields,
                (false, false) => format!("{} {}", self.message, self.fields),
            }
        }
    }

    impl Visit for LineBuilder {
        fn record_str(&mut self, field: &Field, value: &str) {
            if field.name() == "message" {
                self.message.push_str(value);
            } else {
                self.push_field(field, format_args!("{value}"));
            }
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                let _ = write!(self.message, "{value:?}");
            } else {
                self.push_field(field, format_args!("{value:?}"));
            }
        }
    }

    impl<S> Layer<S> for ColoreTracingLayer
    where
        S: Subscriber,
    {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let metadata = event.metadata();
            let level = log_level(*metadata.level());
            if level > self.logger.level {
                return;
            }

            let mut line = LineBuilder::default();
            event.record(&mut line);
            let line = line.finish();

            self.logger.log(
                &log::Record::builder()
                    .args(format_args!("{line}"))
                    .level(level)
                    .target(metadata.target())
                    .file(metadata.file())
                    .line(metadata.line())
                    .module_path(metadata.module_path())
                    .build(),
            );
        }
    }

    fn log_level(level: tracing::Level) -> Level {
        match level {
            tracing::Level::TRACE => Level::Trace,
            tracing::Level::DEBUG => Level::Debug,
            tracing::Level::INFO => Level::Info,
            tracing::Level::WARN => Level::Warn,
            tracing::Level::ERROR => Level::Error,
        }
    }

}

#[cfg(feature = "tracing")]
pub use tracing_integration::ColoreTracingLayer;
