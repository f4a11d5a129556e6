//! Logger handles writing `<timestamp> - <LEVEL> - <message>` lines.

use std::fmt;
use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Context;
use chrono::Local;
use tracing::{Dispatch, Event, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::registry::LookupSpan;

use crate::config::{DEFAULT_LOG_FILTER, LogConfig};

/// Local time, millisecond precision, comma before the millis.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Event formatter for the plain line format. Spans are not rendered.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        write!(writer, "{timestamp} - {} - ", event.metadata().level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Build a logger handle over any writer factory.
///
/// An unparsable `filter` falls back to `info`.
pub fn logger_for_writer<W>(writer: W, filter: &str) -> Dispatch
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .event_format(LineFormat)
        .finish();

    Dispatch::new(subscriber)
}

/// Build a logger handle appending to `config.path` (created if missing).
pub fn file_logger(config: &LogConfig) -> anyhow::Result<Dispatch> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.path)
        .with_context(|| format!("failed to open log file {}", config.path.display()))?;

    Ok(logger_for_writer(Mutex::new(file), &config.filter))
}
