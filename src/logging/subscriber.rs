//! Tracing subscriber setup: console formatter and initialisation.
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, format::Writer};
use tracing_subscriber::registry::LookupSpan;

/// Target used for stage headers.
pub(super) const STAGE_TARGET: &str = "ini::stage";

/// Extracts the `message` field from a [`tracing::Event`].
#[derive(Default)]
struct MessageExtractor {
    message: String,
}

impl tracing::field::Visit for MessageExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// A [`FormatEvent`] that emits compact, coloured console lines.
struct IniFormatter {
    ansi: bool,
}

impl IniFormatter {
    fn paint(&self, code: &str, text: &str) -> String {
        if self.ansi {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }
}

impl<S, N> FormatEvent<S, N> for IniFormatter
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let level = *metadata.level();

        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        let msg = &extractor.message;

        match level {
            tracing::Level::ERROR => writeln!(writer, "{} {msg}", self.paint("31", "error:")),
            tracing::Level::WARN => writeln!(writer, "{} {msg}", self.paint("33", "warning:")),
            tracing::Level::INFO if metadata.target() == STAGE_TARGET => {
                writeln!(writer, "{} {}", self.paint("1;34", "==>"), self.paint("1", msg))
            }
            tracing::Level::INFO => writeln!(writer, "  {msg}"),
            _ => writeln!(writer, "  {}", self.paint("2", msg)),
        }
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// All events go to stderr so that stdout carries only command output.
/// `verbose` lowers the threshold from `INFO` to `DEBUG`.  Must be called
/// once at program startup, before any logging.
pub fn init_subscriber(verbose: bool) {
    use tracing_subscriber::{
        Layer as _, filter::LevelFilter, fmt, layer::SubscriberExt as _,
        util::SubscriberInitExt as _,
    };

    let console_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let console_layer = fmt::layer()
        .event_format(IniFormatter { ansi: true })
        .with_writer(std::io::stderr)
        .with_filter(console_level);

    tracing_subscriber::registry().with(console_layer).init();
}
